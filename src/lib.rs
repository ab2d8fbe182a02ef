//! # milestone-xlsx
//!
//! Export project milestones to an Excel (`.xlsx`) workbook, written directly
//! as Office Open XML without a spreadsheet library.
//!
//! ## Features
//!
//! - **One styled sheet**: bold header row, frozen pane, auto-filter, column widths
//! - **Real dates**: start and due dates stored as serial numbers with a date format
//! - **Status colours**: TODO / IN_PROGRESS / DONE / BLOCKED each get a fill
//! - **Validated input**: CSV loading reports missing columns and bad rows by number
//! - **Atomic output**: the workbook appears at its path only once fully written
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use milestone_xlsx::{export, load_milestones, ExportOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let milestones = load_milestones("milestones.csv")?;
//! export("milestones.xlsx", &milestones, &ExportOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! Records can also be built in code:
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use milestone_xlsx::{export, ExportOptions, Milestone, Milestones};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let milestones = Milestones::new(vec![Milestone {
//!     name: "Kickoff".to_string(),
//!     owner: "Ann".to_string(),
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     status: "DONE".to_string(),
//!     progress: 100,
//!     notes: String::new(),
//! }])?;
//! export("kickoff.xlsx", &milestones, &ExportOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod cell;
pub mod config;
pub mod date;
pub mod error;
pub mod loader;
pub mod package;
pub mod sheet;
pub mod styles;
pub mod types;
pub mod widths;

pub use config::ExportOptions;
pub use error::{MilestoneError, Result, RowError};
pub use loader::{load_milestones, read_milestones};
pub use package::{export, write_package};
pub use sheet::build_sheet;
pub use styles::{style_for, styles_xml, StyleIndex};
pub use types::{Column, Milestone, Milestones, MAX_ROWS};
