//! Milestone records and the fixed worksheet column layout

use crate::error::{MilestoneError, Result};
use chrono::NaiveDate;

/// Rows in a worksheet, header included
pub const MAX_ROWS: u32 = 1_048_576;

/// A single validated project milestone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub name: String,
    pub owner: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Status as loaded; styling matches it case-insensitively
    pub status: String,
    /// Completion percentage, 0..=100
    pub progress: u8,
    pub notes: String,
}

/// Worksheet columns in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Milestone = 1,
    Owner = 2,
    StartDate = 3,
    DueDate = 4,
    Status = 5,
    Progress = 6,
    Notes = 7,
}

impl Column {
    /// All columns, left to right
    pub const ALL: [Column; 7] = [
        Column::Milestone,
        Column::Owner,
        Column::StartDate,
        Column::DueDate,
        Column::Status,
        Column::Progress,
        Column::Notes,
    ];

    /// 1-based column index
    pub fn index(&self) -> u32 {
        *self as u32
    }

    /// Header label written to row 1
    pub fn header(&self) -> &'static str {
        match self {
            Column::Milestone => "Milestone",
            Column::Owner => "Owner",
            Column::StartDate => "Start date",
            Column::DueDate => "Due date",
            Column::Status => "Status",
            Column::Progress => "Progress (%)",
            Column::Notes => "Notes",
        }
    }
}

impl Milestone {
    /// Field value as it reads in the sheet, used for width estimation
    pub fn display_value(&self, column: Column) -> String {
        match column {
            Column::Milestone => self.name.clone(),
            Column::Owner => self.owner.clone(),
            Column::StartDate => self.start_date.format("%Y-%m-%d").to_string(),
            Column::DueDate => self.due_date.format("%Y-%m-%d").to_string(),
            Column::Status => self.status.clone(),
            Column::Progress => self.progress.to_string(),
            Column::Notes => self.notes.clone(),
        }
    }
}

/// Non-empty, ordered list of milestones
///
/// The record at position `p` lands on worksheet row `p + 2`, so at most
/// `MAX_ROWS - 1` records fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestones(Vec<Milestone>);

impl Milestones {
    pub fn new(records: Vec<Milestone>) -> Result<Self> {
        if records.is_empty() {
            return Err(MilestoneError::EmptyInput);
        }
        check_capacity(records.len())?;
        Ok(Milestones(records))
    }

    pub fn as_slice(&self) -> &[Milestone] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Milestone> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Milestone> {
        self.0
    }
}

fn check_capacity(count: usize) -> Result<()> {
    let max = MAX_ROWS as usize - 1;
    if count > max {
        return Err(MilestoneError::TooManyRows { count, max });
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Milestones {
    type Item = &'a Milestone;
    type IntoIter = std::slice::Iter<'a, Milestone>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
