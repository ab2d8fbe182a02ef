//! Error types for milestone export

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for milestone export operations
pub type Result<T> = std::result::Result<T, MilestoneError>;

/// Main error type for loading milestones and writing the workbook
#[derive(Error, Debug)]
pub enum MilestoneError {
    /// Required CSV columns are absent (sorted, all of them)
    #[error("Missing columns in CSV: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A data row failed validation
    #[error("Invalid data in row {row}: {source}")]
    RowValidation {
        row: usize,
        #[source]
        source: RowError,
    },

    /// The source contained no milestones
    #[error("CSV file does not contain any milestones")]
    EmptyInput,

    /// More records than one worksheet can hold
    #[error("{count} milestones exceed the worksheet limit of {max} data rows")]
    TooManyRows { count: usize, max: usize },

    /// The destination workbook could not be created or written
    #[error("Failed to write workbook '{}': {reason}", path.display())]
    OutputWriteFailure { path: PathBuf, reason: String },

    /// The input file could not be opened
    #[error("Failed to read input '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Why a single CSV row was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("column '{column}' is missing from this row")]
    MissingField { column: &'static str },

    #[error("column '{column}' must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { column: &'static str, value: String },

    #[error("progress must be an integer, got '{value}'")]
    InvalidProgress { value: String },

    #[error("progress must be between 0 and 100, got {value}")]
    ProgressOutOfRange { value: i64 },
}

impl MilestoneError {
    pub(crate) fn write_failure(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        MilestoneError::OutputWriteFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
