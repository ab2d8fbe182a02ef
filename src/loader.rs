//! CSV milestone loading and validation
//!
//! Every check happens here so that the workbook writer only ever sees valid,
//! non-empty input.

use crate::error::{MilestoneError, Result, RowError};
use crate::types::{Milestone, Milestones};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Columns the CSV header must contain
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "name",
    "owner",
    "start_date",
    "due_date",
    "status",
    "progress",
    "notes",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load milestones from a CSV file
pub fn load_milestones<P: AsRef<Path>>(path: P) -> Result<Milestones> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MilestoneError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading milestones");
    read_milestones(file)
}

/// Read milestones from any CSV source
pub fn read_milestones<R: Read>(reader: R) -> Result<Milestones> {
    // Ragged rows are reported per row by `ColumnMap::field`
    let mut csv = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let columns = ColumnMap::from_headers(csv.headers()?)?;

    let mut records = Vec::new();
    for (offset, row) in csv.records().enumerate() {
        // Line 1 is the header
        let row_number = offset + 2;
        let row = row?;
        let record = columns
            .parse(&row)
            .map_err(|source| MilestoneError::RowValidation {
                row: row_number,
                source,
            })?;
        records.push(record);
    }
    debug!(count = records.len(), "milestones loaded");
    Milestones::new(records)
}

/// Header position of each required column
struct ColumnMap([usize; 7]);

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut positions = [0usize; 7];
        let mut missing = Vec::new();
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            match headers.iter().position(|h| h == name) {
                Some(index) => *slot = index,
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            missing.sort();
            return Err(MilestoneError::MissingColumns { columns: missing });
        }
        Ok(ColumnMap(positions))
    }

    fn field<'r>(
        &self,
        row: &'r StringRecord,
        column: usize,
    ) -> std::result::Result<&'r str, RowError> {
        row.get(self.0[column]).ok_or(RowError::MissingField {
            column: REQUIRED_COLUMNS[column],
        })
    }

    fn parse(&self, row: &StringRecord) -> std::result::Result<Milestone, RowError> {
        let name = self.field(row, 0)?;
        let owner = self.field(row, 1)?;
        let start_date = parse_date("start_date", self.field(row, 2)?)?;
        let due_date = parse_date("due_date", self.field(row, 3)?)?;
        let status = self.field(row, 4)?;
        let progress = parse_progress(self.field(row, 5)?)?;
        let notes = self.field(row, 6)?;
        Ok(Milestone {
            name: name.to_string(),
            owner: owner.to_string(),
            start_date,
            due_date,
            status: status.to_uppercase(),
            progress,
            notes: notes.to_string(),
        })
    }
}

fn parse_date(column: &'static str, value: &str) -> std::result::Result<NaiveDate, RowError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| RowError::InvalidDate {
        column,
        value: value.to_string(),
    })
}

fn parse_progress(value: &str) -> std::result::Result<u8, RowError> {
    let progress: i64 = value.parse().map_err(|_| RowError::InvalidProgress {
        value: value.to_string(),
    })?;
    u8::try_from(progress)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or(RowError::ProgressOutOfRange { value: progress })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,owner,start_date,due_date,status,progress,notes\n";

    fn load(body: &str) -> Result<Milestones> {
        read_milestones(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn test_load_valid_rows() {
        let milestones = load(
            "Kickoff, Ann ,2024-01-01,2024-01-15,done,100,\n\
             Design,Bob,2024-01-16,2024-02-01,in_progress,40,\"Needs review, soon\"\n",
        )
        .unwrap();

        assert_eq!(milestones.len(), 2);
        let first = &milestones.as_slice()[0];
        assert_eq!(first.owner, "Ann");
        assert_eq!(first.status, "DONE");
        assert_eq!(first.progress, 100);
        assert_eq!(first.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(milestones.as_slice()[1].notes, "Needs review, soon");
    }

    #[test]
    fn test_columns_in_any_order() {
        let csv = "notes,progress,status,due_date,start_date,owner,name,extra\n\
                   n,5,todo,2024-02-01,2024-01-01,Ann,Plan,x\n";
        let milestones = read_milestones(csv.as_bytes()).unwrap();
        assert_eq!(milestones.as_slice()[0].name, "Plan");
        assert_eq!(milestones.as_slice()[0].notes, "n");
    }

    #[test]
    fn test_missing_columns_sorted() {
        let err = read_milestones("status,name,owner,progress\n".as_bytes()).unwrap_err();
        match err {
            MilestoneError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["due_date", "notes", "start_date"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_date_names_row() {
        let err = load(
            "Kickoff,Ann,2024-01-01,2024-01-15,TODO,0,\n\
             Launch,Ann,2024-13-01,2024-01-15,TODO,0,\n",
        )
        .unwrap_err();
        match err {
            MilestoneError::RowValidation { row, source } => {
                assert_eq!(row, 3);
                assert_eq!(
                    source,
                    RowError::InvalidDate {
                        column: "start_date",
                        value: "2024-13-01".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_progress_validation() {
        let err = load("A,B,2024-01-01,2024-01-02,TODO,101,\n").unwrap_err();
        assert!(matches!(
            err,
            MilestoneError::RowValidation {
                row: 2,
                source: RowError::ProgressOutOfRange { value: 101 }
            }
        ));

        let err = load("A,B,2024-01-01,2024-01-02,TODO,-1,\n").unwrap_err();
        assert!(matches!(
            err,
            MilestoneError::RowValidation {
                source: RowError::ProgressOutOfRange { value: -1 },
                ..
            }
        ));

        let err = load("A,B,2024-01-01,2024-01-02,TODO,half,\n").unwrap_err();
        assert!(matches!(
            err,
            MilestoneError::RowValidation {
                source: RowError::InvalidProgress { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_short_row_reports_row_number() {
        let err = load(
            "Kickoff,Ann,2024-01-01,2024-01-15,DONE,100,\n\
             Launch,Ann,2024-01-01\n",
        )
        .unwrap_err();
        match err {
            MilestoneError::RowValidation { row, source } => {
                assert_eq!(row, 3);
                assert_eq!(source, RowError::MissingField { column: "due_date" });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let milestones = load("Kickoff,Ann,2024-01-01,2024-01-15,DONE,100,,spare\n").unwrap();
        assert_eq!(milestones.as_slice()[0].notes, "");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(load(""), Err(MilestoneError::EmptyInput)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_milestones("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, MilestoneError::InputRead { .. }));
    }
}
