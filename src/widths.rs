//! Column width heuristic

use crate::types::{Column, Milestone};

pub const MIN_WIDTH: u32 = 10;
pub const MAX_WIDTH: u32 = 60;
/// Extra characters added to the longest value
pub const WIDTH_MARGIN: u32 = 2;

/// Estimate a width per column from header and value lengths.
///
/// Lengths are counted in characters; font metrics are ignored.
pub fn estimate_widths(records: &[Milestone]) -> [u32; 7] {
    let mut widths = Column::ALL.map(|column| char_len(column.header()));
    for record in records {
        for (width, column) in widths.iter_mut().zip(Column::ALL) {
            *width = (*width).max(char_len(&record.display_value(column)));
        }
    }
    widths.map(|width| width.saturating_add(WIDTH_MARGIN).clamp(MIN_WIDTH, MAX_WIDTH))
}

fn char_len(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}
