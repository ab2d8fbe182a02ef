//! Worksheet assembly: columns, frozen header, rows and auto-filter

use crate::address::cell_ref;
use crate::cell::{number_cell, row, text_cell};
use crate::date::serial_date;
use crate::styles::{style_for, StyleIndex};
use crate::types::{Column, Milestone, Milestones, MAX_ROWS};
use crate::widths::estimate_widths;

/// Height of the header row in points
pub const HEADER_ROW_HEIGHT: f64 = 22.0;

const WORKSHEET_START: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#;

const SHEET_VIEWS: &str = r#"<sheetViews><sheetView workbookViewId="0"><pane ySplit="1" topLeftCell="A2" activePane="bottomLeft" state="frozen"/></sheetView></sheetViews><sheetFormatPr defaultRowHeight="15"/>"#;

/// Worksheet row holding the record at `position` (row 1 is the header)
///
/// Positions past the sheet limit map to `MAX_ROWS`; `Milestones::new`
/// refuses lists long enough to reach them.
pub fn data_row_number(position: usize) -> u32 {
    u32::try_from(position)
        .ok()
        .and_then(|p| p.checked_add(2))
        .filter(|row| *row <= MAX_ROWS)
        .unwrap_or(MAX_ROWS)
}

/// Build the complete `xl/worksheets/sheet1.xml` document
pub fn build_sheet(milestones: &Milestones) -> String {
    let records = milestones.as_slice();
    let mut xml = String::with_capacity(1024 + records.len() * 512);
    xml.push_str(WORKSHEET_START);
    xml.push_str(SHEET_VIEWS);
    push_cols(&mut xml, &estimate_widths(records));

    xml.push_str("<sheetData>");
    xml.push_str(&header_row());
    for (position, record) in records.iter().enumerate() {
        xml.push_str(&data_row(data_row_number(position), record));
    }
    xml.push_str("</sheetData>");

    let last_row = data_row_number(records.len() - 1);
    xml.push_str("<autoFilter ref=\"A1:");
    xml.push_str(&cell_ref(Column::Notes.index(), last_row));
    xml.push_str("\"/></worksheet>");
    xml
}

fn push_cols(xml: &mut String, widths: &[u32; 7]) {
    let mut num = itoa::Buffer::new();
    xml.push_str("<cols>");
    for (column, width) in Column::ALL.iter().zip(widths) {
        let index = column.index();
        xml.push_str("<col min=\"");
        xml.push_str(num.format(index));
        xml.push_str("\" max=\"");
        xml.push_str(num.format(index));
        xml.push_str("\" width=\"");
        xml.push_str(num.format(*width));
        xml.push_str("\" customWidth=\"1\"/>");
    }
    xml.push_str("</cols>");
}

fn header_row() -> String {
    let cells = Column::ALL.map(|column| {
        text_cell(
            &cell_ref(column.index(), 1),
            column.header(),
            Some(StyleIndex::Header),
        )
    });
    row(1, &cells, Some(HEADER_ROW_HEIGHT))
}

fn data_row(row_number: u32, record: &Milestone) -> String {
    let at = |column: Column| cell_ref(column.index(), row_number);
    let cells = [
        text_cell(&at(Column::Milestone), &record.name, None),
        text_cell(&at(Column::Owner), &record.owner, None),
        number_cell(
            &at(Column::StartDate),
            serial_date(record.start_date),
            Some(StyleIndex::Date),
        ),
        number_cell(
            &at(Column::DueDate),
            serial_date(record.due_date),
            Some(StyleIndex::Date),
        ),
        text_cell(
            &at(Column::Status),
            &record.status,
            Some(style_for(&record.status)),
        ),
        number_cell(&at(Column::Progress), i64::from(record.progress), None),
        text_cell(&at(Column::Notes), &record.notes, None),
    ];
    row(row_number, &cells, None)
}
