//! Fixed style palette and the `xl/styles.xml` part

use tracing::debug;

/// Cell format index into [`CELL_FORMATS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleIndex {
    /// Default style - no formatting
    Default = 0,
    /// Bold white text on blue for the header row
    Header = 1,
    /// `yyyy-mm-dd` number format
    Date = 2,
    StatusTodo = 3,
    StatusInProgress = 4,
    StatusDone = 5,
    StatusBlocked = 6,
}

impl StyleIndex {
    /// Get the style index for XML
    pub fn index(&self) -> u32 {
        *self as u32
    }
}

/// Custom number format id (ids below 164 are built in)
pub const DATE_NUM_FMT_ID: u32 = 164;
pub const DATE_FORMAT_CODE: &str = "yyyy-mm-dd";

struct Font {
    bold: bool,
    /// `None` uses theme colour 1
    rgb: Option<&'static str>,
}

struct Fill {
    pattern: &'static str,
    rgb: Option<&'static str>,
}

struct CellFormat {
    num_fmt_id: u32,
    font_id: u32,
    fill_id: u32,
}

static FONTS: [Font; 2] = [
    Font {
        bold: false,
        rgb: None,
    },
    Font {
        bold: true,
        rgb: Some("FFFFFFFF"),
    },
];

// The first two fills are reserved by the format.
static FILLS: [Fill; 6] = [
    Fill {
        pattern: "none",
        rgb: None,
    },
    Fill {
        pattern: "gray125",
        rgb: None,
    },
    Fill {
        pattern: "solid",
        rgb: Some("FF4F81BD"),
    },
    Fill {
        pattern: "solid",
        rgb: Some("FFFFF2CC"),
    },
    Fill {
        pattern: "solid",
        rgb: Some("FFD9EAD3"),
    },
    Fill {
        pattern: "solid",
        rgb: Some("FFF4CCCC"),
    },
];

/// Ordered by [`StyleIndex`]
static CELL_FORMATS: [CellFormat; 7] = [
    // Default
    CellFormat {
        num_fmt_id: 0,
        font_id: 0,
        fill_id: 0,
    },
    // Header
    CellFormat {
        num_fmt_id: 0,
        font_id: 1,
        fill_id: 2,
    },
    // Date
    CellFormat {
        num_fmt_id: DATE_NUM_FMT_ID,
        font_id: 0,
        fill_id: 0,
    },
    // TODO status
    CellFormat {
        num_fmt_id: 0,
        font_id: 0,
        fill_id: 3,
    },
    // IN_PROGRESS status
    CellFormat {
        num_fmt_id: 0,
        font_id: 0,
        fill_id: 3,
    },
    // DONE status
    CellFormat {
        num_fmt_id: 0,
        font_id: 0,
        fill_id: 4,
    },
    // BLOCKED status
    CellFormat {
        num_fmt_id: 0,
        font_id: 0,
        fill_id: 5,
    },
];

const STATUS_STYLES: [(&str, StyleIndex); 4] = [
    ("TODO", StyleIndex::StatusTodo),
    ("IN_PROGRESS", StyleIndex::StatusInProgress),
    ("DONE", StyleIndex::StatusDone),
    ("BLOCKED", StyleIndex::StatusBlocked),
];

/// Pick the status cell style. Unknown statuses fall back to the TODO style.
pub fn style_for(status: &str) -> StyleIndex {
    let status = status.trim();
    STATUS_STYLES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(status))
        .map(|&(_, style)| style)
        .unwrap_or_else(|| {
            if !status.is_empty() {
                debug!(status, "unknown status, using TODO style");
            }
            StyleIndex::StatusTodo
        })
}

/// Render the style sheet part from the static tables
pub fn styles_xml() -> String {
    let mut num = itoa::Buffer::new();
    let mut xml = String::with_capacity(2048);
    xml.push_str(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<numFmts count="1"><numFmt numFmtId=""#,
    );
    xml.push_str(num.format(DATE_NUM_FMT_ID));
    xml.push_str(r#"" formatCode=""#);
    xml.push_str(DATE_FORMAT_CODE);
    xml.push_str("\"/></numFmts>\n");

    xml.push_str("<fonts count=\"");
    xml.push_str(num.format(FONTS.len()));
    xml.push_str("\">\n");
    for font in &FONTS {
        xml.push_str("<font>");
        if font.bold {
            xml.push_str("<b/>");
        }
        xml.push_str("<sz val=\"11\"/>");
        match font.rgb {
            Some(rgb) => {
                xml.push_str("<color rgb=\"");
                xml.push_str(rgb);
                xml.push_str("\"/>");
            }
            None => xml.push_str("<color theme=\"1\"/>"),
        }
        xml.push_str("<name val=\"Calibri\"/><family val=\"2\"/></font>\n");
    }
    xml.push_str("</fonts>\n");

    xml.push_str("<fills count=\"");
    xml.push_str(num.format(FILLS.len()));
    xml.push_str("\">\n");
    for fill in &FILLS {
        xml.push_str("<fill><patternFill patternType=\"");
        xml.push_str(fill.pattern);
        match fill.rgb {
            Some(rgb) => {
                xml.push_str("\"><fgColor rgb=\"");
                xml.push_str(rgb);
                xml.push_str("\"/><bgColor indexed=\"64\"/></patternFill></fill>\n");
            }
            None => xml.push_str("\"/></fill>\n"),
        }
    }
    xml.push_str("</fills>\n");

    xml.push_str(
        r#"<borders count="1">
<border><left/><right/><top/><bottom/><diagonal/></border>
</borders>
<cellStyleXfs count="1">
<xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
</cellStyleXfs>
"#,
    );

    xml.push_str("<cellXfs count=\"");
    xml.push_str(num.format(CELL_FORMATS.len()));
    xml.push_str("\">\n");
    for format in &CELL_FORMATS {
        xml.push_str("<xf numFmtId=\"");
        xml.push_str(num.format(format.num_fmt_id));
        xml.push_str("\" fontId=\"");
        xml.push_str(num.format(format.font_id));
        xml.push_str("\" fillId=\"");
        xml.push_str(num.format(format.fill_id));
        xml.push_str("\" borderId=\"0\" xfId=\"0\"");
        if format.num_fmt_id != 0 {
            xml.push_str(" applyNumberFormat=\"1\"");
        }
        if format.font_id != 0 {
            xml.push_str(" applyFont=\"1\"");
        }
        if format.fill_id != 0 {
            xml.push_str(" applyFill=\"1\"");
        }
        xml.push_str("/>\n");
    }
    xml.push_str("</cellXfs>\n");

    xml.push_str(
        r#"<cellStyles count="1">
<cellStyle name="Normal" xfId="0" builtinId="0"/>
</cellStyles>
</styleSheet>"#,
    );
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_for_known_statuses() {
        assert_eq!(style_for("TODO"), StyleIndex::StatusTodo);
        assert_eq!(style_for("in_progress"), StyleIndex::StatusInProgress);
        assert_eq!(style_for("Done"), StyleIndex::StatusDone);
        assert_eq!(style_for(" blocked "), StyleIndex::StatusBlocked);
    }

    #[test]
    fn test_style_for_falls_back_to_todo() {
        assert_eq!(style_for("UNKNOWN"), StyleIndex::StatusTodo);
        assert_eq!(style_for(""), StyleIndex::StatusTodo);
        assert_eq!(style_for("IN PROGRESS"), StyleIndex::StatusTodo);
    }

    #[test]
    fn test_style_indices() {
        assert_eq!(StyleIndex::Default.index(), 0);
        assert_eq!(StyleIndex::Header.index(), 1);
        assert_eq!(StyleIndex::Date.index(), 2);
        assert_eq!(StyleIndex::StatusBlocked.index(), 6);
        assert_eq!(CELL_FORMATS.len(), 7);
    }

    #[test]
    fn test_styles_xml_counts() {
        let xml = styles_xml();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\""));
        assert!(xml.contains(r#"<numFmt numFmtId="164" formatCode="yyyy-mm-dd"/>"#));
        assert!(xml.contains(r#"<fonts count="2">"#));
        assert!(xml.contains(r#"<fills count="6">"#));
        assert!(xml.contains(r#"<cellXfs count="7">"#));
        assert_eq!(xml.matches("<xf ").count(), 8); // 1 cellStyleXf + 7 cellXfs
    }

    #[test]
    fn test_styles_xml_header_and_date_formats() {
        let xml = styles_xml();
        assert!(xml.contains(
            r#"<xf numFmtId="0" fontId="1" fillId="2" borderId="0" xfId="0" applyFont="1" applyFill="1"/>"#
        ));
        assert!(xml.contains(
            r#"<xf numFmtId="164" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/>"#
        ));
        assert!(xml.contains(r#"<fgColor rgb="FFD9EAD3"/>"#));
    }
}
