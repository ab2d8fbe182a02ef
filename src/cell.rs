//! Cell and row markup for `sheetData`

use crate::styles::StyleIndex;
use std::borrow::Cow;

/// Characters allowed in XML 1.0 documents
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape text for XML content and attribute values
///
/// `\r` is written as a character reference so parsers do not fold it into
/// `\n`; characters XML cannot represent at all are dropped.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'' | '\r') || !is_xml_char(c))
    {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    Cow::Owned(out)
}

fn open_cell(xml: &mut String, reference: &str, style: Option<StyleIndex>) {
    xml.push_str("<c r=\"");
    xml.push_str(reference);
    xml.push('"');
    if let Some(style) = style {
        xml.push_str(" s=\"");
        xml.push_str(itoa::Buffer::new().format(style.index()));
        xml.push('"');
    }
}

/// Inline string cell: `<c r="A2" t="inlineStr"><is><t>..</t></is></c>`
pub fn text_cell(reference: &str, value: &str, style: Option<StyleIndex>) -> String {
    let mut xml = String::with_capacity(48 + value.len());
    open_cell(&mut xml, reference, style);
    // Readers strip edge whitespace unless told to keep it
    if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
        xml.push_str(" t=\"inlineStr\"><is><t xml:space=\"preserve\">");
    } else {
        xml.push_str(" t=\"inlineStr\"><is><t>");
    }
    xml.push_str(&escape_xml(value));
    xml.push_str("</t></is></c>");
    xml
}

/// Numeric cell: `<c r="C2" s="2"><v>45292</v></c>`
pub fn number_cell(reference: &str, value: i64, style: Option<StyleIndex>) -> String {
    let mut xml = String::with_capacity(40);
    open_cell(&mut xml, reference, style);
    xml.push_str("><v>");
    xml.push_str(itoa::Buffer::new().format(value));
    xml.push_str("</v></c>");
    xml
}

/// Wrap cells in a `<row>`; a height marks the row as custom-height
pub fn row<I, S>(row_number: u32, cells: I, height: Option<f64>) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut xml = String::from("<row r=\"");
    xml.push_str(itoa::Buffer::new().format(row_number));
    xml.push('"');
    if let Some(height) = height {
        xml.push_str(" ht=\"");
        xml.push_str(&height.to_string());
        xml.push_str("\" customHeight=\"1\"");
    }
    xml.push('>');
    for cell in cells {
        xml.push_str(cell.as_ref());
    }
    xml.push_str("</row>");
    xml
}
