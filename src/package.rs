//! OOXML package assembly
//!
//! Every part is rendered in memory first, packed into a temporary archive
//! next to the destination and then renamed into place, so a failed export
//! never leaves a truncated `.xlsx` behind.

use crate::config::ExportOptions;
use crate::error::{MilestoneError, Result};
use crate::sheet::build_sheet;
use crate::styles::styles_xml;
use crate::types::Milestones;
use s_zip::StreamingZipWriter;
use std::path::Path;
use tracing::{debug, info};

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Milestones";

pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub const ROOT_RELS_PATH: &str = "_rels/.rels";
pub const WORKBOOK_PATH: &str = "xl/workbook.xml";
pub const WORKBOOK_RELS_PATH: &str = "xl/_rels/workbook.xml.rels";
pub const WORKSHEET_PATH: &str = "xl/worksheets/sheet1.xml";
pub const STYLES_PATH: &str = "xl/styles.xml";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
</Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// `xl/workbook.xml` declaring the one sheet, bound to `rId1`
pub fn workbook_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets>
<sheet name="{}" sheetId="1" r:id="rId1"/>
</sheets>
</workbook>"#,
        SHEET_NAME
    )
}

/// Pack the six parts into `path`
///
/// The archive is written to a temporary file in the destination directory
/// and renamed over `path` only once complete.
pub fn write_package<P: AsRef<Path>>(
    path: P,
    sheet_xml: &str,
    styles_xml: &str,
    options: &ExportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let workbook = workbook_xml();
    let parts: [(&str, &str); 6] = [
        (CONTENT_TYPES_PATH, CONTENT_TYPES_XML),
        (ROOT_RELS_PATH, ROOT_RELS_XML),
        (WORKBOOK_PATH, workbook.as_str()),
        (WORKBOOK_RELS_PATH, WORKBOOK_RELS_XML),
        (WORKSHEET_PATH, sheet_xml),
        (STYLES_PATH, styles_xml),
    ];

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Removed on drop unless persisted
    let staging = tempfile::Builder::new()
        .prefix(".milestones-")
        .suffix(".xlsx.part")
        .tempfile_in(dir)
        .map_err(|e| MilestoneError::write_failure(path, e))?;

    let mut zip = StreamingZipWriter::with_compression(staging.path(), options.compression_level)
        .map_err(|e| MilestoneError::write_failure(path, e))?;
    for (name, body) in parts {
        debug!(part = name, bytes = body.len(), "writing package part");
        zip.start_entry(name)
            .map_err(|e| MilestoneError::write_failure(path, e))?;
        zip.write_data(body.as_bytes())
            .map_err(|e| MilestoneError::write_failure(path, e))?;
    }
    zip.finish()
        .map_err(|e| MilestoneError::write_failure(path, e))?;

    staging
        .persist(path)
        .map_err(|e| MilestoneError::write_failure(path, e.error))?;
    Ok(())
}

/// Build the worksheet and style sheet for `milestones` and write the package
pub fn export<P: AsRef<Path>>(
    path: P,
    milestones: &Milestones,
    options: &ExportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let sheet = build_sheet(milestones);
    write_package(path, &sheet, &styles_xml(), options)?;
    info!(
        path = %path.display(),
        rows = milestones.len(),
        "wrote milestone workbook"
    );
    Ok(())
}
