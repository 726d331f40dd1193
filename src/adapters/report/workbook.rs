//! Spreadsheet usage reports
//!
//! Analyzer exports are usually `.xlsx`. Only the first worksheet is read,
//! and its first row is the header row.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::core::ports::RawReport;
use crate::error::{DeadwoodError, Result};

/// Render a cell as text; empty cells become empty strings
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read the first worksheet of a workbook
pub fn read(path: &Path) -> Result<RawReport> {
    let mut workbook = open_workbook_auto(path).map_err(|e| DeadwoodError::report(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DeadwoodError::report(path, "workbook has no worksheets"))?
        .map_err(|e| DeadwoodError::report(path, e))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();
    let rows = rows.collect();

    Ok(RawReport { headers, rows })
}
