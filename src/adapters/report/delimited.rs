//! CSV usage reports

use std::path::Path;

use crate::core::ports::RawReport;
use crate::error::{DeadwoodError, Result};

/// Read a CSV report; the first record is the header row
///
/// Records may have more or fewer fields than the header.
pub fn read(path: &Path) -> Result<RawReport> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| DeadwoodError::report(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| DeadwoodError::report(path, e))?
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DeadwoodError::report(path, e))?;
        rows.push(record.iter().map(ToString::to_string).collect());
    }

    Ok(RawReport { headers, rows })
}
