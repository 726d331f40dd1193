//! Usage report readers
//!
//! Implements `ReportSource` for report files on disk. The format is chosen
//! from the file extension.
//!
//! - [`delimited`] - Comma-separated exports
//! - [`workbook`] - Spreadsheet workbooks (first worksheet)

pub mod delimited;
pub mod workbook;

use std::path::{Path, PathBuf};

use crate::core::ports::{RawReport, ReportSource};
use crate::error::{DeadwoodError, Result};

/// Report file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// `.csv`
    Delimited,
    /// `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`
    Workbook,
}

impl ReportFormat {
    /// Detect the format from a path's extension (case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Delimited),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Workbook),
            _ => None,
        }
    }
}

/// A usage report stored in a file
#[derive(Debug, Clone)]
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    /// Create a report source for a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSource for ReportFile {
    fn load(&self) -> Result<RawReport> {
        if !self.path.is_file() {
            return Err(DeadwoodError::report(&self.path, "file not found"));
        }
        let report = match ReportFormat::from_path(&self.path) {
            Some(ReportFormat::Delimited) => delimited::read(&self.path)?,
            Some(ReportFormat::Workbook) => workbook::read(&self.path)?,
            None => {
                return Err(DeadwoodError::report(
                    &self.path,
                    "unsupported extension, expected .csv or a spreadsheet workbook",
                ));
            },
        };
        log::debug!(
            "loaded report {}: {} header(s), {} row(s)",
            self.path.display(),
            report.headers.len(),
            report.rows.len()
        );
        Ok(report)
    }
}
