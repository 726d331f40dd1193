//! Usage report port
//!
//! Defines the interface for loading the raw usage report table.

use crate::error::Result;

/// Header row plus data rows, every cell rendered as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReport {
    /// Column headers, in file order
    pub headers: Vec<String>,
    /// Data rows; may be shorter or longer than the header row
    pub rows: Vec<Vec<String>>,
}

/// Source of a usage report
pub trait ReportSource {
    /// Load the whole report
    fn load(&self) -> Result<RawReport>;
}
