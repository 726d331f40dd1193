//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `report/` - Usage report readers (CSV, spreadsheet workbooks)
//! - `tmdl/` - Folder of `.tmdl` table documents
//! - `log_file` - Removal log persistence

pub mod log_file;
pub mod report;
pub mod tmdl;

pub use log_file::write_removal_log;
pub use report::{ReportFile, ReportFormat};
pub use tmdl::TmdlDirectory;
