//! Error taxonomy for a pruning run
//!
//! Input errors abort before any document is touched. Document I/O errors
//! abort the run at the failing file.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::services::schema::SchemaError;

/// Errors that can stop a pruning run
#[derive(Debug, Error)]
pub enum DeadwoodError {
    /// The usage report could not be opened or decoded
    #[error("usage report unreadable: {path}: {reason}")]
    ReportUnreadable {
        /// Report path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// One or more required report columns were not found
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The table document directory does not exist
    #[error("document directory not found: {0}")]
    DocumentDirMissing(PathBuf),

    /// A document could not be listed, read or written
    #[error("document i/o failed for {path}: {source}")]
    DocumentIo {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error walking the document directory
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Configuration file missing or malformed
    #[error("configuration error: {0}")]
    Config(String),
}

impl DeadwoodError {
    /// Wrap an I/O error with the document path it occurred on
    pub fn document_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DocumentIo {
            path: path.into(),
            source,
        }
    }

    /// Build a report error from any displayable cause
    pub fn report(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::ReportUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error happened before any document was touched
    #[must_use]
    pub const fn is_input_fatal(&self) -> bool {
        matches!(
            self,
            Self::ReportUnreadable { .. }
                | Self::Schema(_)
                | Self::DocumentDirMissing(_)
                | Self::Config(_)
        )
    }
}

/// Convenience alias used across the library
pub type Result<T, E = DeadwoodError> = std::result::Result<T, E>;
