//! Document store port
//!
//! Defines the interface for enumerating, reading and rewriting table
//! documents.

use std::path::PathBuf;

use crate::error::Result;

/// One table document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Table name (file name without extension)
    pub table: String,
    /// Location of the document
    pub path: PathBuf,
}

/// Storage holding one document per table
pub trait DocumentStore {
    /// Every document, in processing order
    fn list(&self) -> Result<Vec<DocumentRef>>;

    /// Read a whole document
    fn read(&self, doc: &DocumentRef) -> Result<String>;

    /// Replace a whole document
    fn write(&self, doc: &DocumentRef, content: &str) -> Result<()>;
}
