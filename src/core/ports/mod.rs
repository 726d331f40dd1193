//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (usage report files, table document folders).
//!
//! Implementations live in the `adapters` module.

mod document_store;
mod report_source;

pub use document_store::{DocumentRef, DocumentStore};
pub use report_source::{RawReport, ReportSource};
