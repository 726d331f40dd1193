//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//!
//! - [`schema`] - Resolve report headers to column roles
//! - [`classifier`] - Decide which usage rows are removable
//! - [`scanner`] - Remove flagged blocks from a table document
//! - [`pruner`] - Run the scanner over every document in a store

pub mod classifier;
pub mod pruner;
pub mod scanner;
pub mod schema;

pub use classifier::{build_index, classify};
pub use pruner::{PruneOptions, PruneSummary, Pruner, ReportPlan, TableOutcome, TableStatus};
pub use scanner::{BlockScanner, Matching, PrunedDocument, indentation_depth};
pub use schema::{AliasTable, ColumnMapping, ColumnRole, SchemaError, resolve};
