//! Domain models for deadwood
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`UsageRow`] - One record of the usage report
//! - [`ObjectKind`] - Measure or column
//! - [`RemovalIndex`] - Per-table set of removable object names
//! - [`ProtectedTables`] - Tables that must never be modified
//! - [`BlockKeyword`] - Keywords that open a block in a table document
//! - [`RemovalLog`] - Append-only record of removed blocks

mod block;
mod object_kind;
mod protected;
mod removal_index;
mod removal_log;
mod usage_row;

pub use block::{BlockKeyword, BlockStart};
pub use object_kind::ObjectKind;
pub use protected::ProtectedTables;
pub use removal_index::RemovalIndex;
pub use removal_log::{RemovalLog, RemovalLogEntry};
pub use usage_row::UsageRow;
