//! Usage report row model

use serde::Serialize;

/// One record of the usage report
///
/// All fields are whitespace-trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageRow {
    /// Usage status as reported (e.g. "Unused", "Used by unused")
    pub status: String,

    /// Object type as reported (e.g. "Measure", "Calculated Column")
    pub object_type: String,

    /// Table the object belongs to
    pub table: String,

    /// Object name
    pub name: String,
}

impl UsageRow {
    /// Create a row, trimming every field
    pub fn new(
        status: impl AsRef<str>,
        object_type: impl AsRef<str>,
        table: impl AsRef<str>,
        name: impl AsRef<str>,
    ) -> Self {
        Self {
            status: status.as_ref().trim().to_string(),
            object_type: object_type.as_ref().trim().to_string(),
            table: table.as_ref().trim().to_string(),
            name: name.as_ref().trim().to_string(),
        }
    }

    /// Whether the row names both a table and an object
    #[must_use]
    pub fn is_addressable(&self) -> bool {
        !self.table.is_empty() && !self.name.is_empty()
    }
}
