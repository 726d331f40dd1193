//! Removal log
//!
//! One entry per deleted block, in the order blocks were removed.

use std::fmt::Write;

use serde::Serialize;

/// Width of the separator line under the log header
const SEPARATOR_WIDTH: usize = 30;

/// A removed block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalLogEntry {
    /// Table the block was removed from
    pub table: String,
    /// Identifier of the removed block
    pub name: String,
}

impl std::fmt::Display for RemovalLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Removed: [{}] -> {}", self.table, self.name)
    }
}

/// Append-only log of removed blocks
///
/// Owned by the caller of a run and passed to the scanner for each document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RemovalLog {
    entries: Vec<RemovalLogEntry>,
}

impl RemovalLog {
    /// Create an empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a removed block
    pub fn record(&mut self, table: impl Into<String>, name: impl Into<String>) {
        self.entries.push(RemovalLogEntry {
            table: table.into(),
            name: name.into(),
        });
    }

    /// Entries in creation order
    #[must_use]
    pub fn entries(&self) -> &[RemovalLogEntry] {
        &self.entries
    }

    /// Number of removed blocks
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was removed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the persisted report: count header, separator, one line per entry
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total items removed: {}", self.entries.len());
        let _ = writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH));
        let lines: Vec<String> = self.entries.iter().map(ToString::to_string).collect();
        out.push_str(&lines.join("\n"));
        out
    }
}
