//! Table guard
//!
//! Some tables must never be modified: ones the model owner explicitly
//! protects, and the calendar tables the modelling tool generates
//! automatically (recognised by name prefix).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Auto-generated date table prefixes
pub const DEFAULT_PROTECTED_PREFIXES: &[&str] = &["LocalDateTable_", "DateTableTemplate_"];

/// Tables protected out of the box
pub const DEFAULT_PROTECTED_TABLES: &[&str] = &["d_calendario"];

/// Exact names and name prefixes of tables that are never rewritten
///
/// Fields missing from a deserialized value keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectedTables {
    /// Exact table names
    pub tables: BTreeSet<String>,

    /// Table name prefixes
    pub prefixes: Vec<String>,
}

impl Default for ProtectedTables {
    fn default() -> Self {
        Self {
            tables: DEFAULT_PROTECTED_TABLES.iter().map(ToString::to_string).collect(),
            prefixes: DEFAULT_PROTECTED_PREFIXES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ProtectedTables {
    /// A guard that protects nothing
    #[must_use]
    pub const fn none() -> Self {
        Self {
            tables: BTreeSet::new(),
            prefixes: Vec::new(),
        }
    }

    /// Add an exact table name
    pub fn protect(&mut self, table: impl Into<String>) {
        self.tables.insert(table.into());
    }

    /// Add a table name prefix
    pub fn protect_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    /// Whether the table must be left untouched
    ///
    /// Independent of whether anything in the table is flagged for removal.
    #[must_use]
    pub fn is_protected(&self, table: &str) -> bool {
        self.tables.contains(table) || self.prefixes.iter().any(|p| table.starts_with(p.as_str()))
    }
}
