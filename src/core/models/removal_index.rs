//! Removal index model
//!
//! Maps a table name to the object names flagged for removal in it. The kind
//! of each flagged object is kept alongside the name, so callers can choose
//! between kind-blind lookups (name only) and kind-aware lookups.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::ObjectKind;

/// Per-table set of object names eligible for deletion
///
/// Built once from classified usage rows and never mutated afterwards.
/// Table and object names are matched exactly (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RemovalIndex {
    tables: BTreeMap<String, BTreeMap<String, BTreeSet<ObjectKind>>>,
}

impl RemovalIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, table: String, name: String, kind: ObjectKind) {
        self.tables.entry(table).or_default().entry(name).or_default().insert(kind);
    }

    /// Whether `name` is flagged for removal in `table`, whatever its kind
    #[must_use]
    pub fn contains(&self, table: &str, name: &str) -> bool {
        self.tables.get(table).is_some_and(|names| names.contains_key(name))
    }

    /// Whether `name` is flagged for removal in `table` as the given kind
    #[must_use]
    pub fn contains_kind(&self, table: &str, name: &str, kind: ObjectKind) -> bool {
        self.tables
            .get(table)
            .and_then(|names| names.get(name))
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    /// Whether any object is flagged in `table`
    #[must_use]
    pub fn has_table(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    /// Table names with at least one flagged object, sorted
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Flagged names in `table`, sorted, with the kinds they were flagged as
    pub fn entries(&self, table: &str) -> impl Iterator<Item = (&str, &BTreeSet<ObjectKind>)> {
        self.tables
            .get(table)
            .into_iter()
            .flat_map(|names| names.iter().map(|(name, kinds)| (name.as_str(), kinds)))
    }

    /// Number of distinct `(table, name)` pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    /// Whether the index has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<T, N> FromIterator<(T, N, ObjectKind)> for RemovalIndex
where
    T: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, N, ObjectKind)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (table, name, kind) in iter {
            index.insert(table.into(), name.into(), kind);
        }
        index
    }
}
