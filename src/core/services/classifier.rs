//! Removal classifier - turns usage rows into removal decisions
//!
//! Measures are removed when unused or only used by unused objects.
//! Columns are only removed when plainly unused: a column "used by unused"
//! may still back a relationship or a sort-by that the report does not see.

use crate::core::models::{ObjectKind, RemovalIndex, UsageRow};

/// Statuses that make a measure removable (compared case-insensitively)
const MEASURE_STATUSES: &[&str] = &["unused", "used by unused"];

/// Status that makes a column removable (compared case-insensitively)
const COLUMN_STATUS: &str = "unused";

/// Kinds under which a row is removable
///
/// Empty when the row is kept. A row whose type mentions both "measure" and
/// "column" is checked against both rules.
#[must_use]
pub fn classify(row: &UsageRow) -> Vec<ObjectKind> {
    let status = row.status.trim().to_lowercase();
    let object_type = row.object_type.trim().to_lowercase();

    let mut kinds = Vec::new();
    if object_type.contains("measure") && MEASURE_STATUSES.contains(&status.as_str()) {
        kinds.push(ObjectKind::Measure);
    }
    if object_type.contains("column") && status == COLUMN_STATUS {
        kinds.push(ObjectKind::Column);
    }
    kinds
}

/// Build the removal index from every removable row
///
/// Rows without a table or name are skipped.
pub fn build_index<'a>(rows: impl IntoIterator<Item = &'a UsageRow>) -> RemovalIndex {
    rows.into_iter()
        .filter(|row| row.is_addressable())
        .flat_map(|row| {
            classify(row)
                .into_iter()
                .map(move |kind| (row.table.as_str(), row.name.as_str(), kind))
        })
        .collect()
}
