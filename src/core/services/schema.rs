//! Schema mapper - resolves report headers to column roles
//!
//! Usage report exports rename their columns between versions and export
//! types. Each role has an ordered list of accepted header aliases and the
//! first alias present in the headers wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::UsageRow;

/// A semantic column of the usage report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Usage status ("Unused", "Used by unused", ...)
    Status,
    /// Object type ("Measure", "Calculated Column", ...)
    ObjectType,
    /// Owning table
    Table,
    /// Object name
    Name,
}

impl ColumnRole {
    /// All roles, in resolution order
    pub const ALL: [Self; 4] = [Self::Status, Self::ObjectType, Self::Table, Self::Name];
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::ObjectType => write!(f, "object_type"),
            Self::Table => write!(f, "table"),
            Self::Name => write!(f, "name"),
        }
    }
}

/// Header resolution failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// At least one role matched none of its aliases
    #[error("required report column(s) not found: {}; headers present: {headers:?}", join_roles(.missing))]
    Unresolved {
        /// Roles that could not be resolved
        missing: Vec<ColumnRole>,
        /// Headers actually present in the report
        headers: Vec<String>,
    },
}

fn join_roles(roles: &[ColumnRole]) -> String {
    roles.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Ordered header aliases per role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasTable {
    /// Aliases for the status column
    pub status: Vec<String>,
    /// Aliases for the object type column
    pub object_type: Vec<String>,
    /// Aliases for the table column
    pub table: Vec<String>,
    /// Aliases for the object name column
    pub name: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl Default for AliasTable {
    fn default() -> Self {
        Self {
            status: strings(&["is_used", "Status", "is used", "status"]),
            object_type: strings(&["type", "Type", "object_type", "Category"]),
            table: strings(&["table", "Table", "table_name", "Table Name"]),
            name: strings(&["name", "Name", "object_name"]),
        }
    }
}

impl AliasTable {
    /// Aliases for a role
    #[must_use]
    pub fn aliases(&self, role: ColumnRole) -> &[String] {
        match role {
            ColumnRole::Status => &self.status,
            ColumnRole::ObjectType => &self.object_type,
            ColumnRole::Table => &self.table,
            ColumnRole::Name => &self.name,
        }
    }
}

/// A resolved header: its name and position in the row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    /// Header text that matched
    pub header: String,
    /// Zero-based column position
    pub index: usize,
}

/// Column positions for every role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    /// Status column
    pub status: ResolvedColumn,
    /// Object type column
    pub object_type: ResolvedColumn,
    /// Table column
    pub table: ResolvedColumn,
    /// Object name column
    pub name: ResolvedColumn,
}

impl ColumnMapping {
    /// Build a usage row from a record's cells
    ///
    /// Cells past the end of a short record read as empty.
    #[must_use]
    pub fn row(&self, cells: &[String]) -> UsageRow {
        let cell = |col: &ResolvedColumn| cells.get(col.index).map_or("", String::as_str);
        UsageRow::new(
            cell(&self.status),
            cell(&self.object_type),
            cell(&self.table),
            cell(&self.name),
        )
    }
}

/// Resolve every role against the report headers
///
/// Headers are compared exactly. For each role the first alias (in alias
/// order) that is present wins. All unresolved roles are reported together.
pub fn resolve(headers: &[String], aliases: &AliasTable) -> Result<ColumnMapping, SchemaError> {
    let find = |role: ColumnRole| {
        aliases.aliases(role).iter().find_map(|alias| {
            headers.iter().position(|h| h == alias).map(|index| ResolvedColumn {
                header: alias.clone(),
                index,
            })
        })
    };

    match (
        find(ColumnRole::Status),
        find(ColumnRole::ObjectType),
        find(ColumnRole::Table),
        find(ColumnRole::Name),
    ) {
        (Some(status), Some(object_type), Some(table), Some(name)) => Ok(ColumnMapping {
            status,
            object_type,
            table,
            name,
        }),
        (status, object_type, table, name) => {
            let found = [status.is_some(), object_type.is_some(), table.is_some(), name.is_some()];
            let missing = ColumnRole::ALL
                .into_iter()
                .zip(found)
                .filter_map(|(role, ok)| (!ok).then_some(role))
                .collect();
            Err(SchemaError::Unresolved {
                missing,
                headers: headers.to_vec(),
            })
        },
    }
}
