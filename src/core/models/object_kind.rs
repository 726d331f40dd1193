//! Object kinds tracked by the removal index

use serde::Serialize;

/// Kind of analytical object a usage row refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// A DAX measure
    Measure,
    /// A (calculated or data) column
    Column,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Measure => write!(f, "measure"),
            Self::Column => write!(f, "column"),
        }
    }
}
