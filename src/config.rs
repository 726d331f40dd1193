//! Run configuration
//!
//! Optional `deadwood.toml` in the working directory (or a file passed with
//! `--config`). Every section is optional and falls back to built-in
//! defaults:
//!
//! ```toml
//! [protection]
//! tables = ["d_calendario"]
//! prefixes = ["LocalDateTable_", "DateTableTemplate_"]
//!
//! [columns]
//! status = ["is_used", "Status", "is used", "status"]
//! object_type = ["type", "Type", "object_type", "Category"]
//! table = ["table", "Table", "table_name", "Table Name"]
//! name = ["name", "Name", "object_name"]
//!
//! [documents]
//! extension = "tmdl"
//!
//! [matching]
//! kind_aware = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapters::tmdl::DEFAULT_EXTENSION;
use crate::core::models::ProtectedTables;
use crate::core::services::{AliasTable, Matching};
use crate::error::{DeadwoodError, Result};

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "deadwood.toml";

/// Full run configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tables that must never be modified
    #[serde(default)]
    pub protection: ProtectedTables,
    /// Report header aliases
    #[serde(default)]
    pub columns: AliasTable,
    /// Document discovery
    #[serde(default)]
    pub documents: DocumentsConfig,
    /// Block matching
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Document discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Extension of table documents
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

/// Block matching settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Match blocks on `(table, kind, name)` instead of `(table, name)`
    #[serde(default)]
    pub kind_aware: bool,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DeadwoodError::Config(e.to_string()))
    }

    /// Load a configuration file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DeadwoodError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Without one, `deadwood.toml` in `cwd` is
    /// used when present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let local = cwd.join(CONFIG_FILE);
        if local.is_file() {
            log::debug!("using {}", local.display());
            Self::from_path(&local)
        } else {
            Ok(Self::default())
        }
    }

    /// Matching mode selected by this configuration
    #[must_use]
    pub const fn matching(&self) -> Matching {
        if self.matching.kind_aware { Matching::KindAware } else { Matching::KindBlind }
    }
}
