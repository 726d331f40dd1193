//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing deadwood components.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Table document from the canonical pruning scenario
pub const SALES_TMDL: &str = "table Sales\n\
\tmeasure OldMeasure = SUM('Sales'[Amount])\n\
\t\tformatString: \"0\"\n\
\n\
\tcolumn DeadColumn = 'Sales'[Unused]\n\
\t\tdataType: string\n\
\n\
\tcolumn KeptColumn = 'Sales'[Kept]\n\
\t\tdataType: string\n";

/// `SALES_TMDL` with `OldMeasure` and `DeadColumn` removed
pub const SALES_PRUNED: &str = "table Sales\n\
\tcolumn KeptColumn = 'Sales'[Kept]\n\
\t\tdataType: string\n";

/// A report flagging `OldMeasure` and `DeadColumn` in `Sales`
pub const SALES_REPORT: &str = "Table,Name,Type,Status\n\
Sales,OldMeasure,Measure,Unused\n\
Sales,DeadColumn,Calculated Column,Unused\n\
Sales,KeptColumn,Calculated Column,Used by unused\n";

/// A temporary semantic model with a `tables/` directory
pub struct TestModel {
    dir: TempDir,
}

impl TestModel {
    /// Create an empty model:
    /// ```text
    /// /
    /// └── tables/
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("tables")).unwrap();
        Self { dir }
    }

    /// Root of the temporary directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The table document directory
    pub fn tables_dir(&self) -> PathBuf {
        self.dir.path().join("tables")
    }

    /// Add a table document
    pub fn add_table(&self, table: &str, content: &str) {
        fs::write(self.tables_dir().join(format!("{table}.tmdl")), content).unwrap();
    }

    /// Read a table document back
    pub fn read_table(&self, table: &str) -> String {
        fs::read_to_string(self.tables_dir().join(format!("{table}.tmdl"))).unwrap()
    }

    /// Write a CSV usage report and return its path
    pub fn write_report(&self, csv: &str) -> PathBuf {
        let path = self.dir.path().join("usage.csv");
        fs::write(&path, csv).unwrap();
        path
    }
}

impl Default for TestModel {
    fn default() -> Self {
        Self::new()
    }
}
