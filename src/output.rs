//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{RemovalIndex, RemovalLogEntry};
use crate::core::services::{ColumnMapping, PruneSummary, TableOutcome, TableStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a prune run
#[derive(Debug, Serialize)]
pub struct PruneResult {
    /// Whether documents were left untouched on purpose
    pub dry_run: bool,
    /// Number of documents visited
    pub documents: usize,
    /// Documents skipped as protected
    pub protected: usize,
    /// Documents rewritten (or that would be, in a dry run)
    pub rewritten: usize,
    /// Total blocks removed
    pub total_removed: usize,
    /// Per-document outcomes
    pub tables: Vec<TableOutcome>,
    /// Removed blocks, in removal order
    pub removed: Vec<RemovalLogEntry>,
    /// Where the removal log was written
    pub log_file: Option<String>,
}

impl PruneResult {
    /// Combine a run summary with its removal log entries
    #[must_use]
    pub fn new(summary: &PruneSummary, removed: &[RemovalLogEntry], log_file: Option<String>) -> Self {
        Self {
            dry_run: summary.dry_run,
            documents: summary.documents(),
            protected: summary.count(TableStatus::Protected),
            rewritten: summary.count(TableStatus::Rewritten),
            total_removed: removed.len(),
            tables: summary.tables.clone(),
            removed: removed.to_vec(),
            log_file,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.documents == 0 {
            println!("No table documents found.");
            return;
        }

        for table in &self.tables {
            match table.status {
                TableStatus::Rewritten if self.dry_run => {
                    println!("{} [{}] ({} block(s))", "Would clean".yellow(), table.table, table.removed);
                },
                TableStatus::Rewritten => {
                    println!("{} [{}] ({} block(s))", "Cleaned".green(), table.table, table.removed);
                },
                TableStatus::Protected => {
                    println!("{} [{}]", "Protected".cyan(), table.table);
                },
                TableStatus::Unchanged if table.removed > 0 => {
                    println!(
                        "{} [{}] ({} flagged header(s) at top level left in place)",
                        "Unchanged".yellow(),
                        table.table,
                        table.removed
                    );
                },
                TableStatus::Unchanged | TableStatus::Untargeted => {},
            }
        }

        if !self.removed.is_empty() {
            println!();
            for entry in &self.removed {
                println!("  {entry}");
            }
        }

        println!();
        if self.dry_run {
            println!("Dry run: {} item(s) would be removed. No files written.", self.total_removed);
        } else {
            println!("Cleanup finished! {} item(s) removed.", self.total_removed);
        }
        if let Some(log_file) = &self.log_file {
            println!("See '{log_file}' for details.");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a plan operation
#[derive(Debug, Serialize)]
pub struct PlanResult {
    /// Which header fills each role
    pub mapping: ColumnMapping,
    /// Number of data rows read
    pub rows_read: usize,
    /// Number of `(table, name)` pairs flagged
    pub flagged: usize,
    /// Flagged objects per table
    pub index: RemovalIndex,
}

impl PlanResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "Column mapping: Status='{}', Type='{}', Table='{}', Name='{}'",
            self.mapping.status.header,
            self.mapping.object_type.header,
            self.mapping.table.header,
            self.mapping.name.header
        );
        println!("{} row(s) read, {} object(s) flagged.\n", self.rows_read, self.flagged);

        if self.index.is_empty() {
            println!("Nothing to remove.");
            return;
        }

        for table in self.index.tables() {
            println!("[{}]", table.bold());
            for (name, kinds) in self.index.entries(table) {
                let kinds: Vec<String> = kinds.iter().map(ToString::to_string).collect();
                println!("  {name} ({})", kinds.join(", "));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
