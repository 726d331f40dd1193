//! Pruning run orchestration
//!
//! Builds the removal index from a raw usage report, then walks every
//! document of a store: protected tables are skipped, untargeted tables are
//! left alone, and everything else goes through the block scanner.

use serde::Serialize;

use super::classifier::build_index;
use super::scanner::{BlockScanner, Matching};
use super::schema::{AliasTable, ColumnMapping, SchemaError, resolve};
use crate::core::models::{ProtectedTables, RemovalIndex, RemovalLog, UsageRow};
use crate::core::ports::{DocumentStore, RawReport};
use crate::error::Result;

/// A usage report resolved into a removal index
#[derive(Debug, Clone, Serialize)]
pub struct ReportPlan {
    /// Which header fills each role
    pub mapping: ColumnMapping,
    /// Number of data rows read
    pub rows_read: usize,
    /// Objects flagged for removal, per table
    pub index: RemovalIndex,
}

impl ReportPlan {
    /// Resolve headers and classify every row
    pub fn from_report(report: &RawReport, aliases: &AliasTable) -> Result<Self, SchemaError> {
        let mapping = resolve(&report.headers, aliases)?;
        log::debug!(
            "column mapping: status='{}', type='{}', table='{}', name='{}'",
            mapping.status.header,
            mapping.object_type.header,
            mapping.table.header,
            mapping.name.header
        );

        let rows: Vec<UsageRow> = report.rows.iter().map(|cells| mapping.row(cells)).collect();
        let index = build_index(&rows);

        Ok(Self {
            mapping,
            rows_read: rows.len(),
            index,
        })
    }
}

/// Options for a pruning run
#[derive(Debug, Clone, Default)]
pub struct PruneOptions {
    /// Tables that must never be modified
    pub protected: ProtectedTables,
    /// How block identifiers are matched
    pub matching: Matching,
    /// Compute removals without writing documents
    pub dry_run: bool,
}

/// What happened to one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    /// Protected table, not read
    Protected,
    /// Nothing flagged for this table, not read
    Untargeted,
    /// Scanned, no line dropped
    ///
    /// `removed` may still be non-zero: a flagged header at depth 0 is
    /// logged but its line is kept.
    Unchanged,
    /// Scanned and rewritten (or would be, in a dry run)
    Rewritten,
}

/// Per-document outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOutcome {
    /// Table name
    pub table: String,
    /// What happened
    pub status: TableStatus,
    /// Flagged block headers logged for this table
    pub removed: usize,
}

/// Summary of a pruning run
#[derive(Debug, Clone, Default, Serialize)]
pub struct PruneSummary {
    /// Whether documents were left untouched on purpose
    pub dry_run: bool,
    /// One outcome per document, in processing order
    pub tables: Vec<TableOutcome>,
}

impl PruneSummary {
    /// Number of documents visited
    #[must_use]
    pub fn documents(&self) -> usize {
        self.tables.len()
    }

    /// Number of documents with the given status
    #[must_use]
    pub fn count(&self, status: TableStatus) -> usize {
        self.tables.iter().filter(|t| t.status == status).count()
    }

    /// Total blocks removed
    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.tables.iter().map(|t| t.removed).sum()
    }
}

/// Runs the block scanner over every document in a store
#[derive(Debug)]
pub struct Pruner<'a, S> {
    store: &'a S,
    index: &'a RemovalIndex,
    options: &'a PruneOptions,
}

impl<'a, S: DocumentStore> Pruner<'a, S> {
    /// Create a pruner
    #[must_use]
    pub const fn new(store: &'a S, index: &'a RemovalIndex, options: &'a PruneOptions) -> Self {
        Self {
            store,
            index,
            options,
        }
    }

    /// Process every document, appending removed blocks to `log`
    ///
    /// The first I/O error stops the run.
    pub fn run(&self, log: &mut RemovalLog) -> Result<PruneSummary> {
        let scanner = BlockScanner::new(self.index, self.options.matching);
        let mut summary = PruneSummary {
            dry_run: self.options.dry_run,
            tables: Vec::new(),
        };

        for doc in self.store.list()? {
            log::debug!("visiting {}", doc.path.display());

            if self.options.protected.is_protected(&doc.table) {
                log::debug!("skipping protected table [{}]", doc.table);
                summary.tables.push(TableOutcome {
                    table: doc.table,
                    status: TableStatus::Protected,
                    removed: 0,
                });
                continue;
            }

            if !self.index.has_table(&doc.table) {
                summary.tables.push(TableOutcome {
                    table: doc.table,
                    status: TableStatus::Untargeted,
                    removed: 0,
                });
                continue;
            }

            let original = self.store.read(&doc)?;
            let pruned = scanner.prune(&doc.table, &original, log);

            let status = if pruned.is_changed() {
                if !self.options.dry_run {
                    self.store.write(&doc, &pruned.content)?;
                }
                log::info!("table [{}] cleaned ({} block(s))", doc.table, pruned.removed_blocks);
                TableStatus::Rewritten
            } else {
                TableStatus::Unchanged
            };

            summary.tables.push(TableOutcome {
                table: doc.table,
                status,
                removed: pruned.removed_blocks,
            });
        }

        Ok(summary)
    }
}
