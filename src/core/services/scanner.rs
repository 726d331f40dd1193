//! Block scanner/remover for TMDL table documents
//!
//! Streams a document line by line through a two-state machine. Lines are
//! kept while passing through and dropped while skipping a flagged block.
//!
//! - A line whose trimmed content starts with a block keyword re-decides the
//!   state from the removal index, even in the middle of a skipped block.
//! - While skipping, a line with no leading tab and non-blank content ends
//!   the skip before the keep/drop decision for that line.
//!
//! Blank lines never end a skip, so trailing blank lines of a removed block
//! go with it. Kept lines are emitted unchanged, line terminators included.

use crate::core::models::{BlockStart, RemovalIndex, RemovalLog};

/// How block identifiers are matched against the removal index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Matching {
    /// Match on `(table, name)` only, for every block keyword
    #[default]
    KindBlind,
    /// `measure` blocks match measure entries and `column` blocks match
    /// column entries; other blocks never match
    KindAware,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Passthrough,
    Skipping,
}

/// Result of scanning one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedDocument {
    /// Rewritten document text
    pub content: String,
    /// Number of flagged block headers seen (one log entry each)
    pub removed_blocks: usize,
    /// Number of lines dropped
    pub removed_lines: usize,
}

impl PrunedDocument {
    /// Whether any line was dropped
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        self.removed_lines > 0
    }
}

/// Number of leading tab characters
#[must_use]
pub fn indentation_depth(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'\t').count()
}

/// Scans documents against a removal index
#[derive(Debug, Clone, Copy)]
pub struct BlockScanner<'a> {
    index: &'a RemovalIndex,
    matching: Matching,
}

impl<'a> BlockScanner<'a> {
    /// Create a scanner over an index
    #[must_use]
    pub const fn new(index: &'a RemovalIndex, matching: Matching) -> Self {
        Self { index, matching }
    }

    fn is_flagged(&self, table: &str, block: &BlockStart) -> bool {
        match self.matching {
            Matching::KindBlind => self.index.contains(table, &block.name),
            Matching::KindAware => block
                .keyword
                .object_kind()
                .is_some_and(|kind| self.index.contains_kind(table, &block.name, kind)),
        }
    }

    /// Rewrite `text`, dropping every flagged block of `table`
    ///
    /// Appends one entry to `log` per removed block, top to bottom.
    pub fn prune(&self, table: &str, text: &str, log: &mut RemovalLog) -> PrunedDocument {
        let mut content = String::with_capacity(text.len());
        let mut state = ScanState::Passthrough;
        let mut removed_blocks = 0;
        let mut removed_lines = 0;

        for line in text.split_inclusive('\n') {
            let depth = indentation_depth(line);
            let trimmed = line.trim();

            if let Some(block) = BlockStart::parse(trimmed) {
                if self.is_flagged(table, &block) {
                    log::debug!("removing {} [{table}] -> {}", block.keyword, block.name);
                    log.record(table, block.name);
                    removed_blocks += 1;
                    state = ScanState::Skipping;
                } else {
                    state = ScanState::Passthrough;
                }
            }

            if state == ScanState::Skipping && depth == 0 && !trimmed.is_empty() {
                state = ScanState::Passthrough;
            }

            match state {
                ScanState::Passthrough => content.push_str(line),
                ScanState::Skipping => removed_lines += 1,
            }
        }

        PrunedDocument {
            content,
            removed_blocks,
            removed_lines,
        }
    }
}
