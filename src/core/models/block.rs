//! Block-start recognition for TMDL table documents
//!
//! A block starts on any line whose trimmed content begins with one of the
//! object keywords followed by a space. The indentation of the line is not
//! considered: `measure` and `column` lines are nested one tab deep inside
//! the `table` block in real documents.

use super::ObjectKind;

/// Keywords that open a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKeyword {
    /// `column <name> [= expr]`
    Column,
    /// `measure <name> = expr`
    Measure,
    /// `partition <name> = m`
    Partition,
    /// `table <name>`
    Table,
    /// `hierarchy <name>`
    Hierarchy,
}

impl BlockKeyword {
    /// All keywords, in match order
    pub const ALL: [Self; 5] =
        [Self::Column, Self::Measure, Self::Partition, Self::Table, Self::Hierarchy];

    /// The keyword as it appears in a document
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Measure => "measure",
            Self::Partition => "partition",
            Self::Table => "table",
            Self::Hierarchy => "hierarchy",
        }
    }

    /// The object kind a usage report would flag this block as, if any
    #[must_use]
    pub const fn object_kind(self) -> Option<ObjectKind> {
        match self {
            Self::Column => Some(ObjectKind::Column),
            Self::Measure => Some(ObjectKind::Measure),
            Self::Partition | Self::Table | Self::Hierarchy => None,
        }
    }
}

impl std::fmt::Display for BlockKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognised block-start line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStart {
    /// Keyword that opened the block
    pub keyword: BlockKeyword,
    /// Identifier, unquoted
    pub name: String,
}

impl BlockStart {
    /// Recognise a block start from a line's trimmed content
    ///
    /// The identifier is the text after the keyword, cut at the first `=`,
    /// trimmed, with every single quote removed.
    #[must_use]
    pub fn parse(trimmed: &str) -> Option<Self> {
        let keyword = BlockKeyword::ALL.into_iter().find(|kw| {
            trimmed.strip_prefix(kw.as_str()).is_some_and(|rest| rest.starts_with(' '))
        })?;

        let rest = &trimmed[keyword.as_str().len() + 1..];
        let raw = rest.split('=').next().unwrap_or_default().trim();
        let name = raw.replace('\'', "");

        Some(Self { keyword, name })
    }
}
