//! Folder of TMDL table documents
//!
//! Implements `DocumentStore` over a `definition/tables` style directory:
//! one file per table, named `<table>.tmdl`. Files are listed in file-name
//! order. Rewrites go to a temporary file in the same directory which is
//! then renamed over the original. Symlinked documents are followed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::core::ports::{DocumentRef, DocumentStore};
use crate::error::{DeadwoodError, Result};

/// Default table document extension
pub const DEFAULT_EXTENSION: &str = "tmdl";

/// Directory of table documents
#[derive(Debug, Clone)]
pub struct TmdlDirectory {
    root: PathBuf,
    extension: String,
}

impl TmdlDirectory {
    /// Open a document directory
    ///
    /// Fails with `DocumentDirMissing` when `root` is not a directory.
    pub fn open(root: impl AsRef<Path>, extension: &str) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(DeadwoodError::DocumentDirMissing(root));
        }
        Ok(Self {
            root,
            extension: extension.trim_start_matches('.').to_string(),
        })
    }

    fn table_name(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?;
        if !ext.eq_ignore_ascii_case(&self.extension) {
            return None;
        }
        path.file_stem()?.to_str().map(ToString::to_string)
    }
}

impl DocumentStore for TmdlDirectory {
    fn list(&self) -> Result<Vec<DocumentRef>> {
        let mut docs = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            match self.table_name(&path) {
                Some(table) => docs.push(DocumentRef { table, path }),
                None => log::debug!("ignoring {}", path.display()),
            }
        }
        Ok(docs)
    }

    fn read(&self, doc: &DocumentRef) -> Result<String> {
        fs::read_to_string(&doc.path).map_err(|e| DeadwoodError::document_io(&doc.path, e))
    }

    fn write(&self, doc: &DocumentRef, content: &str) -> Result<()> {
        let io_err = |e: std::io::Error| DeadwoodError::document_io(&doc.path, e);
        // A symlinked document is rewritten at its target, the link stays
        let target = fs::canonicalize(&doc.path).unwrap_or_else(|_| doc.path.clone());
        let dir = target.parent().unwrap_or(&self.root);

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file().set_permissions(meta.permissions()).map_err(io_err)?;
        }
        tmp.persist(&target).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}
