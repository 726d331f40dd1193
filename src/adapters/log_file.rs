//! Removal log persistence

use std::fs;
use std::path::Path;

use crate::core::models::RemovalLog;

/// Default removal log file name
pub const DEFAULT_LOG_FILE: &str = "removal_log.txt";

/// Write the removal log, replacing any previous log at `path`
pub fn write_removal_log(path: &Path, log: &RemovalLog) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, log.render())
}
