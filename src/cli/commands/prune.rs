//! Prune flagged blocks from table documents

use std::path::{Path, PathBuf};

use anyhow::Context;

use deadwood::adapters::{ReportFile, TmdlDirectory, write_removal_log};
use deadwood::config::Config;
use deadwood::core::models::RemovalLog;
use deadwood::core::ports::ReportSource;
use deadwood::core::services::{Matching, PruneOptions, Pruner, ReportPlan};
use deadwood::output::{OutputMode, PruneResult};

/// Arguments of the prune command
#[derive(Debug)]
pub struct PruneArgs {
    /// Usage report path
    pub report: PathBuf,
    /// Table document directory
    pub tables: PathBuf,
    /// Removal log path
    pub log: PathBuf,
    /// Compute without writing
    pub dry_run: bool,
    /// Force kind-aware matching
    pub kind_aware: bool,
    /// Extra protected tables
    pub protect: Vec<String>,
    /// Extra protected prefixes
    pub protect_prefix: Vec<String>,
}

/// Run a full prune: report, index, documents, log
pub fn prune(args: &PruneArgs, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(config, &cwd)?;

    // Input checks happen before any document is touched
    let raw = ReportFile::new(&args.report).load()?;
    let plan = ReportPlan::from_report(&raw, &config.columns)
        .with_context(|| format!("cannot map columns of {}", args.report.display()))?;
    log::info!(
        "mapping detected: Status='{}', Type='{}', Table='{}'",
        plan.mapping.status.header,
        plan.mapping.object_type.header,
        plan.mapping.table.header
    );
    let store = TmdlDirectory::open(&args.tables, &config.documents.extension)?;

    let mut protected = config.protection.clone();
    for table in &args.protect {
        protected.protect(table.as_str());
    }
    for prefix in &args.protect_prefix {
        protected.protect_prefix(prefix.as_str());
    }

    let options = PruneOptions {
        protected,
        matching: if args.kind_aware { Matching::KindAware } else { config.matching() },
        dry_run: args.dry_run,
    };

    let mut removal_log = RemovalLog::new();
    let outcome = Pruner::new(&store, &plan.index, &options).run(&mut removal_log);

    let summary = match outcome {
        Ok(summary) => summary,
        Err(err) if args.dry_run => return Err(err).context("pruning stopped"),
        Err(err) => {
            // Documents rewritten before the failure keep their log entries
            write_removal_log(&args.log, &removal_log)
                .with_context(|| format!("cannot write removal log {}", args.log.display()))?;
            return Err(err).with_context(|| {
                format!(
                    "pruning stopped; documents processed before the failure were already \
                     rewritten and their {} removal(s) are recorded in {}",
                    removal_log.len(),
                    args.log.display()
                )
            });
        },
    };

    let log_file = if args.dry_run {
        None
    } else {
        write_removal_log(&args.log, &removal_log)
            .with_context(|| format!("cannot write removal log {}", args.log.display()))?;
        Some(args.log.display().to_string())
    };

    PruneResult::new(&summary, removal_log.entries(), log_file).render(mode);
    Ok(())
}
