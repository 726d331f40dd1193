//! Preview what a usage report flags for removal

use std::path::Path;

use anyhow::Context;

use deadwood::adapters::ReportFile;
use deadwood::config::Config;
use deadwood::core::ports::ReportSource;
use deadwood::core::services::ReportPlan;
use deadwood::output::{OutputMode, PlanResult};

/// Load the report and print the resolved mapping and removal index
pub fn plan(report: &Path, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(config, &cwd)?;

    let raw = ReportFile::new(report).load()?;
    let plan = ReportPlan::from_report(&raw, &config.columns)
        .with_context(|| format!("cannot map columns of {}", report.display()))?;

    let result = PlanResult {
        flagged: plan.index.len(),
        mapping: plan.mapping,
        rows_read: plan.rows_read,
        index: plan.index,
    };
    result.render(mode);
    Ok(())
}
