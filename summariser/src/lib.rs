//! Cross-environment benchmark log summariser.
//!
//! Reads the benchmark logs captured in each execution environment, merges
//! them into one denormalized table, and writes a CSV summary plus a fixed
//! set of comparison charts.

use anyhow::Context;
use std::path::Path;

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod extract;
pub mod merge;
pub mod report;

pub use config::ReportConfig;
pub use report::ReportOutput;

/// Run the full pipeline: collect records under `root`, join the
/// per-environment side tables, and write the CSV and charts into
/// `output_dir`.
pub fn run_report(
    root: &Path,
    output_dir: &Path,
    config: &ReportConfig,
) -> anyhow::Result<ReportOutput> {
    let collected = aggregate::collect_records(root, config);
    log::info!(
        "Collected {} records across {} environments",
        collected.records.len(),
        config.environments.len()
    );

    let merged = merge::merge_records(&collected).context("Join side tables")?;

    report::write_report(&merged, output_dir).context("Write report")
}
