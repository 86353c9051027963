use anyhow::Context;
use bench_summariser::{ReportConfig, run_report};
use std::path::PathBuf;

/// Environment variable overriding the directory that holds the `<env>_log`
/// trees.
const LOG_ROOT_ENV: &str = "BENCH_LOG_ROOT";
/// Directory the CSV and charts are written into.
const OUTPUT_DIR: &str = "benchmark_visualizations";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let root = std::env::var(LOG_ROOT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    let output = run_report(&root, &PathBuf::from(OUTPUT_DIR), &ReportConfig::default())
        .context("Summarise benchmark logs")?;

    log::info!(
        "Report complete: {} plus {} charts",
        output.csv_path.display(),
        output.chart_paths.len()
    );

    Ok(())
}
