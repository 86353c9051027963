//! Writes the summary CSV and renders the comparison charts.

use crate::chart::{self, BarSeries, ChartSpec};
use anyhow::Context;
use bench_summary_model::{MergedRecord, RunStatus};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// File name of the merged summary table.
pub const SUMMARY_CSV: &str = "benchmark_summary_final.csv";

pub const TIME_CHART: &str = "benchmark_time_comparison.png";
pub const CPU_USER_CHART: &str = "cpu_user_comparison.png";
pub const CPU_SYSTEM_CHART: &str = "cpu_system_comparison.png";
pub const CPU_IDLE_CHART: &str = "cpu_idle_comparison.png";
pub const FIO_CHART: &str = "fio_bandwidth_comparison.png";
pub const SYSBENCH_CHART: &str = "sysbench_cpu_events_comparison.png";
pub const STATUS_CHART: &str = "benchmark_status_comparison.png";

/// Paths produced by one report run.
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub csv_path: PathBuf,
    /// Charts actually rendered; a chart whose metric had no data is absent.
    pub chart_paths: Vec<PathBuf>,
}

/// Write the summary table as CSV and render every chart whose underlying
/// column has at least one value.
pub fn write_report(records: &[MergedRecord], output_dir: &Path) -> anyhow::Result<ReportOutput> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Create output directory {}", output_dir.display()))?;

    let csv_path = output_dir.join(SUMMARY_CSV);
    bench_summary_model::write_summary_csv(records, &csv_path)
        .with_context(|| format!("Write summary CSV {}", csv_path.display()))?;
    log::info!("Wrote summary CSV to {}", csv_path.display());

    let mut output = ReportOutput {
        csv_path,
        chart_paths: Vec::new(),
    };

    let benchmarks: Vec<String> = records.iter().map(|r| r.benchmark.clone()).unique().collect();
    let environments: Vec<String> = records
        .iter()
        .map(|r| r.environment.clone())
        .unique()
        .collect();

    // One grouped chart per per-benchmark metric
    let metric_charts: [(&str, &str, &str, fn(&MergedRecord) -> Option<f64>); 4] = [
        (
            TIME_CHART,
            "Benchmark Time Comparison Across Environments",
            "Time (s)",
            |r| r.time_taken_s,
        ),
        (
            CPU_USER_CHART,
            "CPU User Percentage Comparison",
            "CPU User (%)",
            |r| r.cpu_user_pct,
        ),
        (
            CPU_SYSTEM_CHART,
            "CPU System Percentage Comparison",
            "CPU System (%)",
            |r| r.cpu_system_pct,
        ),
        (
            CPU_IDLE_CHART,
            "CPU Idle Percentage Comparison",
            "CPU Idle (%)",
            |r| r.cpu_idle_pct,
        ),
    ];

    for (file, title, y_desc, metric) in metric_charts {
        let series = environments
            .iter()
            .map(|env| BarSeries {
                name: env.clone(),
                values: benchmarks
                    .iter()
                    .map(|bench| {
                        records
                            .iter()
                            .find(|r| &r.environment == env && &r.benchmark == bench)
                            .and_then(metric)
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        if !has_data(&series) {
            log::warn!("Skipping {file}: no data");
            continue;
        }

        let path = output_dir.join(file);
        chart::grouped_bar_chart(
            &path,
            &ChartSpec {
                title,
                x_desc: "Benchmark",
                y_desc,
                size: (1400, 700),
                rotate_labels: true,
            },
            &benchmarks,
            &series,
        )
        .with_context(|| format!("Render {file}"))?;
        log::info!("Wrote chart {}", path.display());
        output.chart_paths.push(path);
    }

    // I/O bandwidth: the side columns are denormalized, so the first record
    // of each environment carries its values
    let io_categories = vec!["FIO_Read_MBps".to_string(), "FIO_Write_MBps".to_string()];
    let io_series = environments
        .iter()
        .map(|env| {
            let row = records.iter().find(|r| &r.environment == env);
            BarSeries {
                name: env.clone(),
                values: vec![
                    row.and_then(|r| r.fio_read_mbps),
                    row.and_then(|r| r.fio_write_mbps),
                ],
            }
        })
        .collect::<Vec<_>>();

    if has_data(&io_series) {
        let path = output_dir.join(FIO_CHART);
        chart::grouped_bar_chart(
            &path,
            &ChartSpec {
                title: "FIO Read/Write Bandwidth Comparison",
                x_desc: "I/O Type",
                y_desc: "Bandwidth (MB/s)",
                size: (1000, 600),
                rotate_labels: false,
            },
            &io_categories,
            &io_series,
        )
        .with_context(|| format!("Render {FIO_CHART}"))?;
        log::info!("Wrote chart {}", path.display());
        output.chart_paths.push(path);
    } else {
        log::warn!("Skipping {FIO_CHART}: no data");
    }

    // Sysbench CPU events, one bar per environment
    let event_values = environments
        .iter()
        .map(|env| {
            records
                .iter()
                .find(|r| &r.environment == env)
                .and_then(|r| r.sysbench_cpu_events_per_sec)
        })
        .collect::<Vec<_>>();

    if event_values.iter().any(Option::is_some) {
        let path = output_dir.join(SYSBENCH_CHART);
        chart::category_bar_chart(
            &path,
            &ChartSpec {
                title: "Sysbench CPU Events Per Second Comparison",
                x_desc: "Environment",
                y_desc: "Events Per Second",
                size: (800, 600),
                rotate_labels: false,
            },
            &environments,
            &event_values,
        )
        .with_context(|| format!("Render {SYSBENCH_CHART}"))?;
        log::info!("Wrote chart {}", path.display());
        output.chart_paths.push(path);
    } else {
        log::warn!("Skipping {SYSBENCH_CHART}: no data");
    }

    // Status counts per benchmark; a status is never absent, so this chart
    // only disappears when there are no records at all
    let statuses: Vec<RunStatus> = [RunStatus::Success, RunStatus::Failed, RunStatus::NoData]
        .into_iter()
        .filter(|status| records.iter().any(|r| r.status == *status))
        .collect();

    if statuses.is_empty() {
        log::warn!("Skipping {STATUS_CHART}: no records");
    } else {
        let status_series = statuses
            .iter()
            .map(|status| BarSeries {
                name: status.to_string(),
                values: benchmarks
                    .iter()
                    .map(|bench| {
                        Some(
                            records
                                .iter()
                                .filter(|r| &r.benchmark == bench && r.status == *status)
                                .count() as f64,
                        )
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        let path = output_dir.join(STATUS_CHART);
        chart::grouped_bar_chart(
            &path,
            &ChartSpec {
                title: "Benchmark Status Comparison",
                x_desc: "Benchmark",
                y_desc: "Count",
                size: (1400, 700),
                rotate_labels: true,
            },
            &benchmarks,
            &status_series,
        )
        .with_context(|| format!("Render {STATUS_CHART}"))?;
        log::info!("Wrote chart {}", path.display());
        output.chart_paths.push(path);
    }

    Ok(output)
}

fn has_data(series: &[BarSeries]) -> bool {
    series
        .iter()
        .any(|s| s.values.iter().any(Option::is_some))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_summary_model::MergedRecord;

    fn record(environment: &str, benchmark: &str) -> MergedRecord {
        MergedRecord {
            environment: environment.to_string(),
            benchmark: benchmark.to_string(),
            cpu_user_pct: Some(10.0),
            cpu_system_pct: Some(1.0),
            cpu_idle_pct: Some(89.0),
            time_taken_s: Some(2.5),
            status: RunStatus::Success,
            fio_read_mbps: Some(512.34),
            fio_write_mbps: Some(256.10),
            sysbench_cpu_events_per_sec: Some(1034.22),
        }
    }

    #[test]
    fn full_data_renders_every_chart() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            record("qemu", "alpha"),
            record("qemu", "beta"),
            record("native", "alpha"),
            record("native", "beta"),
        ];

        let output = write_report(&records, dir.path()).unwrap();

        assert!(output.csv_path.exists());
        assert_eq!(output.chart_paths.len(), 7);
        for file in [
            TIME_CHART,
            CPU_USER_CHART,
            CPU_SYSTEM_CHART,
            CPU_IDLE_CHART,
            FIO_CHART,
            SYSBENCH_CHART,
            STATUS_CHART,
        ] {
            assert!(dir.path().join(file).exists(), "missing {file}");
        }
    }

    #[test]
    fn charts_without_data_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = record("qemu", "alpha");
        rec.time_taken_s = None;
        rec.fio_read_mbps = None;
        rec.fio_write_mbps = None;

        let output = write_report(&[rec], dir.path()).unwrap();

        assert!(!dir.path().join(TIME_CHART).exists());
        assert!(!dir.path().join(FIO_CHART).exists());
        // CPU, sysbench, and status charts still have data
        assert!(dir.path().join(CPU_USER_CHART).exists());
        assert!(dir.path().join(SYSBENCH_CHART).exists());
        assert!(dir.path().join(STATUS_CHART).exists());
        assert_eq!(output.chart_paths.len(), 5);
    }

    #[test]
    fn empty_record_set_writes_only_the_csv() {
        let dir = tempfile::tempdir().unwrap();
        let output = write_report(&[], dir.path()).unwrap();

        assert!(output.csv_path.exists());
        assert!(output.chart_paths.is_empty());
    }
}
