//! Walks the environment × benchmark log tree and collects raw records.

use crate::config::{ReportConfig, environment_name};
use crate::extract;
use bench_summary_model::{CpuEventStats, IoStats, LogRecord};
use std::path::Path;

/// Per-environment I/O benchmark log.
const FIO_LOG: &str = "fio.log";
/// Per-environment synthetic CPU benchmark log.
const SYSBENCH_CPU_LOG: &str = "sysbench_cpu.log";
/// Per-benchmark system activity log.
const SAR_LOG: &str = "sar.log";
/// Per-benchmark timing log.
const TIME_LOG: &str = "time.log";

/// Everything collected in one pass over the log tree.
///
/// The side tables are kept in configuration order as (environment, stats)
/// pairs; turning them into keyed lookup tables is the merge step's job, so
/// a duplicated environment name is rejected there instead of silently
/// overwriting an entry.
#[derive(Debug, Clone, Default)]
pub struct CollectedData {
    pub records: Vec<LogRecord>,
    pub io_by_env: Vec<(String, IoStats)>,
    pub cpu_events_by_env: Vec<(String, CpuEventStats)>,
}

/// Collect one [`LogRecord`] per (environment, benchmark) pair plus the
/// per-environment side tables, in configuration order.
///
/// `root` is the directory containing the `<env>_log` directories. Missing
/// directories and logs produce records with absent fields rather than
/// errors, so the pass always completes.
pub fn collect_records(root: &Path, config: &ReportConfig) -> CollectedData {
    let mut data = CollectedData::default();

    for env_dir in &config.environments {
        let env_name = environment_name(env_dir).to_string();
        let env_root = root.join(env_dir);

        let io = extract::parse_bandwidth(&env_root.join(FIO_LOG));
        log::debug!(
            "{env_name}: fio read={:?} write={:?}",
            io.read_mbps,
            io.write_mbps
        );
        data.io_by_env.push((env_name.clone(), io));

        let events_per_sec = extract::parse_events_per_sec(&env_root.join(SYSBENCH_CPU_LOG));
        log::debug!("{env_name}: sysbench events/s={events_per_sec:?}");
        data.cpu_events_by_env
            .push((env_name.clone(), CpuEventStats { events_per_sec }));

        for benchmark in &config.benchmarks {
            let bench_dir = env_root.join(benchmark);
            let cpu = extract::parse_cpu_averages(&bench_dir.join(SAR_LOG));
            let timing = extract::parse_timing(&bench_dir.join(TIME_LOG));
            log::debug!("{env_name}/{benchmark}: cpu={cpu:?} timing={timing:?}");

            data.records.push(LogRecord {
                environment: env_name.clone(),
                benchmark: benchmark.clone(),
                cpu_user_pct: cpu.map(|c| c.user_pct),
                cpu_system_pct: cpu.map(|c| c.system_pct),
                cpu_idle_pct: cpu.map(|c| c.idle_pct),
                time_taken_s: timing.time_taken_s,
                status: timing.status,
            });
        }
    }

    data
}
