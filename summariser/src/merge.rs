//! Joins the per-environment side tables onto the benchmark records.

use crate::aggregate::CollectedData;
use bench_summary_model::MergedRecord;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// The environment name is the join key; a side table may only carry one
    /// row per environment.
    #[error("duplicate environment in side table: {name}")]
    DuplicateEnvironment { name: String },
}

/// Clamp a percentage into [0, 100]; absent values pass through unchanged.
pub fn clamp_pct(value: Option<f64>) -> Option<f64> {
    value.map(|v| v.clamp(0.0, 100.0))
}

fn side_table<T: Copy>(entries: &[(String, T)]) -> Result<BTreeMap<&str, T>, MergeError> {
    let mut table = BTreeMap::new();
    for (name, stats) in entries {
        if table.insert(name.as_str(), *stats).is_some() {
            return Err(MergeError::DuplicateEnvironment { name: name.clone() });
        }
    }
    Ok(table)
}

/// Left-join the side tables onto the records by environment name and clamp
/// the percentage columns.
///
/// The join is many-to-one: every record for an environment carries that
/// environment's single side-table row, and the output has exactly one row
/// per input record. A record whose environment is missing from a side table
/// keeps absent side fields.
pub fn merge_records(data: &CollectedData) -> Result<Vec<MergedRecord>, MergeError> {
    let io_table = side_table(&data.io_by_env)?;
    let cpu_events_table = side_table(&data.cpu_events_by_env)?;

    Ok(data
        .records
        .iter()
        .map(|record| {
            let io = io_table
                .get(record.environment.as_str())
                .copied()
                .unwrap_or_default();
            let cpu_events = cpu_events_table
                .get(record.environment.as_str())
                .copied()
                .unwrap_or_default();

            MergedRecord {
                environment: record.environment.clone(),
                benchmark: record.benchmark.clone(),
                cpu_user_pct: clamp_pct(record.cpu_user_pct),
                cpu_system_pct: clamp_pct(record.cpu_system_pct),
                cpu_idle_pct: clamp_pct(record.cpu_idle_pct),
                time_taken_s: record.time_taken_s,
                status: record.status,
                fio_read_mbps: io.read_mbps,
                fio_write_mbps: io.write_mbps,
                sysbench_cpu_events_per_sec: cpu_events.events_per_sec,
            }
        })
        .collect())
}
