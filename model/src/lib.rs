use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Outcome of a single benchmark run, derived from its timing log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// The timing log exists and contains no crash marker.
    Success,
    /// The timing log contains a crash marker.
    Failed,
    /// The timing log is missing or empty.
    #[serde(rename = "No Data")]
    NoData,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Success => write!(f, "Success"),
            RunStatus::Failed => write!(f, "Failed"),
            RunStatus::NoData => write!(f, "No Data"),
        }
    }
}

/// One row per (environment, benchmark) pair, before the per-environment
/// side tables are joined on.
///
/// Percentage fields are raw extractor output here; clamping to [0, 100]
/// happens during the merge. Absent values mean the source log was missing,
/// empty, or did not contain the expected pattern. They are never defaulted
/// to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub environment: String,
    pub benchmark: String,
    pub cpu_user_pct: Option<f64>,
    pub cpu_system_pct: Option<f64>,
    pub cpu_idle_pct: Option<f64>,
    pub time_taken_s: Option<f64>,
    pub status: RunStatus,
}

/// Disk throughput measured once per environment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IoStats {
    pub read_mbps: Option<f64>,
    pub write_mbps: Option<f64>,
}

/// Synthetic CPU throughput measured once per environment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuEventStats {
    pub events_per_sec: Option<f64>,
}

/// One row of the final summary table.
///
/// This is a [`LogRecord`] with the owning environment's [`IoStats`] and
/// [`CpuEventStats`] denormalized onto it. The serde field names are the CSV
/// column headers, in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    #[serde(rename = "Environment")]
    pub environment: String,
    #[serde(rename = "Benchmark")]
    pub benchmark: String,
    #[serde(rename = "CPU_User%")]
    pub cpu_user_pct: Option<f64>,
    #[serde(rename = "CPU_System%")]
    pub cpu_system_pct: Option<f64>,
    #[serde(rename = "CPU_Idle%")]
    pub cpu_idle_pct: Option<f64>,
    #[serde(rename = "Time_Taken_s")]
    pub time_taken_s: Option<f64>,
    #[serde(rename = "Status")]
    pub status: RunStatus,
    #[serde(rename = "FIO_Read_MBps")]
    pub fio_read_mbps: Option<f64>,
    #[serde(rename = "FIO_Write_MBps")]
    pub fio_write_mbps: Option<f64>,
    #[serde(rename = "Sysbench_CPU_Events_Per_Sec")]
    pub sysbench_cpu_events_per_sec: Option<f64>,
}

/// Serialize the summary table to a writer as CSV, header row included.
///
/// Absent values are written as empty fields.
pub fn store_summary<W: Write>(records: &[MergedRecord], writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the summary table to a CSV file, replacing any existing file.
pub fn write_summary_csv(records: &[MergedRecord], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    store_summary(records, file)
}

/// Load a summary table previously written by [`write_summary_csv`].
///
/// Empty fields deserialize back to absent values.
pub fn load_summary_csv(path: impl AsRef<Path>) -> anyhow::Result<Vec<MergedRecord>> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_record() -> MergedRecord {
        MergedRecord {
            environment: "qemu".to_string(),
            benchmark: "prime_numbers".to_string(),
            cpu_user_pct: Some(10.07),
            cpu_system_pct: Some(0.10),
            cpu_idle_pct: Some(89.84),
            time_taken_s: Some(12.5),
            status: RunStatus::Success,
            fio_read_mbps: Some(512.34),
            fio_write_mbps: None,
            sysbench_cpu_events_per_sec: Some(1034.22),
        }
    }

    #[test]
    fn csv_header_and_status_spelling() {
        let mut out = Vec::new();
        store_summary(&[sample_record()], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Environment,Benchmark,CPU_User%,CPU_System%,CPU_Idle%,Time_Taken_s,Status,FIO_Read_MBps,FIO_Write_MBps,Sysbench_CPU_Events_Per_Sec"
        );
        let row = lines.next().unwrap();
        assert!(row.contains(",Success,"));
        // Absent write bandwidth stays an empty field, not a zero
        assert!(row.contains(",512.34,,"));
    }

    #[test]
    fn no_data_status_has_a_space() {
        let mut record = sample_record();
        record.status = RunStatus::NoData;
        record.time_taken_s = None;

        let mut out = Vec::new();
        store_summary(&[record], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(",No Data,"));
    }

    #[test]
    fn summary_round_trips_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");

        let records = vec![
            sample_record(),
            MergedRecord {
                environment: "native".to_string(),
                benchmark: "array_sorting".to_string(),
                cpu_user_pct: None,
                cpu_system_pct: None,
                cpu_idle_pct: None,
                time_taken_s: None,
                status: RunStatus::NoData,
                fio_read_mbps: None,
                fio_write_mbps: None,
                sysbench_cpu_events_per_sec: None,
            },
        ];

        write_summary_csv(&records, &path).unwrap();
        let loaded = load_summary_csv(&path).unwrap();
        assert_eq!(records, loaded);
    }
}
