use super::read_if_present;
use bench_summary_model::IoStats;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static READ_BW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"read:\s+IOPS=\d+.*?BW=(\d+\.\d+)\s?(?:MiB/s|MB/s)")
        .expect("read bandwidth pattern compiles")
});

static WRITE_BW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"write:\s+IOPS=\d+.*?BW=(\d+\.\d+)\s?(?:MiB/s|MB/s)")
        .expect("write bandwidth pattern compiles")
});

/// Extract read and write bandwidth (MiB/s or MB/s) from a fio log.
///
/// The two sides are independent: an unmatched or malformed side leaves only
/// that side absent. A missing or empty file leaves both absent.
pub fn parse_bandwidth(path: &Path) -> IoStats {
    let Some(content) = read_if_present(path) else {
        return IoStats::default();
    };

    IoStats {
        read_mbps: READ_BW
            .captures(&content)
            .and_then(|captures| captures[1].parse().ok()),
        write_mbps: WRITE_BW
            .captures(&content)
            .and_then(|captures| captures[1].parse().ok()),
    }
}
