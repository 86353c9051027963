use super::read_if_present;
use bench_summary_model::RunStatus;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static TOOK_SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"took\s+([\d\.]+)\s+seconds").expect("elapsed-time pattern compiles")
});

/// Markers that mark a run as failed regardless of any reported time.
const CRASH_MARKERS: [&str; 2] = ["Segmentation fault", "core dumped"];

/// Elapsed time and run status derived from one timing log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingOutcome {
    pub time_taken_s: Option<f64>,
    pub status: RunStatus,
}

/// Extract elapsed seconds and a pass/fail status from a timing log.
///
/// A missing or empty file yields [`RunStatus::NoData`]. A file containing a
/// crash marker yields [`RunStatus::Failed`]; any other non-empty file is
/// [`RunStatus::Success`]. Elapsed time comes from the first
/// `took <seconds> seconds` occurrence and is extracted independently of the
/// status.
pub fn parse_timing(path: &Path) -> TimingOutcome {
    let Some(content) = read_if_present(path) else {
        return TimingOutcome {
            time_taken_s: None,
            status: RunStatus::NoData,
        };
    };

    let time_taken_s = TOOK_SECONDS
        .captures(&content)
        .and_then(|captures| captures[1].parse::<f64>().ok());

    let status = if CRASH_MARKERS.iter().any(|marker| content.contains(marker)) {
        RunStatus::Failed
    } else {
        RunStatus::Success
    };

    TimingOutcome {
        time_taken_s,
        status,
    }
}
