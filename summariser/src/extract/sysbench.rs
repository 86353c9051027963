use super::read_if_present;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static EVENTS_PER_SEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"events per second:\s+([\d\.]+)").expect("events-per-second pattern compiles")
});

/// Extract the `events per second` throughput from a sysbench CPU log.
pub fn parse_events_per_sec(path: &Path) -> Option<f64> {
    let content = read_if_present(path)?;
    EVENTS_PER_SEC
        .captures(&content)
        .and_then(|captures| captures[1].parse().ok())
}
