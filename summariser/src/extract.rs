//! Log extractors.
//!
//! Pure functions that pull typed values out of one log file each. They
//! tolerate missing, empty, and malformed input: anything that cannot be
//! parsed comes back as an absent value, never as an error.

mod fio;
mod sar;
mod sysbench;
mod timing;

pub use fio::parse_bandwidth;
pub use sar::{CpuAverages, parse_cpu_averages};
pub use sysbench::parse_events_per_sec;
pub use timing::{TimingOutcome, parse_timing};

use std::path::Path;

/// Read a log file, treating a missing or zero-length file as no data.
pub(crate) fn read_if_present(path: &Path) -> Option<String> {
    let metadata = std::fs::metadata(path).ok()?;
    if metadata.len() == 0 {
        return None;
    }
    std::fs::read_to_string(path).ok()
}
