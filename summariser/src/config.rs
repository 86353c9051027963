//! Which environments and benchmarks a summariser run looks for.

/// Log directories of the three execution environments, in display order.
const DEFAULT_ENVIRONMENTS: [&str; 3] = ["qemu_log", "rosetta_log", "native_log"];

/// The fixed benchmark set, in display order.
const DEFAULT_BENCHMARKS: [&str; 10] = [
    "arith_benchmark",
    "array_sorting",
    "file_io_benchmark",
    "hashing_benchmark",
    "matrix_multiplication",
    "memory_allocation",
    "multi_threaded_computation",
    "parallel_computation",
    "prime_numbers",
    "recursive_fibonacci",
];

/// Environment and benchmark lists driving one summariser run.
///
/// The aggregator takes this explicitly rather than reading a module-level
/// list so the pipeline can be exercised against alternate sets in tests.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Per-environment log directory names, e.g. `qemu_log`.
    pub environments: Vec<String>,
    /// Benchmark subdirectory names, one per workload.
    pub benchmarks: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            environments: DEFAULT_ENVIRONMENTS.iter().map(|s| s.to_string()).collect(),
            benchmarks: DEFAULT_BENCHMARKS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Display name of an environment, derived from its log directory name.
///
/// `qemu_log` becomes `qemu`; a name without the suffix is used as-is.
pub fn environment_name(dir_name: &str) -> &str {
    dir_name.strip_suffix("_log").unwrap_or(dir_name)
}
