use super::read_if_present;
use std::path::Path;

/// CPU time breakdown from the summary line of a system activity report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuAverages {
    pub user_pct: f64,
    pub system_pct: f64,
    pub idle_pct: f64,
}

/// Extract the averaged CPU breakdown from a sar log.
///
/// Scans lines in reverse for the last summary line of the form
/// `Average:  all  <user> <nice> <system> <iowait> <steal> <idle>` and reads
/// the user, system, and idle values from their fixed column positions.
/// Returns [`None`] when the file is missing or empty, no summary line is
/// present, the line has fewer than eight columns, or any of the three
/// values is not numeric.
pub fn parse_cpu_averages(path: &Path) -> Option<CpuAverages> {
    let content = read_if_present(path)?;

    let summary = content
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| line.starts_with("Average:") && line.contains("all"))?;

    let fields = summary.split_whitespace().collect::<Vec<_>>();
    if fields.len() < 8 {
        return None;
    }

    Some(CpuAverages {
        user_pct: fields[2].parse().ok()?,
        system_pct: fields[4].parse().ok()?,
        idle_pct: fields[7].parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_log(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("sar.log");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_the_documented_summary_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "Linux 6.1.0 (host) \t01/01/25 \t_aarch64_\n\
             12:00:01        CPU     %user     %nice   %system   %iowait    %steal     %idle\n\
             12:00:02        all      9.50      0.00      0.20      0.00      0.00     90.30\n\
             Average:     all   10.07  0.00  0.10  0.00  0.00  89.84\n",
        );

        assert_eq!(
            parse_cpu_averages(&path),
            Some(CpuAverages {
                user_pct: 10.07,
                system_pct: 0.10,
                idle_pct: 89.84,
            })
        );
    }

    #[test]
    fn last_summary_line_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(
            &dir,
            "Average:     all   1.00  0.00  1.00  0.00  0.00  98.00\n\
             Average:     all   10.07  0.00  0.10  0.00  0.00  89.84\n",
        );

        assert_eq!(parse_cpu_averages(&path).unwrap().user_pct, 10.07);
    }

    #[test]
    fn too_few_columns_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, "Average:     all   10.07  0.00  0.10\n");
        assert_eq!(parse_cpu_averages(&path), None);
    }

    #[test]
    fn non_numeric_column_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, "Average:     all   10.07  0.00  n/a  0.00  0.00  89.84\n");
        assert_eq!(parse_cpu_averages(&path), None);
    }

    #[test]
    fn missing_summary_line_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, "12:00:02  all  9.50  0.00  0.20  0.00  0.00  90.30\n");
        assert_eq!(parse_cpu_averages(&path), None);
    }

    #[test]
    fn missing_and_empty_files_are_no_data() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(parse_cpu_averages(&dir.path().join("absent.log")), None);

        let empty = write_log(&dir, "");
        assert_eq!(parse_cpu_averages(&empty), None);
    }
}
