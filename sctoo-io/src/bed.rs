use std::io::BufRead;
use std::path::Path;

use sctoo_core::models::GeneInterval;
use sctoo_core::utils::get_dynamic_reader;

use crate::error::{Result, SctooIoError, ensure_exists};

/// Name given to intervals of BED3 files, which have no name column.
pub const UNNAMED_INTERVAL: &str = "unnamed";

fn is_bed_header(line: &str) -> bool {
    line.starts_with("browser") | line.starts_with("track") | line.starts_with('#')
}

///
/// Read gene intervals from a BED file (plain or gzipped), in file order.
///
/// The name is taken from the 4th column; extra columns are ignored.
/// `browser`, `track` and `#` lines are skipped, as is a column header line
/// such as `chr start end name` at the top of the file.
///
/// # Arguments
/// - path: path to a `.bed` or `.bed.gz` file
pub fn read_intervals_from_bed<P: AsRef<Path>>(path: P) -> Result<Vec<GeneInterval>> {
    let path = path.as_ref();
    ensure_exists(path, "BED")?;

    let reader = get_dynamic_reader(path)?;
    let mut intervals: Vec<GeneInterval> = Vec::new();
    let mut first_line: bool = true;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = index + 1;

        if line.trim().is_empty() || is_bed_header(&line) {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();

        // Handling column headers like `chr start end etc` without #
        if first_line {
            first_line = false;
            if parts.len() >= 3
                && parts[1].parse::<u32>().is_err()
                && parts[2].parse::<u32>().is_err()
            {
                log::debug!("Skipping column header in {}: {}", path.display(), line);
                continue;
            }
        }

        if parts.len() < 3 {
            return Err(SctooIoError::parse(
                path,
                line_num,
                format!("{:?} could not be parsed as a BED interval", line),
            ));
        }

        let start = parts[1].parse::<u32>().map_err(|_| {
            SctooIoError::parse(
                path,
                line_num,
                format!("Error in parsing start position: {:?}", parts[1]),
            )
        })?;
        let end = parts[2].parse::<u32>().map_err(|_| {
            SctooIoError::parse(
                path,
                line_num,
                format!("Error in parsing end position: {:?}", parts[2]),
            )
        })?;

        if end < start {
            return Err(SctooIoError::parse(
                path,
                line_num,
                format!("end {} is before start {}", end, start),
            ));
        }

        let name = parts
            .get(3)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(UNNAMED_INTERVAL);

        intervals.push(GeneInterval::new(name, parts[0], start, end));
    }

    log::debug!("Read {} intervals from {}", intervals.len(), path.display());

    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/intervals")
            .join(file_name)
    }

    #[rstest]
    fn test_read_intervals_from_bed() {
        let intervals = read_intervals_from_bed(get_test_path("genes.bed")).unwrap();

        assert_eq!(intervals.len(), 4);
        assert_eq!(intervals[0], GeneInterval::new("g1", "chr1", 10, 20));
        assert_eq!(intervals[3], GeneInterval::new("g4", "chr2", 90, 120));
    }

    #[rstest]
    fn test_read_intervals_skips_headers() {
        let intervals = read_intervals_from_bed(get_test_path("genes_headers.bed")).unwrap();

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].name, "g1");
    }

    #[rstest]
    fn test_read_intervals_bad_first_start_is_not_a_header() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("genes.bed");
        std::fs::write(&path, "chr1\t1O\t20\tg1\nchr1\t30\t40\tg2\n").unwrap();

        let result = read_intervals_from_bed(&path);
        assert!(matches!(result, Err(SctooIoError::Parse { line: 1, .. })));
    }

    #[rstest]
    fn test_read_intervals_bed3_is_unnamed() {
        let intervals = read_intervals_from_bed(get_test_path("genes.bed3.bed")).unwrap();

        assert!(intervals.iter().all(|iv| iv.name == UNNAMED_INTERVAL));
    }

    #[rstest]
    fn test_read_intervals_missing_file() {
        let result = read_intervals_from_bed(get_test_path("missing.bed"));
        assert!(matches!(result, Err(SctooIoError::FileNotFound { .. })));
    }

    #[rstest]
    fn test_read_intervals_bad_coordinate_aborts() {
        let result = read_intervals_from_bed(get_test_path("genes_malformed.bed"));
        match result {
            Err(SctooIoError::Parse { line, path, .. }) => {
                assert_eq!(line, 3);
                assert!(path.ends_with("genes_malformed.bed"));
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }
}
