//! Gene intervals from delimited tables (CSV by default).
//!
//! Anything from the comment character to the end of a line is dropped before
//! the line is parsed, so whole-line and trailing comments both work. Quoted
//! fields are honored.

use std::io::BufRead;
use std::path::Path;

use ::csv::{ReaderBuilder, Trim};
use sctoo_core::errors::SctooError;
use sctoo_core::models::fields::{DEFAULT_INTERVAL_FIELDS, validate_interval_fields};
use sctoo_core::models::{GeneInterval, IntervalField};
use sctoo_core::utils::get_dynamic_reader;

use crate::error::{Result, SctooIoError, ensure_exists};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Column order, naming each of ID, CHR, START and END once
    pub fields: Vec<IntervalField>,
    pub comment_char: char,
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            fields: DEFAULT_INTERVAL_FIELDS.to_vec(),
            comment_char: '#',
            delimiter: b',',
        }
    }
}

impl CsvOptions {
    pub fn tab_separated() -> Self {
        CsvOptions {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    fn index_of(&self, field: IntervalField) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| *f == field)
            .ok_or_else(|| SctooError::InvalidFieldOrder(format!("{} is missing", field)).into())
    }

    fn describe_fields(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

///
/// Read gene intervals from a delimited table, in file order.
///
/// # Arguments
/// - path: path to the table, optionally gzipped
/// - options: column order, comment character and delimiter
pub fn read_intervals_from_csv<P: AsRef<Path>>(
    path: P,
    options: &CsvOptions,
) -> Result<Vec<GeneInterval>> {
    let path = path.as_ref();
    validate_interval_fields(&options.fields)?;
    ensure_exists(path, "CSV")?;

    let id_idx = options.index_of(IntervalField::Id)?;
    let chr_idx = options.index_of(IntervalField::Chr)?;
    let start_idx = options.index_of(IntervalField::Start)?;
    let end_idx = options.index_of(IntervalField::End)?;

    // strip comments, remembering the file line each kept line came from
    let reader = get_dynamic_reader(path)?;
    let mut content = String::new();
    let mut line_numbers: Vec<usize> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let raw = line.split(options.comment_char).next().unwrap_or("").trim();
        if raw.is_empty() {
            continue;
        }
        content.push_str(raw);
        content.push('\n');
        line_numbers.push(index + 1);
    }

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .quote(b'"')
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut intervals: Vec<GeneInterval> = Vec::new();

    for (row_index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line_num = record
            .position()
            .and_then(|p| line_numbers.get((p.line() as usize).saturating_sub(1)))
            .copied()
            .unwrap_or(row_index + 1);
        let joined = record.iter().collect::<Vec<_>>().join(", ");

        if record.len() < options.fields.len() {
            return Err(SctooIoError::parse(
                path,
                line_num,
                format!("\"{}\" could not be parsed as GeneInterval", joined),
            ));
        }

        let coordinate = |idx: usize| {
            record[idx].parse::<u32>().map_err(|_| {
                SctooIoError::parse(
                    path,
                    line_num,
                    format!(
                        "\"{}\" could not be interpreted as {}",
                        joined,
                        options.describe_fields()
                    ),
                )
            })
        };
        let start = coordinate(start_idx)?;
        let end = coordinate(end_idx)?;

        if end < start {
            return Err(SctooIoError::parse(
                path,
                line_num,
                format!("end {} is before start {}", end, start),
            ));
        }

        intervals.push(GeneInterval::new(
            &record[id_idx],
            &record[chr_idx],
            start,
            end,
        ));
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
    fn test_read_intervals_from_csv() {
        let intervals =
            read_intervals_from_csv(get_test_path("genes.csv"), &CsvOptions::default()).unwrap();

        assert_eq!(
            intervals,
            vec![
                GeneInterval::new("g1", "chr1", 10, 20),
                GeneInterval::new("g2, long name", "chr1", 20, 30),
                GeneInterval::new("g3", "chr1", 40, 50),
                GeneInterval::new("g4", "chr2", 90, 120),
            ]
        );
    }

    #[rstest]
    fn test_read_intervals_custom_column_order() {
        let options = CsvOptions {
            fields: vec![
                IntervalField::Chr,
                IntervalField::Start,
                IntervalField::End,
                IntervalField::Id,
            ],
            ..Default::default()
        };
        let intervals = read_intervals_from_csv(get_test_path("genes_reordered.csv"), &options)
            .unwrap();
        let default_order =
            read_intervals_from_csv(get_test_path("genes.csv"), &CsvOptions::default()).unwrap();

        assert_eq!(intervals, default_order);
    }

    #[rstest]
    fn test_read_intervals_custom_comment_char() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("genes.csv");
        std::fs::write(&path, "; header\ng1,chr1,1,5 ; trailing\n").unwrap();

        let options = CsvOptions {
            comment_char: ';',
            ..Default::default()
        };
        let intervals = read_intervals_from_csv(&path, &options).unwrap();

        assert_eq!(intervals, vec![GeneInterval::new("g1", "chr1", 1, 5)]);
    }

    #[rstest]
    fn test_read_intervals_tab_separated() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("genes.tsv");
        std::fs::write(&path, "g1\tchr1\t1\t5\n").unwrap();

        let intervals = read_intervals_from_csv(&path, &CsvOptions::tab_separated()).unwrap();

        assert_eq!(intervals, vec![GeneInterval::new("g1", "chr1", 1, 5)]);
    }

    #[rstest]
    fn test_read_intervals_bad_coordinate_reports_file_line() {
        let result =
            read_intervals_from_csv(get_test_path("genes_malformed.csv"), &CsvOptions::default());

        match result {
            Err(SctooIoError::Parse { line, message, .. }) => {
                assert_eq!(line, 4);
                assert!(message.contains("could not be interpreted as ID, CHR, START, END"));
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_read_intervals_short_row() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("genes.csv");
        std::fs::write(&path, "g1,chr1,1,5\ng2,chr1\n").unwrap();

        let result = read_intervals_from_csv(&path, &CsvOptions::default());
        assert!(matches!(result, Err(SctooIoError::Parse { line: 2, .. })));
    }

    #[rstest]
    fn test_read_intervals_invalid_field_order() {
        let options = CsvOptions {
            fields: vec![IntervalField::Chr, IntervalField::Start, IntervalField::End],
            ..Default::default()
        };
        let result = read_intervals_from_csv(get_test_path("genes.csv"), &options);
        assert!(matches!(result, Err(SctooIoError::Core(_))));
    }

    #[rstest]
    fn test_read_intervals_missing_file() {
        let result = read_intervals_from_csv(get_test_path("missing.csv"), &CsvOptions::default());
        assert!(matches!(result, Err(SctooIoError::FileNotFound { .. })));
    }
}
