use std::fmt::{self, Display};

use crate::errors::SctooError;
use crate::models::fields::{DEFAULT_BIN_FIELDS, DEFAULT_SEPARATOR, validate_complete_bin_fields};
use crate::models::{BinField, GeneInterval, Region};

///
/// A gene interval annotated with the number of variants it contains.
///
/// Bins are created from a [GeneInterval] with a count of zero; the
/// interval values are copied so the bin owns everything it reports.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct BinRecord {
    pub name: String,
    pub region: Region,
    pub count: u32,
}

impl From<&GeneInterval> for BinRecord {
    fn from(interval: &GeneInterval) -> Self {
        BinRecord {
            name: interval.name.clone(),
            region: interval.region.clone(),
            count: 0,
        }
    }
}

impl BinRecord {
    pub fn new(name: &str, chr: &str, start: u32, end: u32, count: u32) -> Self {
        BinRecord {
            name: name.to_owned(),
            region: Region::new(chr, start, end),
            count,
        }
    }

    #[inline]
    pub fn increment(&mut self) {
        self.count += 1;
    }

    fn field_value(&self, field: &BinField) -> String {
        match field {
            BinField::Id => self.name.clone(),
            BinField::Chr => self.region.chr.clone(),
            BinField::Start => self.region.start.to_string(),
            BinField::End => self.region.end.to_string(),
            BinField::Count => self.count.to_string(),
        }
    }

    ///
    /// Render the bin as one delimited line, without a line terminator.
    ///
    /// # Arguments
    /// - fields: which columns to emit, in order
    /// - sep: the string placed between columns
    pub fn as_delimited_line(&self, fields: &[BinField], sep: &str) -> String {
        fields
            .iter()
            .map(|field| self.field_value(field))
            .collect::<Vec<String>>()
            .join(sep)
    }

    ///
    /// Tab separated `ID CHR START END COUNT` line
    ///
    pub fn as_csv_line(&self) -> String {
        self.as_delimited_line(&DEFAULT_BIN_FIELDS, DEFAULT_SEPARATOR)
    }

    ///
    /// BED-like `CHR START END ID COUNT` line
    ///
    pub fn as_bed_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.region.chr, self.region.start, self.region.end, self.name, self.count
        )
    }

    ///
    /// Read a bin back from a line written by [BinRecord::as_delimited_line].
    ///
    /// `fields` has to name every [BinField] exactly once.
    pub fn from_delimited_line(
        line: &str,
        fields: &[BinField],
        sep: &str,
    ) -> Result<Self, SctooError> {
        validate_complete_bin_fields(fields)?;
        if sep.is_empty() {
            return Err(SctooError::BinParseError(
                "separator must not be empty".to_string(),
            ));
        }

        let line = line.trim_end_matches(['\n', '\r']);
        let parts: Vec<&str> = line.split(sep).collect();
        if parts.len() != fields.len() {
            return Err(SctooError::BinParseError(format!(
                "expected {} fields, found {}: {:?}",
                fields.len(),
                parts.len(),
                line
            )));
        }

        let parse_int = |field: BinField, value: &str| {
            value.parse::<u32>().map_err(|_| {
                SctooError::BinParseError(format!("{} is not an integer: {:?}", field, value))
            })
        };

        let mut record = BinRecord::new("", "", 0, 0, 0);
        for (field, value) in fields.iter().zip(parts) {
            match field {
                BinField::Id => record.name = value.to_string(),
                BinField::Chr => record.region.chr = value.to_string(),
                BinField::Start => record.region.start = parse_int(*field, value)?,
                BinField::End => record.region.end = parse_int(*field, value)?,
                BinField::Count => record.count = parse_int(*field, value)?,
            }
        }

        Ok(record)
    }
}

impl Display for BinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bed_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn bin() -> BinRecord {
        BinRecord::new("TP53", "chr17", 7661778, 7687538, 1200)
    }

    #[rstest]
    fn test_from_gene_interval_starts_at_zero() {
        let interval = GeneInterval::new("g1", "chr1", 10, 20);
        let bin = BinRecord::from(&interval);

        assert_eq!(bin, BinRecord::new("g1", "chr1", 10, 20, 0));
    }

    #[rstest]
    fn test_as_csv_line(bin: BinRecord) {
        assert_eq!(bin.as_csv_line(), "TP53\tchr17\t7661778\t7687538\t1200");
    }

    #[rstest]
    fn test_as_bed_line(bin: BinRecord) {
        assert_eq!(bin.as_bed_line(), "chr17\t7661778\t7687538\tTP53\t1200");
        assert_eq!(format!("{}", bin), bin.as_bed_line());
    }

    #[rstest]
    fn test_as_delimited_line_custom_order(bin: BinRecord) {
        let fields = [BinField::Count, BinField::Id, BinField::Chr];
        assert_eq!(bin.as_delimited_line(&fields, ","), "1200,TP53,chr17");
    }

    #[rstest]
    fn test_as_delimited_line_does_not_mutate(bin: BinRecord) {
        let before = bin.clone();
        let _ = bin.as_delimited_line(&DEFAULT_BIN_FIELDS, ";");
        let _ = bin.as_bed_line();
        assert_eq!(bin, before);
    }

    #[rstest]
    #[case(&DEFAULT_BIN_FIELDS, "\t")]
    #[case(&[BinField::Chr, BinField::Start, BinField::End, BinField::Id, BinField::Count], ",")]
    #[case(&[BinField::Count, BinField::End, BinField::Start, BinField::Chr, BinField::Id], " | ")]
    fn test_delimited_line_round_trip(bin: BinRecord, #[case] fields: &[BinField], #[case] sep: &str) {
        let line = bin.as_delimited_line(fields, sep);
        let parsed = BinRecord::from_delimited_line(&line, fields, sep).unwrap();

        assert_eq!(parsed, bin);
    }

    #[rstest]
    fn test_from_delimited_line_needs_all_fields() {
        let result = BinRecord::from_delimited_line("g1\t3", &[BinField::Id, BinField::Count], "\t");
        assert!(matches!(result, Err(SctooError::InvalidFieldOrder(_))));
    }

    #[rstest]
    fn test_from_delimited_line_rejects_bad_integer() {
        let result = BinRecord::from_delimited_line(
            "g1\tchr1\t10\ttwenty\t0",
            &DEFAULT_BIN_FIELDS,
            DEFAULT_SEPARATOR,
        );
        assert!(matches!(result, Err(SctooError::BinParseError(_))));
    }

    #[rstest]
    fn test_from_delimited_line_rejects_wrong_width() {
        let result =
            BinRecord::from_delimited_line("g1\tchr1\t10\t20", &DEFAULT_BIN_FIELDS, DEFAULT_SEPARATOR);
        assert!(matches!(result, Err(SctooError::BinParseError(_))));
    }
}
