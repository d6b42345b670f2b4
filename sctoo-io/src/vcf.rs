//! VCF parsing into variant positions.
//!
//! Only the fixed columns are looked at: CHROM, POS, ID, REF, ALT and INFO.
//! Sample columns are ignored. POS is 1-based in VCF and is stored 0-based.

use std::io::BufRead;
use std::path::Path;

use sctoo_core::models::{Position, VariantPosition};
use sctoo_core::utils::get_dynamic_reader;

use crate::error::{Result, SctooIoError, ensure_exists};

/// INFO flag VarScan2 sets on somatic calls.
pub const SOMATIC_FLAG: &str = "SOMATIC";

/// The mandatory VCF columns, CHROM through INFO.
const VCF_FIXED_COLUMNS: usize = 8;

/// A borrowed view of one VCF data line, handed to record filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcfRecord<'a> {
    pub chrom: &'a str,
    /// 1-based, as written in the file
    pub pos: u32,
    pub id: &'a str,
    pub ref_allele: &'a str,
    pub alt_allele: &'a str,
    pub info: &'a str,
}

impl<'a> VcfRecord<'a> {
    pub fn parse(line: &'a str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.splitn(VCF_FIXED_COLUMNS + 1, '\t').collect();
        if fields.len() < VCF_FIXED_COLUMNS {
            return Err(format!(
                "expected at least {} tab separated columns, found {}",
                VCF_FIXED_COLUMNS,
                fields.len()
            ));
        }

        let pos = fields[1]
            .parse::<u32>()
            .ok()
            .filter(|pos| *pos > 0)
            .ok_or_else(|| format!("POS is not a positive integer: {:?}", fields[1]))?;

        Ok(VcfRecord {
            chrom: fields[0],
            pos,
            id: fields[2],
            ref_allele: fields[3],
            alt_allele: fields[4],
            info: fields[7],
        })
    }

    fn info_entries(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> {
        self.info
            .split(';')
            .filter(|entry| !entry.is_empty() && *entry != ".")
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (entry, None),
            })
    }

    ///
    /// Is `key` present in INFO, either as a flag or as `key=value`?
    ///
    pub fn info_flag(&self, key: &str) -> bool {
        self.info_entries().any(|(k, _)| k == key)
    }

    ///
    /// Value of a `key=value` INFO entry. Flags have no value.
    ///
    pub fn info_value(&self, key: &str) -> Option<&'a str> {
        self.info_entries()
            .find(|(k, _)| *k == key)
            .and_then(|(_, value)| value)
    }

    pub fn to_variant_position(&self) -> VariantPosition {
        VariantPosition {
            id: match self.id {
                "." | "" => None,
                id => Some(id.to_string()),
            },
            ref_allele: self.ref_allele.to_string(),
            alt_allele: self.alt_allele.to_string(),
            // VCF is 1-based -> 0-based; parse rejects POS 0
            position: Position::new(self.chrom, self.pos - 1),
        }
    }
}

///
/// Read the variants of a VCF file that pass `predicate`, in file order.
///
/// # Arguments
/// - path: path to a `.vcf` or `.vcf.gz` file
/// - predicate: keeps a record when it returns `true`
pub fn read_variants_filtered<P, F>(path: P, predicate: F) -> Result<Vec<VariantPosition>>
where
    P: AsRef<Path>,
    F: Fn(&VcfRecord) -> bool,
{
    let path = path.as_ref();
    ensure_exists(path, "VCF")?;

    let mut reader = get_dynamic_reader(path)?;
    let mut variants = Vec::new();
    let mut line_buf = String::new();
    let mut line_num: usize = 0;
    let mut filtered: usize = 0;

    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        line_num += 1;

        let line = line_buf.trim_end_matches('\n').trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let record = VcfRecord::parse(line)
            .map_err(|message| SctooIoError::parse(path, line_num, message))?;

        if predicate(&record) {
            variants.push(record.to_variant_position());
        } else {
            filtered += 1;
        }
    }

    log::debug!(
        "Read {} variants from {} ({} filtered out)",
        variants.len(),
        path.display(),
        filtered
    );

    Ok(variants)
}

///
/// Read every variant of a VCF file.
///
pub fn read_variants<P: AsRef<Path>>(path: P) -> Result<Vec<VariantPosition>> {
    read_variants_filtered(path, |_| true)
}

///
/// Read only variants whose INFO column carries `flag`.
///
pub fn read_variants_with_info_flag<P: AsRef<Path>>(
    path: P,
    flag: &str,
) -> Result<Vec<VariantPosition>> {
    read_variants_filtered(path, |record| record.info_flag(flag))
}

///
/// Read only somatic variants, as annotated by VarScan2.
///
pub fn read_somatic_variants<P: AsRef<Path>>(path: P) -> Result<Vec<VariantPosition>> {
    read_variants_with_info_flag(path, SOMATIC_FLAG)
}
