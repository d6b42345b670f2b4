use std::path::{Path, PathBuf};

use thiserror::Error;

use sctoo_core::models::{BinRecord, GeneInterval, VariantPosition};
use sctoo_core::utils::{FileType, get_file_info};
use sctoo_io::error::SctooIoError;
use sctoo_io::{read_intervals_from_bed, read_intervals_from_csv, read_variants, read_variants_with_info_flag};

use crate::config::{BinnerConfig, BinnerConfigError};
use crate::counter::count_variants;
use crate::parallel::count_variants_parallel;

#[derive(Error, Debug)]
pub enum BinnerError {
    #[error("Unsupported {kind} file: {} (expected {expected})", .path.display())]
    UnsupportedInput {
        kind: &'static str,
        path: PathBuf,
        expected: &'static str,
    },
    #[error(transparent)]
    Io(#[from] SctooIoError),
    #[error(transparent)]
    Config(#[from] BinnerConfigError),
}

pub type Result<T> = std::result::Result<T, BinnerError>;

///
/// Read the variants of a VCF file, keeping only somatic ones if the config
/// asks for it.
///
pub fn load_variants<P: AsRef<Path>>(path: P, config: &BinnerConfig) -> Result<Vec<VariantPosition>> {
    let path = path.as_ref();

    if get_file_info(path).file_type != FileType::VCF {
        return Err(BinnerError::UnsupportedInput {
            kind: "variant",
            path: path.to_path_buf(),
            expected: ".vcf or .vcf.gz",
        });
    }

    let variants = if config.only_somatic {
        read_variants_with_info_flag(path, &config.somatic_flag)?
    } else {
        read_variants(path)?
    };

    Ok(variants)
}

///
/// Read gene intervals from a BED file or a delimited table, picked by the
/// file extension. `.tsv`/`.txt` tables are read tab separated.
///
pub fn load_intervals<P: AsRef<Path>>(path: P, config: &BinnerConfig) -> Result<Vec<GeneInterval>> {
    let path = path.as_ref();

    let intervals = match get_file_info(path).file_type {
        FileType::BED => read_intervals_from_bed(path)?,
        FileType::CSV => read_intervals_from_csv(path, &config.csv.to_csv_options()?)?,
        FileType::TSV => {
            let mut options = config.csv.to_csv_options()?;
            options.delimiter = b'\t';
            read_intervals_from_csv(path, &options)?
        }
        _ => {
            return Err(BinnerError::UnsupportedInput {
                kind: "interval",
                path: path.to_path_buf(),
                expected: ".bed, .csv or .tsv, optionally gzipped",
            });
        }
    };

    Ok(intervals)
}

///
/// Count with the sequential pass, or per chromosome on the thread pool.
///
pub fn count(
    variants: &[VariantPosition],
    intervals: &[GeneInterval],
    config: &BinnerConfig,
) -> Vec<BinRecord> {
    if config.parallel {
        count_variants_parallel(variants, intervals)
    } else {
        count_variants(variants, intervals)
    }
}

///
/// Load both inputs and bin the variants into the intervals.
///
/// # Arguments
/// - variants: path to a sorted VCF file
/// - intervals: path to sorted BED or CSV intervals
/// - config: run settings
pub fn bin_variants_from_files<P, Q>(
    variants: P,
    intervals: Q,
    config: &BinnerConfig,
) -> Result<Vec<BinRecord>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    config.validate()?;

    let intervals = load_intervals(intervals, config)?;
    let variants = load_variants(variants, config)?;

    log::info!(
        "Binning {} variants into {} intervals",
        variants.len(),
        intervals.len()
    );

    Ok(count(&variants, &intervals, config))
}
