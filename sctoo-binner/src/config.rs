use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sctoo_core::errors::SctooError;
use sctoo_core::models::fields::{
    DEFAULT_BIN_FIELDS, DEFAULT_INTERVAL_FIELDS, DEFAULT_SEPARATOR, validate_bin_fields,
    validate_interval_fields,
};
use sctoo_core::models::{BinField, IntervalField};
use sctoo_io::CsvOptions;
use sctoo_io::vcf::SOMATIC_FLAG;

use crate::consts::SEPARATOR_ESCAPES;

#[derive(Error, Debug)]
pub enum BinnerConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Core(#[from] SctooError),
    #[error("Invalid config value for `{key}`: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// How bins are written when the output is not a BED file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub fields: Vec<BinField>,
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            fields: DEFAULT_BIN_FIELDS.to_vec(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// How interval tables are read.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CsvConfig {
    pub fields: Vec<IntervalField>,
    pub comment_char: char,
    pub delimiter: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig {
            fields: DEFAULT_INTERVAL_FIELDS.to_vec(),
            comment_char: '#',
            delimiter: ",".to_string(),
        }
    }
}

impl CsvConfig {
    fn delimiter_byte(&self) -> Result<u8, BinnerConfigError> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(BinnerConfigError::InvalidValue {
                key: "csv.delimiter",
                message: format!("{:?} is not a single ASCII character", self.delimiter),
            }),
        }
    }

    pub fn to_csv_options(&self) -> Result<CsvOptions, BinnerConfigError> {
        Ok(CsvOptions {
            fields: self.fields.clone(),
            comment_char: self.comment_char,
            delimiter: self.delimiter_byte()?,
        })
    }
}

///
/// Settings of a binning run. Every key is optional in the TOML file:
///
/// ```toml
/// only_somatic = false
/// somatic_flag = "SOMATIC"
/// parallel = false
///
/// [output]
/// fields = ["ID", "CHR", "START", "END", "COUNT"]
/// separator = "\t"
///
/// [csv]
/// fields = ["ID", "CHR", "START", "END"]
/// comment_char = "#"
/// delimiter = ","
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BinnerConfig {
    /// Keep only variants whose INFO column carries `somatic_flag`
    pub only_somatic: bool,
    pub somatic_flag: String,
    /// Count chromosomes on the rayon thread pool
    pub parallel: bool,
    pub output: OutputConfig,
    pub csv: CsvConfig,
}

impl Default for BinnerConfig {
    fn default() -> Self {
        BinnerConfig {
            only_somatic: false,
            somatic_flag: SOMATIC_FLAG.to_string(),
            parallel: false,
            output: OutputConfig::default(),
            csv: CsvConfig::default(),
        }
    }
}

impl BinnerConfig {
    ///
    /// Check the settings that serde cannot check on its own.
    ///
    pub fn validate(&self) -> Result<(), BinnerConfigError> {
        validate_bin_fields(&self.output.fields)?;
        validate_interval_fields(&self.csv.fields)?;
        self.csv.delimiter_byte()?;

        if self.output.separator.is_empty() {
            return Err(BinnerConfigError::InvalidValue {
                key: "output.separator",
                message: "must not be empty".to_string(),
            });
        }
        if self.somatic_flag.trim().is_empty() {
            return Err(BinnerConfigError::InvalidValue {
                key: "somatic_flag",
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

///
/// Turn the escapes a shell passes through literally (`\t`, `\n`) into the
/// characters they stand for.
///
pub fn unescape_separator(sep: &str) -> String {
    SEPARATOR_ESCAPES
        .iter()
        .fold(sep.to_string(), |acc, (escaped, raw)| acc.replace(escaped, raw))
}

impl TryFrom<&Path> for BinnerConfig {
    type Error = BinnerConfigError;

    ///
    /// Load and validate a config.
    ///
    /// # Arguments
    /// - value: path to the config file (a .toml file)
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(value)?;
        let config: BinnerConfig = toml::from_str(&toml_str)?;
        config.validate()?;

        Ok(config)
    }
}
