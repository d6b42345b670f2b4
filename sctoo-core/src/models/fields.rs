use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::SctooError;

pub const DEFAULT_SEPARATOR: &str = "\t";

pub const DEFAULT_BIN_FIELDS: [BinField; 5] = [
    BinField::Id,
    BinField::Chr,
    BinField::Start,
    BinField::End,
    BinField::Count,
];

pub const DEFAULT_INTERVAL_FIELDS: [IntervalField; 4] = [
    IntervalField::Id,
    IntervalField::Chr,
    IntervalField::Start,
    IntervalField::End,
];

/// A column of a delimited bin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum BinField {
    Id,
    Chr,
    Start,
    End,
    Count,
}

/// A column of a delimited interval table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum IntervalField {
    Id,
    Chr,
    Start,
    End,
}

impl BinField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinField::Id => "ID",
            BinField::Chr => "CHR",
            BinField::Start => "START",
            BinField::End => "END",
            BinField::Count => "COUNT",
        }
    }
}

impl IntervalField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalField::Id => "ID",
            IntervalField::Chr => "CHR",
            IntervalField::Start => "START",
            IntervalField::End => "END",
        }
    }
}

impl FromStr for BinField {
    type Err = SctooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ID" => Ok(BinField::Id),
            "CHR" => Ok(BinField::Chr),
            "START" => Ok(BinField::Start),
            "END" => Ok(BinField::End),
            "COUNT" => Ok(BinField::Count),
            _ => Err(SctooError::InvalidField(
                s.to_string(),
                "ID, CHR, START, END and COUNT",
            )),
        }
    }
}

impl FromStr for IntervalField {
    type Err = SctooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ID" => Ok(IntervalField::Id),
            "CHR" => Ok(IntervalField::Chr),
            "START" => Ok(IntervalField::Start),
            "END" => Ok(IntervalField::End),
            _ => Err(SctooError::InvalidField(
                s.to_string(),
                "ID, CHR, START and END",
            )),
        }
    }
}

impl Display for BinField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for IntervalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn check_fields<T: Copy + Eq + Display>(fields: &[T], required: &[T]) -> Result<(), SctooError> {
    if fields.is_empty() {
        return Err(SctooError::InvalidFieldOrder("no fields given".to_string()));
    }

    for (i, field) in fields.iter().enumerate() {
        if fields[..i].contains(field) {
            return Err(SctooError::InvalidFieldOrder(format!(
                "{} is listed more than once",
                field
            )));
        }
    }

    if let Some(missing) = required.iter().find(|f| !fields.contains(*f)) {
        return Err(SctooError::InvalidFieldOrder(format!(
            "{} is missing",
            missing
        )));
    }

    Ok(())
}

///
/// Check that a list of output fields is usable for writing: non-empty and
/// without repeats. Any subset of the bin fields is allowed.
///
pub fn validate_bin_fields(fields: &[BinField]) -> Result<(), SctooError> {
    check_fields(fields, &[])
}

///
/// Check that a list of fields names every bin field exactly once, which is
/// what is needed to read a line back into a [crate::models::BinRecord].
///
pub fn validate_complete_bin_fields(fields: &[BinField]) -> Result<(), SctooError> {
    check_fields(fields, &DEFAULT_BIN_FIELDS)
}

pub fn validate_interval_fields(fields: &[IntervalField]) -> Result<(), SctooError> {
    check_fields(fields, &DEFAULT_INTERVAL_FIELDS)
}

///
/// Parse a comma separated list of bin fields, e.g. `ID,CHR,START,END,COUNT`.
/// Matching is case-insensitive.
///
pub fn parse_bin_fields(s: &str) -> Result<Vec<BinField>, SctooError> {
    let fields = s
        .split(',')
        .map(BinField::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    validate_bin_fields(&fields)?;
    Ok(fields)
}

pub fn parse_interval_fields(s: &str) -> Result<Vec<IntervalField>, SctooError> {
    let fields = s
        .split(',')
        .map(IntervalField::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    validate_interval_fields(&fields)?;
    Ok(fields)
}
