use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SctooError {
    #[error("Unknown field: {0}. Valid fields are {1}")]
    InvalidField(String, &'static str),

    #[error("Invalid field order: {0}")]
    InvalidFieldOrder(String),

    #[error("Error parsing bin record: {0}")]
    BinParseError(String),
}
