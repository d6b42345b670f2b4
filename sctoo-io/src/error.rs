use std::io;
use std::path::PathBuf;

use sctoo_core::errors::SctooError;
use thiserror::Error;

/// Error type for sctoo-io operations.
#[derive(Error, Debug)]
pub enum SctooIoError {
    /// Input file does not exist.
    #[error("Could not locate {kind} file {}", .path.display())]
    FileNotFound { kind: &'static str, path: PathBuf },

    /// A line could not be turned into a record. `line` is 1-based.
    #[error("Parsing error in {} line {line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Writers never overwrite.
    #[error("Aborting: file {} exists", .0.display())]
    OutputExists(PathBuf),

    #[error(transparent)]
    Core(#[from] SctooError),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SctooIoError {
    pub(crate) fn parse(path: &std::path::Path, line: usize, message: String) -> Self {
        SctooIoError::Parse {
            path: path.to_path_buf(),
            line,
            message,
        }
    }
}

/// Result type alias for sctoo-io operations.
pub type Result<T> = std::result::Result<T, SctooIoError>;

///
/// Fail early with [SctooIoError::FileNotFound] when an input is absent.
///
pub(crate) fn ensure_exists(path: &std::path::Path, kind: &'static str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SctooIoError::FileNotFound {
            kind,
            path: path.to_path_buf(),
        })
    }
}
