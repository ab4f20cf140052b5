//! Error kinds for catalog generation.
//!
//! Every variant is fatal: the generator stops at the first one and the
//! output file is left untouched.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Input file not found: {0:?}")]
    InputNotFound(PathBuf),

    #[error("Input is missing required column \"{0}\"")]
    MissingColumn(&'static str),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Invalid video count at line {line}: {value:?} is not a non-negative integer")]
    InvalidVideoCount { line: u64, value: String },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write output file {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type GenerateResult<T> = std::result::Result<T, GenerateError>;
