//! Error types for FastQC report conversion

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while locating, parsing or converting a FastQC report
#[derive(Error, Debug)]
pub enum Error {
    /// No fastqc_data.txt could be located at or inside the given path
    #[error("fastqc_data.txt not found in {0}")]
    NotFound(PathBuf),

    /// The section-terminator / tab grammar could not be parsed
    #[error("malformed FastQC report: {0}")]
    MalformedReport(String),

    /// The Basic Statistics module is absent or not the first module
    #[error("mandatory module missing or out of position: {0}")]
    MissingMandatoryModule(&'static str),

    /// A required key is missing from the Basic Statistics module
    #[error("required field not found in Basic Statistics: {0}")]
    FieldNotFound(&'static str),

    /// A derived statistic could not be computed
    #[error("failed to compute {statistic}: {reason}")]
    ComputationError {
        statistic: &'static str,
        reason: String,
    },

    /// An unrecognized output-format discriminator was requested
    #[error("unsupported output format: {0} (expected json, json-ld, turtle or tsv)")]
    UnsupportedFormat(String),

    /// I/O error from the report reader
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive error from the report reader
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a computation error for a named statistic
    pub fn computation(statistic: &'static str, reason: impl Into<String>) -> Self {
        Error::ComputationError {
            statistic,
            reason: reason.into(),
        }
    }
}
