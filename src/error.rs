//! Error types for the gradle-harness crate.

use std::path::PathBuf;
use thiserror::Error;

use crate::compare::CompareMode;

/// Top-level error type for project generation and assertions.
#[derive(Error, Debug)]
pub enum Error {
    /// Caller misused the configuration API.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error during generation or assertion.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The build did not report success.
    #[error("build did not report success:\n{output}")]
    BuildFailed {
        /// Captured build output, attached for diagnostics.
        output: String,
    },

    /// An asserted file does not exist.
    #[error("file {path} does not exist")]
    MissingFile { path: PathBuf },

    /// An asserted file's content does not match the expectation.
    #[error("file {path} does not match expected content ({mode})")]
    ContentMismatch { path: PathBuf, mode: CompareMode },
}

/// Result type alias for project generation and assertions.
pub type Result<T> = std::result::Result<T, Error>;
