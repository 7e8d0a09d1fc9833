//! CI environment file error types.

use thiserror::Error;

/// Errors that can occur while reading or appending to the CI environment file.
#[derive(Debug, Error)]
pub enum GithubEnvError {
    /// Failed to open, read or write the file.
    #[error("Failed to access environment file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The entry cannot be expressed as a single `KEY=value` line.
    #[error("Cannot export '{key}': names must be non-empty without '=' and values single-line")]
    InvalidEntry { key: String },
}
