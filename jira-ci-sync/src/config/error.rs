//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Environment variable {name} is not set")]
    MissingVar { name: String },

    /// The branch name does not look like `prefix/PROJECT-123`.
    #[error("Invalid branch name format '{branch}'. Expected format 'prefix/PROJECT-123'")]
    InvalidBranch { branch: String },

    /// The Jira endpoint is not an absolute URL.
    #[error("Invalid Jira endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// Failed to read the options file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the options file.
    #[error("Failed to parse '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub(crate) fn missing(name: &str) -> Self {
        Self::MissingVar {
            name: name.to_string(),
        }
    }
}
