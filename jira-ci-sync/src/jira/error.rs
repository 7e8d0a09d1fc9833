//! Jira client error types.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Errors returned by [`JiraClient`](super::JiraClient).
#[derive(Debug, Error)]
pub enum JiraError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Jira answered with a non-success status.
    #[error("Jira API error: {method} {url} returned {status}: {body}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The token cannot be used in an `Authorization` header.
    #[error("Jira token contains characters that are not valid in an HTTP header")]
    InvalidToken,
}

impl JiraError {
    /// Returns the HTTP status for [`JiraError::Status`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
