//! Runtime configuration.
//!
//! Connection settings come from the environment the CI runner provides.
//! Message templates and operation defaults come from an optional TOML file
//! (see [`SyncOptions`]).

mod error;
mod options;

pub use error::ConfigError;
pub use options::{SyncOptions, DEFAULT_LINK_TYPE, DEFAULT_OPTIONS_PATH, DEFAULT_PRIORITY};

use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// Base URL of the Jira REST API, e.g. `https://jira.example.com/rest/api/2`.
pub const JIRA_ENDPOINT_ENV: &str = "JIRA_ENDPOINT";
/// Bearer token sent with every Jira request.
pub const JIRA_AUTHORIZATION_ENV: &str = "JIRA_AUTHORIZATION";
/// User that triggered the workflow.
pub const AUTHOR_ENV: &str = "AUTHOR";
/// Repository in `owner/name` form.
pub const REPOSITORY_ENV: &str = "REPOSITORY";
/// Branch name the issue keys are derived from.
pub const ISSUE_ENV: &str = "ISSUE";
/// Path of the file GitHub Actions sources into later steps.
pub const GITHUB_ENV_ENV: &str = "GITHUB_ENV";

/// Reads an environment variable, treating an empty value as unset.
pub(crate) fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Reads an environment variable that must be present.
pub(crate) fn require_var(name: &str) -> Result<String, ConfigError> {
    read_var(name).ok_or_else(|| ConfigError::missing(name))
}

/// Connection and identity settings for a single invocation.
#[derive(Clone)]
pub struct Settings {
    endpoint: String,
    token: String,
    author: Option<String>,
    repository: Option<String>,
    github_env: Option<PathBuf>,
}

impl Settings {
    /// Creates settings for the given Jira endpoint and token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if `endpoint` is not an absolute URL.
    pub fn new(endpoint: &str, token: String) -> Result<Self, ConfigError> {
        Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
            author: None,
            repository: None,
            github_env: None,
        })
    }

    /// Loads settings from the process environment.
    ///
    /// `JIRA_ENDPOINT` and `JIRA_AUTHORIZATION` are required. `AUTHOR`,
    /// `REPOSITORY` and `GITHUB_ENV` are only checked by the operations
    /// that use them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or the
    /// endpoint is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = require_var(JIRA_ENDPOINT_ENV)?;
        let token = require_var(JIRA_AUTHORIZATION_ENV)?;

        let mut settings = Self::new(&endpoint, token)?;
        settings.author = read_var(AUTHOR_ENV);
        settings.repository = read_var(REPOSITORY_ENV);
        settings.github_env = read_var(GITHUB_ENV_ENV).map(PathBuf::from);
        Ok(settings)
    }

    /// Sets the workflow author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the repository (`owner/name`).
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Sets the CI environment file path.
    pub fn with_github_env(mut self, path: impl Into<PathBuf>) -> Self {
        self.github_env = Some(path.into());
        self
    }

    /// Returns the Jira endpoint without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the workflow author.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if `AUTHOR` was not provided.
    pub fn author(&self) -> Result<&str, ConfigError> {
        self.author
            .as_deref()
            .ok_or_else(|| ConfigError::missing(AUTHOR_ENV))
    }

    /// Returns the repository name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if `REPOSITORY` was not provided.
    pub fn repository(&self) -> Result<&str, ConfigError> {
        self.repository
            .as_deref()
            .ok_or_else(|| ConfigError::missing(REPOSITORY_ENV))
    }

    /// Returns the CI environment file path, if one was provided.
    pub fn github_env(&self) -> Option<&Path> {
        self.github_env.as_deref()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("author", &self.author)
            .field("repository", &self.repository)
            .field("github_env", &self.github_env)
            .finish()
    }
}
