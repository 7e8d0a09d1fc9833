//! Action error types.

use crate::config::ConfigError;
use crate::github_env::GithubEnvError;
use crate::jira::JiraError;
use crate::templates::TemplateError;
use thiserror::Error;

/// Errors that can occur while running a Jira action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Missing or malformed input.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The CI environment file could not be read or written.
    #[error(transparent)]
    GithubEnv(#[from] GithubEnvError),

    /// A message template failed to render.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The Jira request failed.
    #[error(transparent)]
    Jira(#[from] JiraError),

    /// No transition with the requested name is available.
    #[error("Transition '{name}' not found on {issue_key} (available: {})", available.join(", "))]
    TransitionNotFound {
        issue_key: String,
        name: String,
        available: Vec<String>,
    },
}
