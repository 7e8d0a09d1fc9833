//! Runner error types.

/// Errors that can occur while running an action.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Jira client initialization errors.
    #[error(transparent)]
    Client(#[from] crate::jira::JiraError),

    /// Failures of the action itself.
    #[error(transparent)]
    Action(#[from] crate::actions::ActionError),
}
