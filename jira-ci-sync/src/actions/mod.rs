//! The Jira operations a workflow step can run.
//!
//! Each action makes a single Jira request. Keys it derives are appended
//! to the CI environment file so later steps can pick them up; keys derived
//! from the response are only written once the request succeeded.

mod comment;
mod error;
mod issues;
mod link;
mod priority;
mod transitions;

pub use comment::post_test_report;
pub use error::ActionError;
pub use issues::{create_bug, create_story};
pub use link::link_bug_to_issue;
pub use priority::set_bug_priority;
pub use transitions::{find_transition, lookup_transition, transition_issue};

use crate::config::{ConfigError, Settings, SyncOptions, GITHUB_ENV_ENV};
use crate::github_env::GithubEnv;
use crate::jira::{JiraClient, JiraError};
use crate::state::PipelineState;
use crate::templates::TemplateRenderer;

/// Everything an action needs besides its own inputs.
pub struct SyncContext {
    settings: Settings,
    options: SyncOptions,
    client: JiraClient,
    renderer: TemplateRenderer,
}

impl SyncContext {
    /// Builds the Jira client for `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError`] if the client cannot be constructed.
    pub fn new(settings: Settings, options: SyncOptions) -> Result<Self, JiraError> {
        let client = JiraClient::new(&settings)?;
        Ok(Self {
            settings,
            options,
            client,
            renderer: TemplateRenderer::new(),
        })
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the templates and defaults.
    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Returns the Jira client.
    pub fn client(&self) -> &JiraClient {
        &self.client
    }

    /// Returns the CI environment file, if configured.
    pub fn github_env(&self) -> Option<GithubEnv> {
        self.settings.github_env().map(GithubEnv::new)
    }

    /// Returns the CI environment file for actions that export keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if `GITHUB_ENV` is not configured.
    pub fn require_github_env(&self) -> Result<GithubEnv, ConfigError> {
        self.github_env()
            .ok_or_else(|| ConfigError::missing(GITHUB_ENV_ENV))
    }

    /// Resolves keys exported by earlier steps.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::GithubEnv`] if the environment file cannot be read.
    pub fn pipeline_state(&self) -> Result<PipelineState, ActionError> {
        Ok(PipelineState::resolve(self.github_env().as_ref())?)
    }
}
