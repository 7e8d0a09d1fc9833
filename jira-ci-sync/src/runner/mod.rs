//! Dispatches a single action for one workflow step.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::actions::{
    create_bug, create_story, link_bug_to_issue, lookup_transition, post_test_report,
    set_bug_priority, transition_issue, SyncContext,
};
use crate::branch::branch_keys_from_env;
use crate::config::{Settings, SyncOptions};
use crate::report::TestTally;
use crate::state::{BUG_KEY_ENV, ISSUE_KEY_ENV, PROJECT_KEY_ENV, TRANSITION_ID_ENV};
use crate::summary::RunSummary;
use tracing::info;

/// An operation a workflow step can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Comment the test report on the branch's issue.
    PostTestReport,
    /// Create a story in the branch's project.
    CreateStory { summary: String },
    /// Create a bug and export `BUG_KEY`.
    CreateBug { summary: String },
    /// Set the priority of `BUG_KEY`; `None` uses the configured default.
    SetBugPriority { priority: Option<String> },
    /// Link `BUG_KEY` to `ISSUE_KEY`; `None` uses the configured link type.
    LinkBugToIssue { link_type: Option<String> },
    /// Resolve a transition name and export `TRANSITION_ID`.
    LookupTransition { name: String },
    /// Execute `TRANSITION_ID` on `ISSUE_KEY`.
    TransitionIssue,
}

impl Action {
    /// Returns a short name for logs and summaries.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PostTestReport => "comment",
            Self::CreateStory { .. } => "create-story",
            Self::CreateBug { .. } => "create-bug",
            Self::SetBugPriority { .. } => "set-priority",
            Self::LinkBugToIssue { .. } => "link",
            Self::LookupTransition { .. } => "lookup-transition",
            Self::TransitionIssue => "transition",
        }
    }
}

/// Runs actions against the Jira instance configured in the environment.
pub struct Runner {
    context: SyncContext,
}

impl Runner {
    /// Builds a runner from the process environment and the options file.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if required settings are missing or invalid.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let settings = Settings::from_env()?;
        let options = SyncOptions::load(config.options_path())?;
        Self::with_settings(settings, options)
    }

    /// Builds a runner from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Client`] if the Jira client cannot be built.
    pub fn with_settings(settings: Settings, options: SyncOptions) -> Result<Self, RunnerError> {
        Ok(Self {
            context: SyncContext::new(settings, options)?,
        })
    }

    /// Runs one action, reading its inputs from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on the first failure; nothing is rolled back.
    pub async fn run(&self, action: &Action) -> Result<RunSummary, RunnerError> {
        let ctx = &self.context;
        let mut summary = RunSummary::new(action.name());
        info!(action = action.name(), endpoint = %ctx.client().endpoint(), "Running action");

        match action {
            Action::PostTestReport => {
                let keys = branch_keys_from_env()?;
                post_test_report(ctx, &keys, &TestTally::from_env()).await?;
                summary.issue_key = Some(keys.issue_key.clone());
                summary.export(PROJECT_KEY_ENV, &keys.project_key);
                summary.export(ISSUE_KEY_ENV, &keys.issue_key);
            }
            Action::CreateStory { summary: title } => {
                let keys = branch_keys_from_env()?;
                let story = create_story(ctx, &keys, title).await?;
                summary.issue_key = Some(story.key);
                summary.export(PROJECT_KEY_ENV, &keys.project_key);
                summary.export(ISSUE_KEY_ENV, &keys.issue_key);
            }
            Action::CreateBug { summary: title } => {
                let state = ctx.pipeline_state()?;
                let bug = create_bug(ctx, &state, title).await?;
                summary.export(BUG_KEY_ENV, &bug.key);
                summary.issue_key = Some(bug.key);
            }
            Action::SetBugPriority { priority } => {
                let state = ctx.pipeline_state()?;
                let priority = priority.as_deref().unwrap_or(&ctx.options().priority);
                set_bug_priority(ctx, &state, priority).await?;
                summary.issue_key = state.bug_key;
            }
            Action::LinkBugToIssue { link_type } => {
                let state = ctx.pipeline_state()?;
                let link_type = link_type.as_deref().unwrap_or(&ctx.options().link_type);
                link_bug_to_issue(ctx, &state, link_type).await?;
                summary.issue_key = state.issue_key;
            }
            Action::LookupTransition { name } => {
                let state = ctx.pipeline_state()?;
                let transition = lookup_transition(ctx, &state, name).await?;
                summary.export(TRANSITION_ID_ENV, &transition.id);
                summary.issue_key = state.issue_key;
            }
            Action::TransitionIssue => {
                let state = ctx.pipeline_state()?;
                transition_issue(ctx, &state).await?;
                summary.issue_key = state.issue_key;
            }
        }

        Ok(summary)
    }
}
