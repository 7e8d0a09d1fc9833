//! Story and bug creation.

use super::{ActionError, SyncContext};
use crate::branch::BranchKeys;
use crate::jira::{CreateIssueRequest, CreatedIssue, IssueType};
use crate::state::{PipelineState, BUG_KEY_ENV};
use tracing::{info, info_span, Instrument};

/// Creates a story in the branch's project.
///
/// The branch keys are exported to the CI environment file before the
/// story is created. The new story's key is returned but not exported.
///
/// # Errors
///
/// Returns [`ActionError`] if `REPOSITORY` or `GITHUB_ENV` is missing, the
/// description fails to render, or Jira rejects the request.
pub async fn create_story(
    ctx: &SyncContext,
    keys: &BranchKeys,
    summary: &str,
) -> Result<CreatedIssue, ActionError> {
    let span = info_span!("create_story", project_key = %keys.project_key);

    async {
        let repository = ctx.settings.repository()?;
        let env = ctx.require_github_env()?;

        let description = ctx.renderer.render_description(
            &ctx.options.story_description,
            ctx.settings.author().ok(),
            repository,
        )?;

        keys.export(&env)?;

        let request =
            CreateIssueRequest::new(&keys.project_key, summary, description, IssueType::Story);
        let created = ctx.client.create_issue(&request).await?;

        info!(story_key = %created.key, "Created story");
        Ok(created)
    }
    .instrument(span)
    .await
}

/// Creates a bug in the project exported by an earlier step and exports
/// its key as `BUG_KEY`.
///
/// Nothing is written unless Jira accepted the bug and returned its key.
///
/// # Errors
///
/// Returns [`ActionError`] if `PROJECT_KEY`, `AUTHOR`, `REPOSITORY` or
/// `GITHUB_ENV` is missing, Jira rejects the request, or the response has
/// no issue key.
pub async fn create_bug(
    ctx: &SyncContext,
    state: &PipelineState,
    summary: &str,
) -> Result<CreatedIssue, ActionError> {
    let project_key = state.project_key()?;
    let span = info_span!("create_bug", project_key = %project_key);

    async {
        let author = ctx.settings.author()?;
        let repository = ctx.settings.repository()?;
        let env = ctx.require_github_env()?;

        let description = ctx.renderer.render_description(
            &ctx.options.bug_description,
            Some(author),
            repository,
        )?;

        let request = CreateIssueRequest::new(project_key, summary, description, IssueType::Bug);
        let created = ctx.client.create_issue(&request).await?;

        env.append(&[(BUG_KEY_ENV, created.key.as_str())])?;

        info!(bug_key = %created.key, "Created bug");
        Ok(created)
    }
    .instrument(span)
    .await
}
