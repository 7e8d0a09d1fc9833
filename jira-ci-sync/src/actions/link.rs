//! Linking a bug to the tracked issue.

use super::{ActionError, SyncContext};
use crate::jira::IssueLinkRequest;
use crate::state::PipelineState;
use tracing::{info, info_span, Instrument};

/// Links `BUG_KEY` to `ISSUE_KEY` with the bug on the inward side, so with
/// the default `Blocks` type the bug blocks the issue.
///
/// Neither key is checked for existence; Jira reports unknown keys.
///
/// # Errors
///
/// Returns [`ActionError`] if either key is missing or Jira rejects the link.
pub async fn link_bug_to_issue(
    ctx: &SyncContext,
    state: &PipelineState,
    link_type: &str,
) -> Result<(), ActionError> {
    let bug_key = state.bug_key()?;
    let issue_key = state.issue_key()?;
    let span = info_span!(
        "link_bug_to_issue",
        bug_key = %bug_key,
        issue_key = %issue_key,
        link_type = %link_type
    );

    async {
        ctx.client
            .link_issues(&IssueLinkRequest::new(link_type, bug_key, issue_key))
            .await?;

        info!("Linked bug to issue");
        Ok(())
    }
    .instrument(span)
    .await
}
