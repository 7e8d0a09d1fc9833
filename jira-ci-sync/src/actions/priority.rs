//! Bug priority.

use super::{ActionError, SyncContext};
use crate::jira::PriorityUpdateRequest;
use crate::state::PipelineState;
use tracing::{info, info_span, Instrument};

/// Sets the priority of the bug exported as `BUG_KEY`.
///
/// # Errors
///
/// Returns [`ActionError`] if `BUG_KEY` is missing or Jira rejects the update.
pub async fn set_bug_priority(
    ctx: &SyncContext,
    state: &PipelineState,
    priority: &str,
) -> Result<(), ActionError> {
    let bug_key = state.bug_key()?;
    let span = info_span!("set_bug_priority", bug_key = %bug_key, priority = %priority);

    async {
        ctx.client
            .update_priority(bug_key, &PriorityUpdateRequest::new(priority))
            .await?;

        info!("Updated bug priority");
        Ok(())
    }
    .instrument(span)
    .await
}
