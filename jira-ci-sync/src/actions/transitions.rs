//! Workflow transitions.
//!
//! Moving an issue takes two invocations: [`lookup_transition`] resolves a
//! transition name to its id and exports it as `TRANSITION_ID`, then
//! [`transition_issue`] executes it. Whether a transition is legal is up to
//! Jira.

use super::{ActionError, SyncContext};
use crate::jira::{Transition, TransitionRequest};
use crate::state::{PipelineState, TRANSITION_ID_ENV};
use tracing::{debug, info, info_span, Instrument};

/// Returns the first transition whose name equals `name` exactly (case-sensitive).
#[must_use]
pub fn find_transition<'a>(transitions: &'a [Transition], name: &str) -> Option<&'a Transition> {
    transitions.iter().find(|transition| transition.name == name)
}

/// Looks up the transition called `name` on `ISSUE_KEY` and exports its id
/// as `TRANSITION_ID`.
///
/// Transitions are matched in listed order.
///
/// # Errors
///
/// Returns [`ActionError::TransitionNotFound`] if no transition has that
/// name, or another [`ActionError`] if `ISSUE_KEY`/`GITHUB_ENV` is missing
/// or the request fails.
pub async fn lookup_transition(
    ctx: &SyncContext,
    state: &PipelineState,
    name: &str,
) -> Result<Transition, ActionError> {
    let issue_key = state.issue_key()?;
    let span = info_span!("lookup_transition", issue_key = %issue_key, name = %name);

    async {
        let env = ctx.require_github_env()?;
        let list = ctx.client.transitions(issue_key).await?;
        debug!(count = list.transitions.len(), "Fetched transitions");

        let Some(transition) = find_transition(&list.transitions, name) else {
            return Err(ActionError::TransitionNotFound {
                issue_key: issue_key.to_string(),
                name: name.to_string(),
                available: list.transitions.iter().map(|t| t.name.clone()).collect(),
            });
        };

        env.append(&[(TRANSITION_ID_ENV, transition.id.as_str())])?;

        info!(transition_id = %transition.id, "Resolved transition");
        Ok(transition.clone())
    }
    .instrument(span)
    .await
}

/// Executes the transition exported as `TRANSITION_ID` on `ISSUE_KEY`.
///
/// # Errors
///
/// Returns [`ActionError`] if either key is missing or Jira rejects the transition.
pub async fn transition_issue(ctx: &SyncContext, state: &PipelineState) -> Result<(), ActionError> {
    let issue_key = state.issue_key()?;
    let transition_id = state.transition_id()?;
    let span = info_span!(
        "transition_issue",
        issue_key = %issue_key,
        transition_id = %transition_id
    );

    async {
        ctx.client
            .transition_issue(issue_key, &TransitionRequest::new(transition_id))
            .await?;

        info!("Transitioned issue");
        Ok(())
    }
    .instrument(span)
    .await
}
