//! Test report comments.

use super::{ActionError, SyncContext};
use crate::branch::BranchKeys;
use crate::jira::CommentRequest;
use crate::report::TestTally;
use tracing::{info, info_span, Instrument};

/// Posts the test report table as a public comment on the branch's issue.
///
/// The branch keys are exported to the CI environment file before the
/// comment is sent. Posting is not idempotent: running twice leaves two
/// comments.
///
/// # Errors
///
/// Returns [`ActionError`] if `AUTHOR`, `REPOSITORY` or `GITHUB_ENV` is
/// missing, the template fails to render, or Jira rejects the request.
pub async fn post_test_report(
    ctx: &SyncContext,
    keys: &BranchKeys,
    tally: &TestTally,
) -> Result<(), ActionError> {
    let span = info_span!("post_test_report", issue_key = %keys.issue_key);

    async {
        let author = ctx.settings.author()?;
        let repository = ctx.settings.repository()?;
        let env = ctx.require_github_env()?;

        let body = ctx.renderer.render_comment(
            &ctx.options.comment_template,
            author,
            repository,
            &tally.to_table(),
        )?;

        keys.export(&env)?;

        ctx.client
            .add_comment(&keys.issue_key, &CommentRequest::public(body))
            .await?;

        info!("Posted test report");
        Ok(())
    }
    .instrument(span)
    .await
}
