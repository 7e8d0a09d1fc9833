//! Derives Jira keys from the branch a workflow runs on.
//!
//! Branches are expected to look like `feature/PROJ-123`: the segment after
//! the first `/` is the issue key and everything before its first `-` is the
//! project key.

use crate::config::{require_var, ConfigError, ISSUE_ENV};
use crate::github_env::{GithubEnv, GithubEnvError};
use crate::state::{ISSUE_KEY_ENV, PROJECT_KEY_ENV};
use serde::Serialize;
use tracing::info;

/// Project and issue keys derived from a branch name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchKeys {
    /// Project key, e.g. `PROJ`.
    pub project_key: String,

    /// Issue key, e.g. `PROJ-123`.
    pub issue_key: String,
}

impl BranchKeys {
    /// Parses `prefix/PROJECT-123` into its keys.
    ///
    /// Only the segment between the first and second `/` is used, and it is
    /// kept whole: `feature/ABC-123-extra` yields the issue key
    /// `ABC-123-extra` with project key `ABC`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBranch`] if the branch has no `/` or no
    /// `-`, or if the segment after the first `/` is empty.
    pub fn parse(branch: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidBranch {
            branch: branch.to_string(),
        };

        if !branch.contains('/') || !branch.contains('-') {
            return Err(invalid());
        }

        let issue_key = branch.split('/').nth(1).unwrap_or_default();
        if issue_key.is_empty() {
            return Err(invalid());
        }

        let project_key = issue_key.split('-').next().unwrap_or_default();

        Ok(Self {
            project_key: project_key.to_string(),
            issue_key: issue_key.to_string(),
        })
    }

    /// Appends `PROJECT_KEY` and `ISSUE_KEY` to the CI environment file.
    ///
    /// # Errors
    ///
    /// Returns [`GithubEnvError`] if the file cannot be written.
    pub fn export(&self, env: &GithubEnv) -> Result<(), GithubEnvError> {
        env.append(&[
            (PROJECT_KEY_ENV, self.project_key.as_str()),
            (ISSUE_KEY_ENV, self.issue_key.as_str()),
        ])
    }
}

/// Reads the `ISSUE` branch name and parses its keys.
///
/// # Errors
///
/// Returns [`ConfigError`] if `ISSUE` is unset or malformed.
pub fn branch_keys_from_env() -> Result<BranchKeys, ConfigError> {
    let branch = require_var(ISSUE_ENV)?;
    let keys = BranchKeys::parse(&branch)?;
    info!(
        branch = %branch,
        project_key = %keys.project_key,
        issue_key = %keys.issue_key,
        "Extracted keys from branch"
    );
    Ok(keys)
}
