//! Keys handed from one workflow step to the next.

use crate::config::{read_var, ConfigError};
use crate::github_env::{GithubEnv, GithubEnvError};
use std::collections::BTreeMap;
use tracing::debug;

/// Project key derived from the branch.
pub const PROJECT_KEY_ENV: &str = "PROJECT_KEY";
/// Tracked issue key derived from the branch.
pub const ISSUE_KEY_ENV: &str = "ISSUE_KEY";
/// Key of the bug created for failing tests.
pub const BUG_KEY_ENV: &str = "BUG_KEY";
/// Id of the transition resolved by name.
pub const TRANSITION_ID_ENV: &str = "TRANSITION_ID";

/// Keys exported by earlier steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineState {
    pub project_key: Option<String>,
    pub issue_key: Option<String>,
    pub bug_key: Option<String>,
    pub transition_id: Option<String>,
}

impl PipelineState {
    /// Reads the keys from the process environment.
    pub fn from_env() -> Self {
        Self {
            project_key: read_var(PROJECT_KEY_ENV),
            issue_key: read_var(ISSUE_KEY_ENV),
            bug_key: read_var(BUG_KEY_ENV),
            transition_id: read_var(TRANSITION_ID_ENV),
        }
    }

    /// Reads the keys from the process environment, then overlays anything
    /// already appended to `env` during the current step.
    ///
    /// GitHub only sources the file between steps, so without the overlay a
    /// second invocation in the same step would not see the first one's keys.
    ///
    /// # Errors
    ///
    /// Returns [`GithubEnvError`] if the file exists but cannot be read.
    pub fn resolve(env: Option<&GithubEnv>) -> Result<Self, GithubEnvError> {
        let mut state = Self::from_env();
        if let Some(env) = env {
            state.overlay(&env.load()?);
        }
        debug!(?state, "Resolved pipeline state");
        Ok(state)
    }

    fn overlay(&mut self, entries: &BTreeMap<String, String>) {
        let fields = [
            (PROJECT_KEY_ENV, &mut self.project_key),
            (ISSUE_KEY_ENV, &mut self.issue_key),
            (BUG_KEY_ENV, &mut self.bug_key),
            (TRANSITION_ID_ENV, &mut self.transition_id),
        ];
        for (name, field) in fields {
            if let Some(value) = entries.get(name).filter(|v| !v.is_empty()) {
                *field = Some(value.clone());
            }
        }
    }

    /// Returns the project key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if no earlier step exported it.
    pub fn project_key(&self) -> Result<&str, ConfigError> {
        required(&self.project_key, PROJECT_KEY_ENV)
    }

    /// Returns the tracked issue key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if no earlier step exported it.
    pub fn issue_key(&self) -> Result<&str, ConfigError> {
        required(&self.issue_key, ISSUE_KEY_ENV)
    }

    /// Returns the bug key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if no earlier step exported it.
    pub fn bug_key(&self) -> Result<&str, ConfigError> {
        required(&self.bug_key, BUG_KEY_ENV)
    }

    /// Returns the transition id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if no earlier step exported it.
    pub fn transition_id(&self) -> Result<&str, ConfigError> {
        required(&self.transition_id, TRANSITION_ID_ENV)
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, ConfigError> {
    value.as_deref().ok_or_else(|| ConfigError::missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEYS: [&str; 4] = [PROJECT_KEY_ENV, ISSUE_KEY_ENV, BUG_KEY_ENV, TRANSITION_ID_ENV];

    #[test]
    fn reads_keys_from_process_environment() {
        temp_env::with_vars(
            [
                (PROJECT_KEY_ENV, Some("PROJ")),
                (ISSUE_KEY_ENV, Some("PROJ-1")),
                (BUG_KEY_ENV, None),
                (TRANSITION_ID_ENV, Some("31")),
            ],
            || {
                let state = PipelineState::from_env();
                assert_eq!(state.project_key().unwrap(), "PROJ");
                assert_eq!(state.issue_key().unwrap(), "PROJ-1");
                assert_eq!(state.transition_id().unwrap(), "31");
                assert!(matches!(
                    state.bug_key(),
                    Err(ConfigError::MissingVar { ref name }) if name == BUG_KEY_ENV
                ));
            },
        );
    }

    #[test]
    fn file_entries_shadow_process_environment() {
        let temp = TempDir::new().unwrap();
        let env = GithubEnv::new(temp.path().join("env.txt"));
        env.append(&[(BUG_KEY_ENV, "PROJ-9")]).unwrap();

        temp_env::with_vars(
            [
                (PROJECT_KEY_ENV, Some("PROJ")),
                (ISSUE_KEY_ENV, None),
                (BUG_KEY_ENV, Some("PROJ-3")),
                (TRANSITION_ID_ENV, None),
            ],
            || {
                let state = PipelineState::resolve(Some(&env)).unwrap();
                assert_eq!(state.project_key.as_deref(), Some("PROJ"));
                assert_eq!(state.bug_key.as_deref(), Some("PROJ-9"));
                assert_eq!(state.issue_key, None);
            },
        );
    }

    #[test]
    fn resolves_without_environment_file() {
        temp_env::with_vars_unset(KEYS, || {
            let state = PipelineState::resolve(None).unwrap();
            assert_eq!(state, PipelineState::default());
        });
    }
}
