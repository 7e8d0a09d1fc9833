#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod actions;
pub mod branch;
pub mod config;
pub mod github_env;
pub mod jira;
pub mod report;
pub mod runner;
pub mod state;
pub mod summary;
pub mod templates;

pub use actions::{
    create_bug, create_story, find_transition, link_bug_to_issue, lookup_transition,
    post_test_report, set_bug_priority, transition_issue, ActionError, SyncContext,
};
pub use branch::{branch_keys_from_env, BranchKeys};
pub use config::{ConfigError, Settings, SyncOptions};
pub use github_env::{GithubEnv, GithubEnvError};
pub use jira::{JiraClient, JiraError};
pub use report::TestTally;
pub use runner::{Action, Runner, RunnerConfig, RunnerError};
pub use state::PipelineState;
pub use summary::RunSummary;
pub use templates::{TemplateError, TemplateRenderer};
