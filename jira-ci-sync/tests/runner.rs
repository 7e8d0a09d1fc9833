//! Runs actions the way the CLI does: inputs from the environment, exports
//! to the file named by `GITHUB_ENV`.

use jira_ci_sync::{Action, ConfigError, Runner, RunnerConfig, RunnerError, RunSummary};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

const STEP_VARS: [&str; 9] = [
    "ISSUE",
    "PROJECT_KEY",
    "ISSUE_KEY",
    "BUG_KEY",
    "TRANSITION_ID",
    "TOTAL_TESTS",
    "PASSED_TESTS",
    "SKIPPED_TESTS",
    "FAILED_TESTS",
];

/// Runs `action` with the Jira settings pointing at `server` and the step
/// variables in `vars`; every other step variable is unset.
fn run_step(
    server: &ServerGuard,
    temp: &TempDir,
    vars: &[(&str, &str)],
    action: Action,
) -> Result<RunSummary, RunnerError> {
    let mut env: Vec<(&str, Option<String>)> = vec![
        ("JIRA_ENDPOINT", Some(server.url())),
        ("JIRA_AUTHORIZATION", Some("test-token".to_string())),
        ("AUTHOR", Some("octocat".to_string())),
        ("REPOSITORY", Some("acme/widgets".to_string())),
        ("GITHUB_ENV", Some(env_path(temp).display().to_string())),
    ];
    for name in STEP_VARS {
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string());
        env.push((name, value));
    }

    let config = RunnerConfig::new(temp.path().join("absent.toml"));
    temp_env::with_vars(env, || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let runner = Runner::new(config)?;
            runner.run(&action).await
        })
    })
}

fn env_path(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join("github_env")
}

fn read_env(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn comment_exports_keys_from_issue_branch() {
    let mut server = Server::new();
    let temp = TempDir::new().unwrap();

    let mock = server
        .mock("POST", "/issue/PROJ-42/comment")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(json!({"public": true})))
        .with_status(201)
        .create();

    let summary = run_step(
        &server,
        &temp,
        &[("ISSUE", "feature/PROJ-42"), ("TOTAL_TESTS", "3")],
        Action::PostTestReport,
    )
    .unwrap();

    mock.assert();
    assert_eq!(summary.issue_key.as_deref(), Some("PROJ-42"));
    assert_eq!(
        read_env(&env_path(&temp)),
        "PROJECT_KEY=PROJ\nISSUE_KEY=PROJ-42\n"
    );
}

#[test]
fn invalid_branch_fails_before_any_write_or_request() {
    let mut server = Server::new();
    let temp = TempDir::new().unwrap();

    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create();

    let result = run_step(
        &server,
        &temp,
        &[("ISSUE", "PROJ42")],
        Action::PostTestReport,
    );

    assert!(matches!(
        result,
        Err(RunnerError::Config(ConfigError::InvalidBranch { .. }))
    ));
    assert!(!env_path(&temp).exists());
    mock.assert();
}

#[test]
fn set_priority_defaults_to_blocker() {
    let mut server = Server::new();
    let temp = TempDir::new().unwrap();

    let mock = server
        .mock("PUT", "/issue/PROJ-9")
        .match_body(Matcher::Json(json!({"fields": {"priority": {"name": "Blocker"}}})))
        .with_status(204)
        .create();

    let summary = run_step(
        &server,
        &temp,
        &[("BUG_KEY", "PROJ-9")],
        Action::SetBugPriority { priority: None },
    )
    .unwrap();

    mock.assert();
    assert_eq!(summary.issue_key.as_deref(), Some("PROJ-9"));
}

#[test]
fn link_defaults_to_blocks() {
    let mut server = Server::new();
    let temp = TempDir::new().unwrap();

    let mock = server
        .mock("POST", "/issueLink")
        .match_body(Matcher::Json(json!({
            "type": {"name": "Blocks"},
            "inwardIssue": {"key": "PROJ-9"},
            "outwardIssue": {"key": "PROJ-42"}
        })))
        .with_status(201)
        .create();

    run_step(
        &server,
        &temp,
        &[("BUG_KEY", "PROJ-9"), ("ISSUE_KEY", "PROJ-42")],
        Action::LinkBugToIssue { link_type: None },
    )
    .unwrap();

    mock.assert();
}

#[test]
fn create_bug_reads_project_key_from_env_file() {
    let mut server = Server::new();
    let temp = TempDir::new().unwrap();
    std::fs::write(env_path(&temp), "PROJECT_KEY=PROJ\nISSUE_KEY=PROJ-42\n").unwrap();

    let mock = server
        .mock("POST", "/issue")
        .match_body(Matcher::PartialJson(json!({
            "fields": {"project": {"key": "PROJ"}, "issuetype": {"name": "Bug"}}
        })))
        .with_status(201)
        .with_body(r#"{"id": "10009", "key": "PROJ-9"}"#)
        .create();

    let summary = run_step(
        &server,
        &temp,
        &[],
        Action::CreateBug {
            summary: "Tests failed".to_string(),
        },
    )
    .unwrap();

    mock.assert();
    assert_eq!(
        summary.exported,
        vec![("BUG_KEY".to_string(), "PROJ-9".to_string())]
    );
    assert_eq!(
        read_env(&env_path(&temp)),
        "PROJECT_KEY=PROJ\nISSUE_KEY=PROJ-42\nBUG_KEY=PROJ-9\n"
    );
}

#[test]
fn lookup_transition_reads_issue_key_from_env_file() {
    let mut server = Server::new();
    let temp = TempDir::new().unwrap();
    std::fs::write(env_path(&temp), "ISSUE_KEY=PROJ-42\n").unwrap();

    let mock = server
        .mock("GET", "/issue/PROJ-42/transitions")
        .with_status(200)
        .with_body(r#"{"transitions": [{"id": "2", "name": "Open"}, {"id": "31", "name": "Done"}]}"#)
        .create();

    run_step(
        &server,
        &temp,
        &[],
        Action::LookupTransition {
            name: "Done".to_string(),
        },
    )
    .unwrap();

    mock.assert();
    assert_eq!(
        read_env(&env_path(&temp)),
        "ISSUE_KEY=PROJ-42\nTRANSITION_ID=31\n"
    );
}
