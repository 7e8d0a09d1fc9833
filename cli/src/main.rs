//! CLI for jira-ci-sync.
//!
//! Each invocation runs one Jira action for the current workflow step.
//! Settings and keys exported by earlier steps come from the environment.

use clap::{Parser, Subcommand};
use jira_ci_sync::{Action, RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Jira CI Sync - Mirror GitHub Actions test outcomes into Jira.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the options file with message templates and defaults.
    #[arg(long, global = true, default_value = jira_ci_sync::config::DEFAULT_OPTIONS_PATH)]
    config: PathBuf,

    /// Action to run. Defaults to `comment`.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Comment the test report on the branch's issue.
    Comment,

    /// Create a story in the branch's project.
    CreateStory {
        /// Story summary.
        #[arg(long)]
        summary: String,
    },

    /// Create a bug in PROJECT_KEY and export BUG_KEY.
    CreateBug {
        /// Bug summary.
        #[arg(long)]
        summary: String,
    },

    /// Set the priority of BUG_KEY.
    SetPriority {
        /// Priority name. Defaults to the options file value ("Blocker").
        #[arg(long)]
        priority: Option<String>,
    },

    /// Link BUG_KEY to ISSUE_KEY.
    Link {
        /// Link type name. Defaults to the options file value ("Blocks").
        #[arg(long)]
        link_type: Option<String>,
    },

    /// Resolve a transition by name and export TRANSITION_ID.
    LookupTransition {
        /// Transition name, matched exactly.
        #[arg(long)]
        name: String,
    },

    /// Execute TRANSITION_ID on ISSUE_KEY.
    Transition,
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Comment => Action::PostTestReport,
            Command::CreateStory { summary } => Action::CreateStory { summary },
            Command::CreateBug { summary } => Action::CreateBug { summary },
            Command::SetPriority { priority } => Action::SetBugPriority { priority },
            Command::Link { link_type } => Action::LinkBugToIssue { link_type },
            Command::LookupTransition { name } => Action::LookupTransition { name },
            Command::Transition => Action::TransitionIssue,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Action failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with compact output, filtered by `RUST_LOG`
/// (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Maps the subcommand to an action; no subcommand posts the test report.
fn selected_action(command: Option<Command>) -> Action {
    command.map_or(Action::PostTestReport, Action::from)
}

async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let action = selected_action(args.command);
    let runner = Runner::new(RunnerConfig::new(args.config))?;
    runner.run(&action).await
}

fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Action: {}", summary.action);
    if let Some(issue_key) = &summary.issue_key {
        println!("  Issue: {issue_key}");
    }
    for (key, value) in &summary.exported {
        println!("  Exported: {key}={value}");
    }
}
