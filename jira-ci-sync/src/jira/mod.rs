//! Minimal Jira REST client covering the calls this tool makes.

mod client;
mod error;
mod types;

pub use client::JiraClient;
pub use error::JiraError;
pub use types::{
    CommentRequest, CreateIssueRequest, CreatedIssue, IdRef, IssueLinkRequest, IssueType, KeyRef,
    NameRef, NewIssueFields, PriorityFields, PriorityUpdateRequest, Transition, TransitionList,
    TransitionRequest,
};
