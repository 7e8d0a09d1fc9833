//! Request and response bodies for the Jira REST API.

use serde::{Deserialize, Serialize};

/// Reference to an entity by name, e.g. `{"name": "Bug"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    pub name: String,
}

impl NameRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reference to an entity by key, e.g. `{"key": "PROJ-1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRef {
    pub key: String,
}

impl KeyRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Issue types this tool creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    Story,
    Bug,
}

impl IssueType {
    /// Returns the Jira issue type name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Story => "Story",
            Self::Bug => "Bug",
        }
    }
}

/// Body of `POST /issue/{key}/comment`.
#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest {
    pub body: String,
    pub public: bool,
}

impl CommentRequest {
    /// Creates a publicly visible comment.
    pub fn public(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            public: true,
        }
    }
}

/// Body of `POST /issue`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    pub fields: NewIssueFields,
}

/// Fields of a new issue.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssueFields {
    pub project: KeyRef,
    pub summary: String,
    pub description: String,
    #[serde(rename = "issuetype")]
    pub issue_type: NameRef,
}

impl CreateIssueRequest {
    pub fn new(
        project_key: &str,
        summary: impl Into<String>,
        description: impl Into<String>,
        issue_type: IssueType,
    ) -> Self {
        Self {
            fields: NewIssueFields {
                project: KeyRef::new(project_key),
                summary: summary.into(),
                description: description.into(),
                issue_type: NameRef::new(issue_type.as_str()),
            },
        }
    }
}

/// Response of `POST /issue`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "self", default)]
    pub url: Option<String>,
}

/// Body of `PUT /issue/{key}` that only changes the priority.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityUpdateRequest {
    pub fields: PriorityFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityFields {
    pub priority: NameRef,
}

impl PriorityUpdateRequest {
    pub fn new(priority: impl Into<String>) -> Self {
        Self {
            fields: PriorityFields {
                priority: NameRef::new(priority),
            },
        }
    }
}

/// Body of `POST /issueLink`.
///
/// Jira reads this as "inward issue {link type} outward issue", so a bug
/// blocking a story is the inward side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkRequest {
    #[serde(rename = "type")]
    pub link_type: NameRef,
    pub inward_issue: KeyRef,
    pub outward_issue: KeyRef,
}

impl IssueLinkRequest {
    pub fn new(link_type: &str, inward: &str, outward: &str) -> Self {
        Self {
            link_type: NameRef::new(link_type),
            inward_issue: KeyRef::new(inward),
            outward_issue: KeyRef::new(outward),
        }
    }
}

/// Response of `GET /issue/{key}/transitions`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionList {
    pub transitions: Vec<Transition>,
}

/// A workflow transition available on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
}

/// Body of `POST /issue/{key}/transitions`.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRequest {
    pub transition: IdRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdRef {
    pub id: String,
}

impl TransitionRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            transition: IdRef { id: id.into() },
        }
    }
}
