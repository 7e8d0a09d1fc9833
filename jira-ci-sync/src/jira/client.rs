//! Jira HTTP client.

use super::error::JiraError;
use super::types::{
    CommentRequest, CreateIssueRequest, CreatedIssue, IssueLinkRequest, PriorityUpdateRequest,
    TransitionList, TransitionRequest,
};
use crate::config::Settings;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Authenticated client for a single Jira endpoint.
///
/// Requests are sent once: there is no retry and no timeout.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: Client,
    endpoint: String,
}

impl JiraClient {
    /// Builds a client that sends `Authorization: Bearer <token>` with every request.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError`] if the token is not a valid header value or the
    /// HTTP client cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self, JiraError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", settings.token()))
            .map_err(|_| JiraError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            endpoint: settings.endpoint().to_string(),
        })
    }

    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Adds a comment to an issue.
    pub async fn add_comment(
        &self,
        issue_key: &str,
        comment: &CommentRequest,
    ) -> Result<(), JiraError> {
        let path = format!("/issue/{issue_key}/comment");
        self.send_json(Method::POST, &path, comment).await?;
        Ok(())
    }

    /// Creates an issue and returns its key.
    pub async fn create_issue(
        &self,
        request: &CreateIssueRequest,
    ) -> Result<CreatedIssue, JiraError> {
        let response = self.send_json(Method::POST, "/issue", request).await?;
        decode(response).await
    }

    /// Sets the priority of an issue.
    pub async fn update_priority(
        &self,
        issue_key: &str,
        request: &PriorityUpdateRequest,
    ) -> Result<(), JiraError> {
        let path = format!("/issue/{issue_key}");
        self.send_json(Method::PUT, &path, request).await?;
        Ok(())
    }

    /// Links two issues.
    pub async fn link_issues(&self, request: &IssueLinkRequest) -> Result<(), JiraError> {
        self.send_json(Method::POST, "/issueLink", request).await?;
        Ok(())
    }

    /// Lists the transitions currently available on an issue.
    pub async fn transitions(&self, issue_key: &str) -> Result<TransitionList, JiraError> {
        let path = format!("/issue/{issue_key}/transitions");
        let response = self.send(Method::GET, &path, |request| request).await?;
        decode(response).await
    }

    /// Moves an issue through a transition.
    pub async fn transition_issue(
        &self,
        issue_key: &str,
        request: &TransitionRequest,
    ) -> Result<(), JiraError> {
        let path = format!("/issue/{issue_key}/transitions");
        self.send_json(Method::POST, &path, request).await?;
        Ok(())
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> Result<Response, JiraError> {
        self.send(method, path, |request| request.json(body)).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, JiraError> {
        let url = format!("{}{path}", self.endpoint);
        debug!(%method, url = %url, "Sending Jira request");

        let response = build(self.http.request(method.clone(), &url)).send().await?;
        let status = response.status();
        debug!(%method, url = %url, status = status.as_u16(), "Jira responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JiraError::Status {
                method,
                url,
                status,
                body,
            });
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, JiraError> {
    let url = response.url().to_string();
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|source| JiraError::Decode { url, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_token_with_newline() {
        let settings = Settings::new("https://jira.example.com", "bad\ntoken".to_string()).unwrap();
        assert!(matches!(
            JiraClient::new(&settings),
            Err(JiraError::InvalidToken)
        ));
    }

    #[test]
    fn keeps_endpoint_without_trailing_slash() {
        let settings = Settings::new("https://jira.example.com/rest/api/2/", "t".to_string()).unwrap();
        let client = JiraClient::new(&settings).unwrap();
        assert_eq!(client.endpoint(), "https://jira.example.com/rest/api/2");
    }
}
