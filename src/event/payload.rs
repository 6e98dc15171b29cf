//! Deserialisation targets for the two webhook payloads we handle.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssueCommentEvent {
    pub(super) comment: ApiEventComment,
    pub(super) issue: ApiEventIssue,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiEventComment {
    pub(super) id: u64,
    pub(super) body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiEventIssue {
    pub(super) number: u64,
    /// Present (as an object of links) only when the issue is a pull request.
    #[serde(default)]
    pub(super) pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequestEvent {
    pub(super) pull_request: ApiEventPullRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiEventPullRequest {
    pub(super) number: u64,
    pub(super) body: Option<String>,
}
