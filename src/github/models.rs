//! Request and response bodies for the notification endpoints.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types.

use serde::{Deserialize, Serialize};

use super::reaction::Reaction;

/// Acknowledgement comment created on an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    /// Comment identifier.
    pub id: u64,
    /// HTML URL of the comment, if GitHub returned one.
    pub html_url: Option<String>,
}

/// Reaction created on an issue or issue comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedReaction {
    /// Reaction identifier.
    pub id: u64,
    /// Content token echoed back by GitHub.
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct CreateCommentRequest<'body> {
    pub(super) body: &'body str,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct CreateReactionRequest {
    pub(super) content: Reaction,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    pub(super) id: u64,
    pub(super) html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiReaction {
    pub(super) id: u64,
    pub(super) content: Option<String>,
}

impl From<ApiComment> for PostedComment {
    fn from(value: ApiComment) -> Self {
        Self {
            id: value.id,
            html_url: value.html_url,
        }
    }
}

impl From<ApiReaction> for PostedReaction {
    fn from(value: ApiReaction) -> Self {
        Self {
            id: value.id,
            content: value.content,
        }
    }
}
