//! Gateways for posting acknowledgements through Octocrab.
//!
//! The trait lets the notifier be exercised against mocks while the Octocrab
//! implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod notifications;

#[cfg(test)]
mod tests;

pub use notifications::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::ActionError;
use crate::github::locator::{CommentId, IssueNumber, RepositoryLocator};
use crate::github::models::{PostedComment, PostedReaction};
use crate::github::reaction::Reaction;

/// Gateway that can write comments and reactions to a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Create a comment on an issue or pull request.
    async fn create_issue_comment(
        &self,
        locator: &RepositoryLocator,
        issue: IssueNumber,
        body: &str,
    ) -> Result<PostedComment, ActionError>;

    /// Attach a reaction to an issue comment.
    async fn create_comment_reaction(
        &self,
        locator: &RepositoryLocator,
        comment: CommentId,
        reaction: Reaction,
    ) -> Result<PostedReaction, ActionError>;

    /// Attach a reaction to an issue or pull request.
    async fn create_issue_reaction(
        &self,
        locator: &RepositoryLocator,
        issue: IssueNumber,
        reaction: Reaction,
    ) -> Result<PostedReaction, ActionError>;
}
