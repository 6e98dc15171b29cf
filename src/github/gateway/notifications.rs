//! Octocrab implementation of the notification gateway.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::ActionError;
use crate::github::locator::{CommentId, IssueNumber, PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ApiComment, ApiReaction, CreateCommentRequest, CreateReactionRequest, PostedComment,
    PostedReaction,
};
use crate::github::reaction::Reaction;

use super::NotificationGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and repository.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidUrl` when the base URI cannot be parsed or
    /// `ActionError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, ActionError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }

    async fn post_reaction(
        &self,
        path: String,
        reaction: Reaction,
    ) -> Result<PostedReaction, ActionError> {
        let request = CreateReactionRequest { content: reaction };
        self.client
            .post::<_, ApiReaction>(path, Some(&request))
            .await
            .map(ApiReaction::into)
            .map_err(|error| map_octocrab_error("create reaction", &error))
    }
}

#[async_trait]
impl NotificationGateway for OctocrabGateway {
    async fn create_issue_comment(
        &self,
        locator: &RepositoryLocator,
        issue: IssueNumber,
        body: &str,
    ) -> Result<PostedComment, ActionError> {
        let request = CreateCommentRequest { body };
        self.client
            .post::<_, ApiComment>(locator.issue_comments_path(issue), Some(&request))
            .await
            .map(ApiComment::into)
            .map_err(|error| map_octocrab_error("create comment", &error))
    }

    async fn create_comment_reaction(
        &self,
        locator: &RepositoryLocator,
        comment: CommentId,
        reaction: Reaction,
    ) -> Result<PostedReaction, ActionError> {
        self.post_reaction(locator.comment_reactions_path(comment), reaction)
            .await
    }

    async fn create_issue_reaction(
        &self,
        locator: &RepositoryLocator,
        issue: IssueNumber,
        reaction: Reaction,
    ) -> Result<PostedReaction, ActionError> {
        self.post_reaction(locator.issue_reactions_path(issue), reaction)
            .await
    }
}
