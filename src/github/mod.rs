//! GitHub REST plumbing for posting acknowledgements.
//!
//! This module wraps Octocrab behind [`NotificationGateway`], keeps the
//! repository identity in typed wrappers, and maps API failures into
//! [`ActionError`] variants so callers never see Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod reaction;

pub use error::{ActionError, UNEXPECTED_ERROR_MESSAGE};
pub use gateway::{NotificationGateway, OctocrabGateway};
pub use locator::{
    CommentId, IssueNumber, PersonalAccessToken, RepositoryLocator, RepositoryName,
    RepositoryOwner,
};
pub use models::{PostedComment, PostedReaction};
pub use reaction::Reaction;

#[cfg(test)]
pub use gateway::MockNotificationGateway;
