//! Identity wrappers and API path construction for the target repository.

use url::Url;

use super::error::ActionError;

const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ActionError> {
        if value.is_empty() {
            return Err(invalid_slug(value));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ActionError> {
        if value.is_empty() {
            return Err(invalid_slug(value));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Issue or pull request number. GitHub numbers both from one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Wraps a positive issue number.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidEvent`] for zero.
    pub fn new(value: u64) -> Result<Self, ActionError> {
        if value == 0 {
            return Err(ActionError::InvalidEvent {
                message: "issue number must be a positive integer".to_owned(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Issue comment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentId(u64);

impl CommentId {
    /// Wraps a comment identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ActionError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ActionError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

fn invalid_slug(value: &str) -> ActionError {
    ActionError::InvalidEvent {
        message: format!("repository must be in the form owner/name, got {value:?}"),
    }
}

/// Target repository together with the API base used to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for `owner/name` on public GitHub.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidEvent` when owner or name is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, ActionError> {
        Self::with_api_base(owner, repo, DEFAULT_API_BASE)
    }

    /// Creates a locator for `owner/name` reached through `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidEvent` when owner or name is empty and
    /// `ActionError::InvalidUrl` when `api_base` cannot be parsed.
    pub fn with_api_base(owner: &str, repo: &str, api_base: &str) -> Result<Self, ActionError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let parsed_base =
            Url::parse(api_base).map_err(|error| ActionError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base: parsed_base,
            owner: validated_owner,
            repository,
        })
    }

    /// Parses a `GITHUB_REPOSITORY` style slug (`owner/name`).
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidEvent` when the slug does not have exactly
    /// two non-empty segments, and `ActionError::InvalidUrl` for a bad
    /// `api_base`.
    pub fn from_slug(slug: &str, api_base: &str) -> Result<Self, ActionError> {
        let mut segments = slug.split('/');
        let owner = segments.next().ok_or_else(|| invalid_slug(slug))?;
        let repo = segments.next().ok_or_else(|| invalid_slug(slug))?;
        if segments.next().is_some() || owner.is_empty() || repo.is_empty() {
            return Err(invalid_slug(slug));
        }
        Self::with_api_base(owner, repo, api_base)
    }

    /// API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    pub(crate) fn issue_comments_path(&self, issue: IssueNumber) -> String {
        format!(
            "/repos/{}/{}/issues/{}/comments",
            self.owner.as_str(),
            self.repository.as_str(),
            issue.get()
        )
    }

    pub(crate) fn issue_reactions_path(&self, issue: IssueNumber) -> String {
        format!(
            "/repos/{}/{}/issues/{}/reactions",
            self.owner.as_str(),
            self.repository.as_str(),
            issue.get()
        )
    }

    pub(crate) fn comment_reactions_path(&self, comment: CommentId) -> String {
        format!(
            "/repos/{}/{}/issues/comments/{}/reactions",
            self.owner.as_str(),
            self.repository.as_str(),
            comment.get()
        )
    }
}
