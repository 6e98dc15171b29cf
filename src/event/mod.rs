//! The event that started the run, resolved into an explicit context value.
//!
//! The runner describes the triggering event through `GITHUB_*` variables and
//! a JSON payload file. [`InvocationContext`] gathers the parts the action
//! reads so that evaluation and notification never reach for ambient state.

mod payload;
mod runner;


use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::fs;
use crate::github::{ActionError, CommentId, IssueNumber, RepositoryLocator};

use payload::{ApiIssueCommentEvent, ApiPullRequestEvent};
pub use runner::RunnerEnvironment;

/// Event shapes the action responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A comment on an issue or pull request (`issue_comment`).
    IssueComment,
    /// Activity on a pull request itself (`pull_request`).
    PullRequest,
}

impl EventKind {
    /// Event name as reported by the runner.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IssueComment => "issue_comment",
            Self::PullRequest => "pull_request",
        }
    }
}

impl FromStr for EventKind {
    type Err = ActionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "issue_comment" => Ok(Self::IssueComment),
            "pull_request" => Ok(Self::PullRequest),
            other => Err(ActionError::UnsupportedEvent {
                name: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comment that started an `issue_comment` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPayload {
    /// Comment text; empty when GitHub sent no body.
    pub body: String,
    /// Comment identifier, used as the reaction target.
    pub id: CommentId,
    /// Number of the issue or pull request the comment belongs to.
    pub issue: IssueNumber,
    /// Whether that parent is a pull request rather than a plain issue.
    pub on_pull_request: bool,
}

/// Pull request that started a `pull_request` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestPayload {
    /// Pull request description; empty when GitHub sent no body.
    pub body: String,
    /// Pull request number.
    pub number: IssueNumber,
}

/// Event-specific part of the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    /// `issue_comment` payload.
    Comment(CommentPayload),
    /// `pull_request` payload.
    PullRequest(PullRequestPayload),
}

impl EventPayload {
    /// Parses the webhook JSON for the given event kind.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidEvent`] when the JSON does not have the
    /// shape GitHub sends for `kind`.
    pub fn parse(kind: EventKind, json: &str) -> Result<Self, ActionError> {
        match kind {
            EventKind::IssueComment => {
                let event: ApiIssueCommentEvent =
                    serde_json::from_str(json).map_err(|error| invalid_event(kind, &error))?;
                Ok(Self::Comment(CommentPayload {
                    body: event.comment.body.unwrap_or_default(),
                    id: CommentId::new(event.comment.id),
                    issue: IssueNumber::new(event.issue.number)?,
                    on_pull_request: event.issue.pull_request.is_some(),
                }))
            }
            EventKind::PullRequest => {
                let event: ApiPullRequestEvent =
                    serde_json::from_str(json).map_err(|error| invalid_event(kind, &error))?;
                Ok(Self::PullRequest(PullRequestPayload {
                    body: event.pull_request.body.unwrap_or_default(),
                    number: IssueNumber::new(event.pull_request.number)?,
                }))
            }
        }
    }

    /// Kind of event this payload came from.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Comment(_) => EventKind::IssueComment,
            Self::PullRequest(_) => EventKind::PullRequest,
        }
    }

    /// Text the trigger phrase is matched against.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Comment(comment) => &comment.body,
            Self::PullRequest(pull_request) => &pull_request.body,
        }
    }

    /// Issue or pull request the acknowledgement is posted on.
    #[must_use]
    pub const fn target_issue(&self) -> IssueNumber {
        match self {
            Self::Comment(comment) => comment.issue,
            Self::PullRequest(pull_request) => pull_request.number,
        }
    }
}

fn invalid_event(kind: EventKind, error: &serde_json::Error) -> ActionError {
    ActionError::InvalidEvent {
        message: format!("{kind} payload: {error}"),
    }
}

/// Everything the action knows about the run it is executing in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    repository: RepositoryLocator,
    actor: String,
    run_id: String,
    server_url: Url,
    payload: EventPayload,
}

impl InvocationContext {
    /// Assembles a context from already-parsed parts.
    #[must_use]
    pub fn new(
        repository: RepositoryLocator,
        actor: impl Into<String>,
        run_id: impl Into<String>,
        server_url: Url,
        payload: EventPayload,
    ) -> Self {
        Self {
            repository,
            actor: actor.into(),
            run_id: run_id.into(),
            server_url,
            payload,
        }
    }

    /// Builds the context from the runner environment, reading the payload
    /// file it points at.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnsupportedEvent`] for events other than
    /// `issue_comment` and `pull_request`, [`ActionError::Io`] when the
    /// payload file cannot be read, and [`ActionError::InvalidEvent`] or
    /// [`ActionError::InvalidUrl`] for malformed values.
    pub fn from_runner(runner: &RunnerEnvironment) -> Result<Self, ActionError> {
        let kind = runner.event_name.parse::<EventKind>()?;
        let json = fs::read_to_string(&runner.event_path, "event payload")?;
        Self::from_payload_json(runner, kind, &json)
    }

    /// Builds the context from the runner environment and a payload already
    /// in memory.
    ///
    /// # Errors
    ///
    /// See [`InvocationContext::from_runner`].
    pub fn from_payload_json(
        runner: &RunnerEnvironment,
        kind: EventKind,
        json: &str,
    ) -> Result<Self, ActionError> {
        let repository = RepositoryLocator::from_slug(&runner.repository, &runner.api_url)?;
        let server_url = Url::parse(&runner.server_url)
            .map_err(|error| ActionError::InvalidUrl(error.to_string()))?;
        let payload = EventPayload::parse(kind, json)?;

        Ok(Self::new(
            repository,
            runner.actor.as_str(),
            runner.run_id.as_str(),
            server_url,
            payload,
        ))
    }

    /// Repository the event belongs to.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryLocator {
        &self.repository
    }

    /// Login of the user that triggered the run.
    #[must_use]
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Workflow run identifier.
    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Web URL of the GitHub server.
    #[must_use]
    pub const fn server_url(&self) -> &Url {
        &self.server_url
    }

    /// Event-specific payload.
    #[must_use]
    pub const fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// Kind of the triggering event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.payload.kind()
    }
}
