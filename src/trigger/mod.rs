//! Decides whether the triggering text fires the configured phrase.
//!
//! Evaluation is a short run of gates. Each gate either lets the event
//! through or finalises the [`Outcome`] with `triggered = false`; only an
//! event that passes every gate produces a [`NotificationTarget`].


use tracing::debug;

use crate::event::{EventPayload, InvocationContext};
use crate::github::{CommentId, IssueNumber};

/// How the trigger phrase must appear in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The body must start with the phrase.
    Prefix,
    /// The phrase may appear anywhere in the body.
    Substring,
}

impl MatchMode {
    /// Applies the match predicate.
    #[must_use]
    pub fn matches(self, normalized_body: &str, trigger: &str) -> bool {
        match self {
            Self::Prefix => normalized_body.starts_with(trigger),
            Self::Substring => normalized_body.contains(trigger),
        }
    }
}

/// Result reported back to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the trigger fired.
    pub triggered: bool,
    /// Lower-cased body text.
    pub comment_body: String,
}

impl Outcome {
    /// String form of `triggered` used by the `triggered` output.
    #[must_use]
    pub const fn triggered_output(&self) -> &'static str {
        if self.triggered { "true" } else { "false" }
    }
}

/// Where the acknowledgement goes once the trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTarget {
    /// Issue or pull request that receives the comment.
    pub issue: IssueNumber,
    /// What the optional reaction attaches to.
    pub reaction_subject: ReactionSubject,
}

/// Object a reaction is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionSubject {
    /// The triggering issue comment.
    Comment(CommentId),
    /// The pull request itself.
    Issue(IssueNumber),
}

/// Outcome of evaluation, plus the target when notification is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Values for the workflow outputs.
    pub outcome: Outcome,
    /// Present only when `outcome.triggered` is true.
    pub target: Option<NotificationTarget>,
}

impl Evaluation {
    const fn skipped(comment_body: String) -> Self {
        Self {
            outcome: Outcome {
                triggered: false,
                comment_body,
            },
            target: None,
        }
    }
}

/// Lower-cases text for matching. No locale-specific folding.
#[must_use]
pub fn normalize(body: &str) -> String {
    body.to_lowercase()
}

/// Evaluates the trigger for one invocation.
///
/// `trigger` is compared exactly as given against the lower-cased body, so a
/// phrase containing upper-case letters never matches.
#[must_use]
pub fn evaluate(context: &InvocationContext, trigger: &str, mode: MatchMode) -> Evaluation {
    let payload = context.payload();
    let comment_body = normalize(payload.body());

    if let EventPayload::Comment(comment) = payload
        && !comment.on_pull_request
    {
        debug!(
            issue = comment.issue.get(),
            "comment is on a plain issue, not a pull request; skipping"
        );
        return Evaluation::skipped(comment_body);
    }

    if !mode.matches(&comment_body, trigger) {
        debug!(?mode, trigger, "trigger phrase not found");
        return Evaluation::skipped(comment_body);
    }

    let reaction_subject = match payload {
        EventPayload::Comment(comment) => ReactionSubject::Comment(comment.id),
        EventPayload::PullRequest(pull_request) => ReactionSubject::Issue(pull_request.number),
    };

    Evaluation {
        outcome: Outcome {
            triggered: true,
            comment_body,
        },
        target: Some(NotificationTarget {
            issue: payload.target_issue(),
            reaction_subject,
        }),
    }
}
