//! Posts the acknowledgement for a fired trigger.

use tracing::info;

use crate::event::InvocationContext;
use crate::github::{ActionError, NotificationGateway, PostedComment, PostedReaction, Reaction};
use crate::trigger::{NotificationTarget, ReactionSubject};

/// Everything posted for one acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationReceipt {
    /// The acknowledgement comment.
    pub comment: PostedComment,
    /// The reaction, when one was configured.
    pub reaction: Option<PostedReaction>,
}

/// URL of the workflow run the action is executing in.
#[must_use]
pub fn workflow_run_link(context: &InvocationContext) -> String {
    let repository = context.repository();
    format!(
        "{}/{}/{}/actions/runs/{}",
        context.server_url().as_str().trim_end_matches('/'),
        repository.owner().as_str(),
        repository.repository().as_str(),
        context.run_id()
    )
}

/// Body of the acknowledgement comment.
#[must_use]
pub fn acknowledgement_body(context: &InvocationContext) -> String {
    format!(
        "@{} workflow run: {}",
        context.actor(),
        workflow_run_link(context)
    )
}

/// Sends acknowledgements through a gateway.
pub struct Notifier<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> Notifier<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    /// Create a notifier using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Posts the acknowledgement comment, then the reaction if one is set.
    ///
    /// The reaction is only attempted after the comment succeeds.
    ///
    /// # Errors
    ///
    /// Propagates the first gateway failure; nothing is retried.
    pub async fn notify(
        &self,
        context: &InvocationContext,
        target: NotificationTarget,
        reaction: Option<Reaction>,
    ) -> Result<NotificationReceipt, ActionError> {
        let repository = context.repository();
        let body = acknowledgement_body(context);

        let comment = self
            .client
            .create_issue_comment(repository, target.issue, &body)
            .await?;
        info!(
            issue = target.issue.get(),
            comment_id = comment.id,
            "posted acknowledgement comment"
        );

        let Some(content) = reaction else {
            return Ok(NotificationReceipt {
                comment,
                reaction: None,
            });
        };

        let posted = match target.reaction_subject {
            ReactionSubject::Comment(comment_id) => {
                self.client
                    .create_comment_reaction(repository, comment_id, content)
                    .await?
            }
            ReactionSubject::Issue(issue) => {
                self.client
                    .create_issue_reaction(repository, issue, content)
                    .await?
            }
        };
        info!(reaction = %content, "attached reaction");

        Ok(NotificationReceipt {
            comment,
            reaction: Some(posted),
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use url::Url;

    use super::{Notifier, acknowledgement_body, workflow_run_link};
    use crate::event::{CommentPayload, EventPayload, InvocationContext};
    use crate::github::{
        ActionError, CommentId, IssueNumber, MockNotificationGateway, PostedComment,
        PostedReaction, Reaction, RepositoryLocator,
    };
    use crate::trigger::{NotificationTarget, ReactionSubject};

    fn issue(number: u64) -> IssueNumber {
        IssueNumber::new(number).expect("issue number should be positive")
    }

    fn context_on(server_url: &str) -> InvocationContext {
        InvocationContext::new(
            RepositoryLocator::from_owner_repo("octo", "repo").expect("locator"),
            "octocat",
            "987654",
            Url::parse(server_url).expect("server url"),
            EventPayload::Comment(CommentPayload {
                body: "lgtm".to_owned(),
                id: CommentId::new(77),
                issue: issue(4),
                on_pull_request: true,
            }),
        )
    }

    #[fixture]
    fn context() -> InvocationContext {
        context_on("https://github.com")
    }

    fn posted_comment() -> PostedComment {
        PostedComment {
            id: 1,
            html_url: None,
        }
    }

    #[rstest]
    fn builds_run_link(context: InvocationContext) {
        assert_eq!(
            workflow_run_link(&context),
            "https://github.com/octo/repo/actions/runs/987654"
        );
    }

    #[rstest]
    fn run_link_follows_enterprise_server() {
        let context = context_on("https://ghe.example.com/");
        assert_eq!(
            workflow_run_link(&context),
            "https://ghe.example.com/octo/repo/actions/runs/987654"
        );
    }

    #[rstest]
    fn acknowledgement_mentions_actor(context: InvocationContext) {
        assert_eq!(
            acknowledgement_body(&context),
            "@octocat workflow run: https://github.com/octo/repo/actions/runs/987654"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn posts_only_comment_without_reaction(context: InvocationContext) {
        let mut gateway = MockNotificationGateway::new();
        gateway
            .expect_create_issue_comment()
            .withf(|_, issue_number, body| {
                issue_number.get() == 4
                    && body == "@octocat workflow run: https://github.com/octo/repo/actions/runs/987654"
            })
            .times(1)
            .returning(|_, _, _| Ok(posted_comment()));
        gateway.expect_create_comment_reaction().times(0);
        gateway.expect_create_issue_reaction().times(0);

        let target = NotificationTarget {
            issue: issue(4),
            reaction_subject: ReactionSubject::Comment(CommentId::new(77)),
        };
        let receipt = Notifier::new(&gateway)
            .notify(&context, target, None)
            .await
            .expect("notification should succeed");

        assert_eq!(receipt.reaction, None);
    }

    #[rstest]
    #[tokio::test]
    async fn reacts_to_comment_after_posting(context: InvocationContext) {
        let mut sequence = Sequence::new();
        let mut gateway = MockNotificationGateway::new();
        gateway
            .expect_create_issue_comment()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _, _| Ok(posted_comment()));
        gateway
            .expect_create_comment_reaction()
            .with(
                mockall::predicate::always(),
                eq(CommentId::new(77)),
                eq(Reaction::ThumbsUp),
            )
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _, _| {
                Ok(PostedReaction {
                    id: 2,
                    content: Some("+1".to_owned()),
                })
            });
        gateway.expect_create_issue_reaction().times(0);

        let target = NotificationTarget {
            issue: issue(4),
            reaction_subject: ReactionSubject::Comment(CommentId::new(77)),
        };
        let receipt = Notifier::new(&gateway)
            .notify(&context, target, Some(Reaction::ThumbsUp))
            .await
            .expect("notification should succeed");

        assert_eq!(receipt.reaction.map(|reaction| reaction.id), Some(2));
    }

    #[rstest]
    #[tokio::test]
    async fn reacts_to_pull_request_itself(context: InvocationContext) {
        let mut gateway = MockNotificationGateway::new();
        gateway
            .expect_create_issue_comment()
            .times(1)
            .returning(|_, _, _| Ok(posted_comment()));
        gateway
            .expect_create_issue_reaction()
            .with(mockall::predicate::always(), eq(issue(12)), eq(Reaction::Hooray))
            .times(1)
            .returning(|_, _, _| {
                Ok(PostedReaction {
                    id: 3,
                    content: None,
                })
            });
        gateway.expect_create_comment_reaction().times(0);

        let target = NotificationTarget {
            issue: issue(12),
            reaction_subject: ReactionSubject::Issue(issue(12)),
        };
        Notifier::new(&gateway)
            .notify(&context, target, Some(Reaction::Hooray))
            .await
            .expect("notification should succeed");
    }

    #[rstest]
    #[tokio::test]
    async fn reaction_failure_after_comment_fails_notification(context: InvocationContext) {
        let mut sequence = Sequence::new();
        let mut gateway = MockNotificationGateway::new();
        gateway
            .expect_create_issue_comment()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _, _| Ok(posted_comment()));
        gateway
            .expect_create_comment_reaction()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _, _| {
                Err(ActionError::Api {
                    message: "create reaction failed with status 422".to_owned(),
                })
            });
        gateway.expect_create_issue_reaction().times(0);

        let target = NotificationTarget {
            issue: issue(4),
            reaction_subject: ReactionSubject::Comment(CommentId::new(77)),
        };
        let result = Notifier::new(&gateway)
            .notify(&context, target, Some(Reaction::Heart))
            .await;

        assert!(
            matches!(result, Err(ActionError::Api { .. })),
            "expected Api error, got {result:?}"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn comment_failure_skips_reaction(context: InvocationContext) {
        let mut gateway = MockNotificationGateway::new();
        gateway
            .expect_create_issue_comment()
            .times(1)
            .returning(|_, _, _| {
                Err(ActionError::Api {
                    message: "create comment failed with status 500".to_owned(),
                })
            });
        gateway.expect_create_comment_reaction().times(0);
        gateway.expect_create_issue_reaction().times(0);

        let target = NotificationTarget {
            issue: issue(4),
            reaction_subject: ReactionSubject::Comment(CommentId::new(77)),
        };
        let result = Notifier::new(&gateway)
            .notify(&context, target, Some(Reaction::Eyes))
            .await;

        assert!(
            matches!(result, Err(ActionError::Api { .. })),
            "expected Api error, got {result:?}"
        );
    }
}
