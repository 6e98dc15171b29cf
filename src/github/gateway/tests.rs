//! Tests for the Octocrab notification gateway against a mock GitHub API.

use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{NotificationGateway, OctocrabGateway};
use crate::github::error::ActionError;
use crate::github::locator::{CommentId, IssueNumber, PersonalAccessToken, RepositoryLocator};
use crate::github::models::{PostedComment, PostedReaction};
use crate::github::reaction::Reaction;

struct GatewayFixture {
    server: MockServer,
    locator: RepositoryLocator,
    gateway: OctocrabGateway,
}

async fn gateway_fixture() -> GatewayFixture {
    let server = MockServer::start().await;
    let locator =
        RepositoryLocator::with_api_base("owner", "repo", &format!("{}/api/v3", server.uri()))
            .expect("locator should build");
    let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
    let gateway = OctocrabGateway::for_token(&token, &locator).expect("gateway should build");
    GatewayFixture {
        server,
        locator,
        gateway,
    }
}

fn issue(number: u64) -> IssueNumber {
    IssueNumber::new(number).expect("issue number should be positive")
}

#[rstest]
#[tokio::test]
async fn posts_comment_with_body() {
    let fixture = gateway_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/repos/owner/repo/issues/4/comments"))
        .and(body_json(json!({ "body": "@octocat workflow run: https://example.invalid" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 99,
            "html_url": "https://github.com/owner/repo/pull/4#issuecomment-99"
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let posted = fixture
        .gateway
        .create_issue_comment(
            &fixture.locator,
            issue(4),
            "@octocat workflow run: https://example.invalid",
        )
        .await
        .expect("comment should post");

    assert_eq!(
        posted,
        PostedComment {
            id: 99,
            html_url: Some("https://github.com/owner/repo/pull/4#issuecomment-99".to_owned()),
        }
    );
}

#[rstest]
#[tokio::test]
async fn reacts_to_issue_comment() {
    let fixture = gateway_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/repos/owner/repo/issues/comments/321/reactions"))
        .and(body_json(json!({ "content": "+1" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 5, "content": "+1" })),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    let posted = fixture
        .gateway
        .create_comment_reaction(&fixture.locator, CommentId::new(321), Reaction::ThumbsUp)
        .await
        .expect("reaction should post");

    assert_eq!(
        posted,
        PostedReaction {
            id: 5,
            content: Some("+1".to_owned()),
        }
    );
}

#[rstest]
#[tokio::test]
async fn reacts_to_issue() {
    let fixture = gateway_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/repos/owner/repo/issues/12/reactions"))
        .and(body_json(json!({ "content": "rocket" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 6, "content": "rocket" })),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    let posted = fixture
        .gateway
        .create_issue_reaction(&fixture.locator, issue(12), Reaction::Rocket)
        .await
        .expect("reaction should post");

    assert_eq!(posted.id, 6);
}

#[rstest]
#[tokio::test]
async fn maps_rejected_token_to_authentication_error() {
    let fixture = gateway_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/repos/owner/repo/issues/4/comments"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
        )
        .mount(&fixture.server)
        .await;

    let result = fixture
        .gateway
        .create_issue_comment(&fixture.locator, issue(4), "hello")
        .await;

    assert!(
        matches!(result, Err(ActionError::Authentication { ref message }) if message.contains("Bad credentials")),
        "expected Authentication error, got {result:?}"
    );
}

#[rstest]
#[tokio::test]
async fn maps_validation_failure_to_api_error() {
    let fixture = gateway_fixture().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/repos/owner/repo/issues/12/reactions"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Validation Failed" })),
        )
        .mount(&fixture.server)
        .await;

    let result = fixture
        .gateway
        .create_issue_reaction(&fixture.locator, issue(12), Reaction::Eyes)
        .await;

    assert!(
        matches!(result, Err(ActionError::Api { ref message }) if message.contains("create reaction")),
        "expected Api error, got {result:?}"
    );
}
