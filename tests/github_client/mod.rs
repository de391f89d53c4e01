//! `GithubClient` tests.
//!
//! These tests exercise the two REST calls the bot makes. They set up an
//! HTTP server, create a `GithubClient` pointing at it, execute the call,
//! and validate both the request and the result.

use super::common::{Method::*, Response, TestBuilder, issues_payload};
use issuebot::github::{GithubClient, Issue};
use secrecy::SecretString;
use std::sync::{Arc, Mutex};

fn client(api_url: String) -> GithubClient {
    GithubClient::new(SecretString::from("t0ken".to_string()), api_url)
}

fn issue() -> Issue {
    let payload = issues_payload("opened", None);
    issuebot::deserialize_payload(&payload["issue"].to_string()).unwrap()
}

#[tokio::test]
async fn post_comment() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen2 = seen.clone();
    let (server, events) = TestBuilder::new()
        .api_handler(
            POST,
            "repos/octocat/Hello-World/issues/1/comments",
            move |req| {
                seen2.lock().unwrap().push(req.clone());
                Response::new().code(201).json(serde_json::json!({
                    "id": 1001,
                    "body": req.json()["body"],
                    "html_url": "https://github.com/octocat/Hello-World/issues/1#issuecomment-1001",
                }))
            },
        )
        .start();

    let comment = issue()
        .post_comment(&client(server.url()), "Welcome back!")
        .await
        .unwrap();
    assert_eq!(comment.id, 1001);
    assert_eq!(comment.body, "Welcome back!");

    events.assert_eq(&[(POST, "/repos/octocat/Hello-World/issues/1/comments")]);
    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].json(), serde_json::json!({"body": "Welcome back!"}));
    assert_eq!(seen[0].headers["authorization"], "token t0ken");
    assert_eq!(seen[0].headers["user-agent"], "issuebot");
}

#[tokio::test]
async fn remove_label() {
    let (server, events) = TestBuilder::new()
        .api_handler(
            DELETE,
            "repos/octocat/Hello-World/issues/{number}/labels/{label}",
            |req| {
                assert_eq!(req.components["number"], "1");
                assert_eq!(req.components["label"], "bug");
                Response::new().json(serde_json::json!([]))
            },
        )
        .start();

    issue()
        .remove_label(&client(server.url()), "bug")
        .await
        .unwrap();

    events.assert_eq(&[(DELETE, "/repos/octocat/Hello-World/issues/1/labels/bug")]);
}

#[tokio::test]
async fn api_errors_carry_the_response() {
    let (server, events) = TestBuilder::new()
        .api_handler(
            POST,
            "repos/octocat/Hello-World/issues/1/comments",
            |_req| {
                Response::new()
                    .code(403)
                    .json(serde_json::json!({"message": "Resource not accessible by integration"}))
            },
        )
        .start();

    let err = issue()
        .post_comment(&client(server.url()), "Thanks for cleaning up!")
        .await
        .unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("failed to post comment"), "{msg}");
    assert!(msg.contains("Resource not accessible by integration"), "{msg}");

    events.assert_eq(&[(POST, "/repos/octocat/Hello-World/issues/1/comments")]);
}
