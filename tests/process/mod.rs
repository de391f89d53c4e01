//! Tests that run the `issuebot` binary.
//!
//! The binary is started with a cleared environment holding only the
//! variables the Actions runner would set, plus `GITHUB_API_URL` pointing at
//! the fake GitHub server. These tests check the exit status and the
//! workflow commands printed on stdout.

use super::common::{
    Events, HttpServerHandle, Method::*, Response, TestBuilder, issues_payload, write_payload,
};
use std::process::{Command, Output};

fn server() -> (HttpServerHandle, Events) {
    TestBuilder::new()
        .api_handler(
            POST,
            "repos/octocat/Hello-World/issues/{number}/comments",
            |_req| {
                Response::new().code(201).json(serde_json::json!({
                    "id": 1,
                    "html_url": "https://github.com/octocat/Hello-World/issues/1#issuecomment-1",
                }))
            },
        )
        .start()
}

fn issuebot(vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_issuebot"));
    cmd.env_clear()
        .current_dir(env!("CARGO_TARGET_TMPDIR"))
        .env("DISABLE_COLOR", "1");
    for (k, v) in vars {
        cmd.env(k, v);
    }
    let output = cmd.output().unwrap();
    eprintln!("stdout:\n{}", String::from_utf8_lossy(&output.stdout));
    eprintln!("stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    output
}

fn actions_run(server: &HttpServerHandle, action: &str, label: Option<&str>) -> Output {
    let path = write_payload(&issues_payload(action, label));
    let url = server.url();
    issuebot(&[
        ("GITHUB_ACTIONS", "true"),
        ("GITHUB_EVENT_NAME", "issues"),
        ("GITHUB_EVENT_PATH", path.to_str().unwrap()),
        ("GITHUB_ACTOR", "alice"),
        ("GITHUB_ACTION", "demo"),
        ("GITHUB_REPOSITORY", "octocat/Hello-World"),
        ("GITHUB_TOKEN", "t0ken"),
        ("GITHUB_API_URL", &url),
    ])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn outside_actions() {
    let (_server, events) = server();
    let output = issuebot(&[("GITHUB_EVENT_NAME", "issues")]);
    assert_eq!(output.status.code(), Some(0));
    events.assert_eq(&[]);
}

#[test]
fn opened() {
    let (server, events) = server();
    let output = actions_run(&server, "opened", None);
    assert_eq!(output.status.code(), Some(0));
    events.assert_eq(&[(POST, "/repos/octocat/Hello-World/issues/1/comments")]);
}

#[test]
fn unexpected_action() {
    let (server, events) = server();
    let output = actions_run(&server, "locked", None);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout(&output).contains("::error::Unexpected issue action locked"),
        "{}",
        stdout(&output)
    );
    events.assert_eq(&[]);
}

#[test]
fn ignored_label() {
    let (server, events) = server();
    let output = actions_run(&server, "labeled", Some("enhancement"));
    assert_eq!(output.status.code(), Some(0));
    assert!(
        stdout(&output).contains("::warning::Ignoring label enhancement"),
        "{}",
        stdout(&output)
    );
    events.assert_eq(&[]);
}

#[test]
fn missing_token() {
    let (server, events) = server();
    let path = write_payload(&issues_payload("opened", None));
    let url = server.url();
    let output = issuebot(&[
        ("GITHUB_ACTIONS", "true"),
        ("GITHUB_EVENT_NAME", "issues"),
        ("GITHUB_EVENT_PATH", path.to_str().unwrap()),
        ("GITHUB_ACTOR", "alice"),
        ("GITHUB_ACTION", "demo"),
        ("GITHUB_API_URL", &url),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout(&output).contains("::error::Token was not provided"),
        "{}",
        stdout(&output)
    );
    events.assert_eq(&[]);
}

#[test]
fn missing_payload() {
    let (server, events) = server();
    let output = issuebot(&[
        ("GITHUB_ACTIONS", "true"),
        ("GITHUB_EVENT_NAME", "issues"),
        ("GITHUB_TOKEN", "t0ken"),
        ("GITHUB_API_URL", &server.url()),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout(&output).contains("::error::Failed getting issue information"),
        "{}",
        stdout(&output)
    );
    events.assert_eq(&[]);
}

#[test]
fn unrecognized_action_is_quiet() {
    let (server, events) = server();
    let output = actions_run(&server, "reopened", None);
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert!(
        !stdout
            .lines()
            .any(|line| line.starts_with("::") && line.contains("reopened")),
        "{stdout}"
    );
    assert!(!stdout.contains("Nothing"), "{stdout}");
    events.assert_eq(&[]);
}
