#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for the send flow against a mock server.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn webmention_cmd() -> Command {
    let mut cmd = Command::cargo_bin("webmention").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("WEBMENTION_CONFIG", "/nonexistent/webmention-config.toml");
    cmd
}

/// Mounts a source page whose only in-scope link points at `/target`.
async fn mount_source_page(server: &MockServer) {
    let body = r#"<div class="h-entry"><a href="/target">a mention</a></div>"#;
    Mock::given(method("GET"))
        .and(path("/source"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_send_yes_delivers_webmention() {
    let server = MockServer::start().await;
    mount_source_page(&server).await;

    Mock::given(method("HEAD"))
        .and(path("/target"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("link", r#"</receiver>; rel="webmention""#),
        )
        .mount(&server)
        .await;

    // the receiver must get a form POST naming both pages
    Mock::given(method("POST"))
        .and(path("/receiver"))
        .and(header(
            "content-type",
            "application/x-www-form-urlencoded",
        ))
        .and(body_string_contains("source=http%3A%2F%2F"))
        .and(body_string_contains("%2Fsource"))
        .and(body_string_contains("target=http%3A%2F%2F"))
        .and(body_string_contains("%2Ftarget"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    webmention_cmd()
        .arg("send")
        .arg(format!("{}/source", server.uri()))
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("sent"));
}

#[tokio::test]
async fn test_send_reports_target_without_endpoint() {
    let server = MockServer::start().await;
    mount_source_page(&server).await;

    Mock::given(method("HEAD"))
        .and(path("/target"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/target"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>no endpoint</p>"))
        .mount(&server)
        .await;

    // a target without webmention support is reported, not an error
    webmention_cmd()
        .arg("send")
        .arg(format!("{}/source", server.uri()))
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("no webmention endpoint"));
}

#[tokio::test]
async fn test_send_fails_when_nothing_was_delivered() {
    let server = MockServer::start().await;
    mount_source_page(&server).await;

    Mock::given(method("HEAD"))
        .and(path("/target"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("link", r#"</receiver>; rel="webmention""#),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/receiver"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    webmention_cmd()
        .arg("send")
        .arg(format!("{}/source", server.uri()))
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no webmentions were delivered"));
}

#[tokio::test]
async fn test_send_without_yes_requires_a_terminal() {
    let server = MockServer::start().await;
    mount_source_page(&server).await;

    webmention_cmd()
        .arg("send")
        .arg(format!("{}/source", server.uri()))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}
