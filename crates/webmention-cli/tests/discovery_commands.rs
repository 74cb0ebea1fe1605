#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the `endpoint` and `links` commands.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn webmention_cmd() -> Command {
    let mut cmd = Command::cargo_bin("webmention").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("WEBMENTION_CONFIG", "/nonexistent/webmention-config.toml");
    cmd
}

#[tokio::test]
async fn test_endpoint_prints_discovered_url() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/post"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("link", r#"</wm-endpoint>; rel="webmention""#),
        )
        .mount(&server)
        .await;

    webmention_cmd()
        .arg("endpoint")
        .arg(format!("{}/post", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("/wm-endpoint"));
}

#[tokio::test]
async fn test_endpoint_absent_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/plain"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>no links here</p>"))
        .mount(&server)
        .await;

    webmention_cmd()
        .arg("endpoint")
        .arg(format!("{}/plain", server.uri()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no webmention endpoint"));
}

#[tokio::test]
async fn test_links_respects_default_selector() {
    let server = MockServer::start().await;
    let body = r#"<link href="/head-link"><div class="h-entry"><a href="/inside"></a></div>"#;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    // default selector is .h-entry: the head link is out of scope
    webmention_cmd()
        .arg("links")
        .arg(format!("{}/page", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("/inside"))
        .stdout(predicate::str::contains("/head-link").not());
}

#[tokio::test]
async fn test_links_empty_selector_scans_whole_document() {
    let server = MockServer::start().await;
    let body = r#"<link href="/head-link"><div class="h-entry"><a href="/inside"></a></div>"#;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    webmention_cmd()
        .arg("links")
        .arg(format!("{}/page", server.uri()))
        .arg("--selector")
        .arg("")
        .assert()
        .success()
        .stdout(predicate::str::contains("/head-link"))
        .stdout(predicate::str::contains("/inside"));
}

#[test]
fn test_send_rejects_invalid_url() {
    webmention_cmd()
        .arg("send")
        .arg("not a url")
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn test_send_rejects_non_http_scheme() {
    webmention_cmd()
        .arg("send")
        .arg("ftp://example.com/post")
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}
