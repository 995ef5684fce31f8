//! End-to-end auth flows against a stub backend.

mod fixtures;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_file_contents(home: &std::path::Path) -> Option<String> {
    fs::read_to_string(home.join("token.json")).ok()
}

/// Valid credentials store the token and greet the user by profile.
#[tokio::test(flavor = "multi_thread")]
async fn test_login_stores_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("username=testuser1%40example.com"))
        .and(body_string_contains("password=TestPass123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::token_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(wiremock::matchers::bearer_token("abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::profile_body()))
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .env("EVENLY_API_URL", server.uri())
        .args([
            "login",
            "--email",
            "testuser1@example.com",
            "--password",
            "TestPass123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as testuser1@example.com"));

    let stored = token_file_contents(home.path()).expect("token file written");
    assert!(stored.contains("abc123"));
}

/// A bad password is an ordinary failure: no token is stored, and a
/// previously stored token is left untouched (no cascading logout).
#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejection_is_not_a_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "Incorrect email or password"})),
        )
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    fs::write(
        home.path().join("token.json"),
        r#"{"access_token": "existing-token"}"#,
    )
    .unwrap();

    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .env("EVENLY_API_URL", server.uri())
        .args([
            "login",
            "--email",
            "testuser1@example.com",
            "--password",
            "wrong",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect email or password"));

    // The stored token survived the failed exchange.
    let stored = token_file_contents(home.path()).expect("token file still present");
    assert!(stored.contains("existing-token"));
}

/// A rejected stored token clears the store and points at `evenly login`,
/// whatever endpoint was called.
#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_token_clears_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(fixtures::unauthorized_body()))
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    fs::write(
        home.path().join("token.json"),
        r#"{"access_token": "stale-token"}"#,
    )
    .unwrap();

    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .env("EVENLY_API_URL", server.uri())
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session expired"));

    assert!(token_file_contents(home.path()).is_none());
}

/// Same coordinator behavior from a non-auth endpoint (sync).
#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_token_on_sync() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transactions/sync"))
        .respond_with(ResponseTemplate::new(401).set_body_json(fixtures::unauthorized_body()))
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    fs::write(
        home.path().join("token.json"),
        r#"{"access_token": "stale-token"}"#,
    )
    .unwrap();

    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .env("EVENLY_API_URL", server.uri())
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session expired"));

    assert!(token_file_contents(home.path()).is_none());
}

/// Logout clears the stored token and is a no-op when anonymous.
#[tokio::test(flavor = "multi_thread")]
async fn test_logout_clears_token() {
    let home = tempdir().unwrap();
    fs::write(
        home.path().join("token.json"),
        r#"{"access_token": "abc123"}"#,
    )
    .unwrap();

    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(token_file_contents(home.path()).is_none());

    // Idempotent: a second logout succeeds without a token.
    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

/// Registration posts the JSON body and reports the created account.
#[tokio::test(flavor = "multi_thread")]
async fn test_register() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(wiremock::matchers::body_partial_json(serde_json::json!({
            "email": "new@example.com",
            "full_name": "New User"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "user_id": "11111111-2222-3333-4444-555555555555",
            "email": "new@example.com",
            "full_name": "New User",
            "phone": "9876543211",
            "is_active": true,
            "created_at": "2026-02-01T00:00:00"
        })))
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .env("EVENLY_API_URL", server.uri())
        .args([
            "register",
            "--email",
            "new@example.com",
            "--password",
            "SecurePass123!",
            "--full-name",
            "New User",
            "--phone",
            "9876543211",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created for new@example.com"));
}
