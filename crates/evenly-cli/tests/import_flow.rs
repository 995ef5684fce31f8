//! Bulk CSV import against a stub backend.

mod fixtures;

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `--template` writes the fixed CSV template and exits.
#[test]
fn test_import_template_written() {
    let home = tempdir().unwrap();
    let cwd = tempdir().unwrap();

    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .current_dir(cwd.path())
        .args(["import", "--template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("transaction_template.csv"));

    let template = fs::read_to_string(cwd.path().join("transaction_template.csv")).unwrap();
    assert!(template.starts_with("date,type,amount,description,category,balance_after"));
    assert_eq!(template.lines().count(), 4);
}

/// Importing the template's three rows sends exactly three transactions in
/// one batch call, mapped positionally per the header.
#[tokio::test(flavor = "multi_thread")]
async fn test_import_sends_one_batch_of_three() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/bank-accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::accounts_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/manual/transactions/bulk"))
        .and(body_json(fixtures::template_bulk_request()))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::template_bulk_response()))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    fs::write(
        home.path().join("token.json"),
        r#"{"access_token": "abc123"}"#,
    )
    .unwrap();

    let csv_path = home.path().join("import.csv");
    fs::write(&csv_path, evenly_core::bulk::TEMPLATE).unwrap();

    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .env("EVENLY_API_URL", server.uri())
        .args(["import", "--file", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 transactions."));
}

/// Malformed rows abort the import before any network call.
#[tokio::test(flavor = "multi_thread")]
async fn test_import_rejects_malformed_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/bank-accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::accounts_body()))
        .mount(&server)
        .await;
    // No bulk mock mounted: a request to it would 404 and fail differently.

    let home = tempdir().unwrap();
    fs::write(
        home.path().join("token.json"),
        r#"{"access_token": "abc123"}"#,
    )
    .unwrap();

    let csv_path = home.path().join("import.csv");
    fs::write(
        &csv_path,
        "date,type,amount,description,category,balance_after\nnot-a-date,credit,100,X,misc,100\n",
    )
    .unwrap();

    cargo_bin_cmd!("evenly")
        .env("EVENLY_HOME", home.path())
        .env("EVENLY_API_URL", server.uri())
        .args(["import", "--file", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
