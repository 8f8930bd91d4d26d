//! End-to-end tests for the genefetch binary
//!
//! The binary is pointed at a wiremock server standing in for all three
//! upstream services.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mock_all_sources(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/lookup/symbol/human/KDM6A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "description": "Lysine demethylase 6A",
            "seq_region_name": "X",
            "start": 44732423,
            "end": 44971847,
            "biotype": "protein_coding",
            "synonyms": ["UTX"]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "esearchresult": { "idlist": ["7403"] }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "7403": { "nomenclature": "lysine demethylase 6A", "summary": "This gene encodes..." } }
        })))
        .mount(server)
        .await;
}

fn genefetch(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("genefetch").unwrap();
    cmd.env_remove("GENEFETCH_LOG_DIR")
        .arg("--ensembl-url")
        .arg(server.uri())
        .arg("--eutils-url")
        .arg(server.uri())
        .arg("--genecards-url")
        .arg(server.uri());
    cmd
}

#[tokio::test]
async fn test_json_output() {
    let server = MockServer::start().await;
    mock_all_sources(&server).await;

    let output = genefetch(&server).arg("KDM6A").output().unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["Location"], "X:44732423-44971847");
    assert_eq!(record["Synonyms"], "UTX");
    assert_eq!(record["Official Full Name"], "lysine demethylase 6A");
    assert!(record.get("GeneCards Summary").is_none());
}

#[tokio::test]
async fn test_text_output() {
    let server = MockServer::start().await;
    mock_all_sources(&server).await;

    genefetch(&server)
        .arg("KDM6A")
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gene Type: protein_coding"))
        .stdout(predicate::str::contains("Regulatory Features: (none)"));
}

#[tokio::test]
async fn test_strict_fails_on_source_fault() {
    let server = MockServer::start().await;
    mock_all_sources(&server).await;

    Mock::given(method("GET"))
        .and(path("/cgi-bin/carddisp.pl"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    genefetch(&server)
        .arg("KDM6A")
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Lysine demethylase 6A"))
        .stderr(predicate::str::contains("1 of 3 sources failed for KDM6A"));
}

#[tokio::test]
async fn test_blank_symbol_rejected() {
    let server = MockServer::start().await;

    genefetch(&server)
        .arg("  ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid gene symbol"));

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_base_urls_from_environment() {
    let server = MockServer::start().await;
    mock_all_sources(&server).await;

    let output = Command::cargo_bin("genefetch")
        .unwrap()
        .env_remove("GENEFETCH_LOG_DIR")
        .env("GENEFETCH_ENSEMBL_URL", server.uri())
        .env("GENEFETCH_EUTILS_URL", server.uri())
        .env("GENEFETCH_GENECARDS_URL", server.uri())
        .env("GENEFETCH_TIMEOUT_SECS", "5")
        .arg("KDM6A")
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["Location"], "X:44732423-44971847");
    assert_eq!(record["Official Full Name"], "lysine demethylase 6A");
}

#[tokio::test]
async fn test_flag_overrides_environment() {
    let server = MockServer::start().await;
    mock_all_sources(&server).await;

    let output = genefetch(&server)
        .env("GENEFETCH_ENSEMBL_URL", "http://127.0.0.1:9")
        .env("GENEFETCH_EUTILS_URL", "http://127.0.0.1:9")
        .arg("KDM6A")
        .arg("--format")
        .arg("report")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["record"]["Location"], "X:44732423-44971847");
    assert_eq!(report["record"]["Official Full Name"], "lysine demethylase 6A");
}

#[tokio::test]
async fn test_log_file_written_before_exit() {
    let server = MockServer::start().await;
    mock_all_sources(&server).await;
    let log_dir = tempfile::tempdir().unwrap();

    genefetch(&server)
        .env("GENEFETCH_LOG_DIR", log_dir.path())
        .env_remove("GENEFETCH_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .arg("KDM6A")
        .arg("--verbose")
        .assert()
        .success();

    let contents: String = std::fs::read_dir(log_dir.path())
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    assert!(contents.contains("Fetching gene data"));
}
