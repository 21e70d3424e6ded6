//! Integration tests for the `aclsnap` CLI binary.
//!
//! Argument parsing, help output, shell completions, and error handling run
//! without a device; the export tests talk to a mock eAPI endpoint.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `aclsnap` binary with env isolation.
///
/// Clears all `ACLSNAP_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn aclsnap_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("aclsnap");
    cmd.env("HOME", "/tmp/aclsnap-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/aclsnap-cli-test-nonexistent")
        .env_remove("ACLSNAP_PROFILE")
        .env_remove("ACLSNAP_HOST")
        .env_remove("ACLSNAP_USERNAME")
        .env_remove("ACLSNAP_PASSWORD")
        .env_remove("ACLSNAP_ENABLE_SECRET")
        .env_remove("ACLSNAP_TRANSPORT")
        .env_remove("ACLSNAP_PORT")
        .env_remove("ACLSNAP_INSECURE")
        .env_remove("ACLSNAP_TIMEOUT")
        .env_remove("ACLSNAP_DEFAULT_PROFILE")
        .env_remove("RUST_LOG");
    cmd
}

/// `aclsnap` pointed at a local plain-HTTP endpoint, run inside `dir`.
fn export_cmd(port: u16, dir: &Path, acl_name: &str) -> assert_cmd::Command {
    let port = port.to_string();
    let mut cmd = aclsnap_cmd();
    cmd.current_dir(dir).args([
        "--host",
        "127.0.0.1",
        "--transport",
        "http",
        "--port",
        port.as_str(),
        "--password",
        "admin",
        "--timeout",
        "5",
        "--color",
        "never",
        "export",
        acl_name,
    ]);
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn mount_result(server: &MockServer, result: Value) {
    Mock::given(method("POST"))
        .and(path("/command-api"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "jsonrpc": "2.0", "id": "1", "result": [{}, result] })),
        )
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = aclsnap_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    aclsnap_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("access list")
            .and(predicate::str::contains("export"))
            .and(predicate::str::contains("interactive"))
            .and(predicate::str::contains("config"))
            .and(predicate::str::contains("manpages")),
    );
}

#[test]
fn test_version_flag() {
    aclsnap_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aclsnap"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    aclsnap_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    aclsnap_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Man pages ───────────────────────────────────────────────────────

#[test]
fn test_manpages_writes_one_page_per_command() {
    let dir = tempfile::tempdir().unwrap();
    let man_dir = dir.path().join("man1");

    aclsnap_cmd()
        .args(["--color", "never", "manpages"])
        .arg(&man_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("man pages to"));

    let export_page = std::fs::read_to_string(man_dir.join("aclsnap-export.1")).unwrap();
    assert!(export_page.contains(".TH"), "not roff:\n{export_page}");
    assert!(man_dir.join("aclsnap.1").exists());
    assert!(man_dir.join("aclsnap-interactive.1").exists());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = aclsnap_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success(), "Expected failure for invalid subcommand");
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_export_requires_acl_name() {
    let output = aclsnap_cmd().arg("export").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_export_without_host() {
    aclsnap_cmd()
        .args(["export", "edge-in"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("host"));
}

#[test]
fn test_export_blank_acl_name() {
    aclsnap_cmd()
        .args(["--host", "leaf1", "--password", "x", "export", " "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ACL name cannot be empty"));
}

#[test]
fn test_unknown_profile() {
    aclsnap_cmd()
        .args(["--profile", "nope", "export", "edge-in"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_invalid_transport() {
    let output = aclsnap_cmd()
        .args(["--transport", "telnet", "export", "edge-in"])
        .output()
        .unwrap();
    assert!(!output.status.success(), "Expected failure for invalid transport");
    let text = combined_output(&output);
    assert!(
        text.contains("possible values") || text.contains("telnet"),
        "Expected error about transport:\n{text}"
    );
}

#[test]
fn test_config_show_no_config() {
    aclsnap_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn test_config_profiles_empty() {
    aclsnap_cmd()
        .args(["config", "profiles"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No profiles configured"));
}

#[test]
fn test_config_use_unknown_profile() {
    aclsnap_cmd()
        .args(["config", "use", "spine"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("spine"));
}

// ── Export against a mock device ────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_export_writes_acl_file() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        json!({
            "aclList": [{
                "name": "edge-in",
                "sequence": [{ "sequenceNumber": 10, "text": "permit ip any any" }]
            }]
        }),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    export_cmd(server.address().port(), dir.path(), "edge-in")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACL data written to 'edge-in.json'"));

    let written = std::fs::read_to_string(dir.path().join("edge-in.json")).unwrap();
    assert!(
        written.starts_with("{\n    \"aclList\": [\n        {\n"),
        "unexpected layout:\n{written}"
    );
    let parsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["aclList"][0]["name"], "edge-in");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_trims_acl_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/command-api"))
        .and(body_partial_json(json!({
            "params": { "cmds": ["enable", "show ip access-lists edge-in"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": "1",
            "result": [{}, { "aclList": [{ "name": "edge-in" }] }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    export_cmd(server.address().port(), dir.path(), " edge-in ")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACL data written to 'edge-in.json'"));

    assert!(dir.path().join("edge-in.json").exists());
    assert!(!dir.path().join(" edge-in .json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_output_flag() {
    let server = MockServer::start().await;
    mount_result(&server, json!({ "aclList": [{ "name": "edge-in" }] })).await;

    let dir = tempfile::tempdir().unwrap();
    export_cmd(server.address().port(), dir.path(), "edge-in")
        .args(["--output", "snapshots-edge.json"])
        .assert()
        .success();

    assert!(dir.path().join("snapshots-edge.json").exists());
    assert!(!dir.path().join("edge-in.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_empty_acl_exits_zero() {
    let server = MockServer::start().await;
    mount_result(&server, json!({})).await;

    let dir = tempfile::tempdir().unwrap();
    export_cmd(server.address().port(), dir.path(), "unused")
        .assert()
        .success()
        .stdout(predicate::str::contains("No ACL data to write."));

    assert!(!dir.path().join("unused.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_rejected_acl_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/command-api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": "1",
            "error": {
                "code": 1002,
                "message": "CLI command 2 of 2 'show ip access-lists doesnotexist' failed: invalid command",
                "data": [{}, { "errors": ["% Access list not found"] }]
            }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    export_cmd(server.address().port(), dir.path(), "doesnotexist")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error retrieving ACL 'doesnotexist'")
                .and(predicate::str::contains("% Access list not found"))
                .and(predicate::str::contains("No ACL data to write.")),
        );

    assert!(!dir.path().join("doesnotexist.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_quiet_prints_nothing() {
    let server = MockServer::start().await;
    mount_result(&server, json!({})).await;

    let dir = tempfile::tempdir().unwrap();
    export_cmd(server.address().port(), dir.path(), "unused")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_bad_credentials_exits_three() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/command-api"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    export_cmd(server.address().port(), dir.path(), "edge-in")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Authentication failed"));

    assert!(!dir.path().join("edge-in.json").exists());
}

#[test]
fn test_export_connection_refused_exits_seven() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    export_cmd(port, dir.path(), "edge-in")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not connect to device"));

    assert!(!dir.path().join("edge-in.json").exists());
}
