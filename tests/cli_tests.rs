//! Integration tests for CLI functionality

use predicates::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn bigipctl_bin() -> &'static Path {
    assert_cmd::cargo::cargo_bin!("bigipctl")
}

/// Run the binary with a given config file and no inherited context env
fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(bigipctl_bin())
        .env_remove("BIGIP_CONFIG")
        .env_remove("BIGIP_CONTEXT")
        .env_remove("COMPLETE")
        .arg("--config")
        .arg(config)
        .arg("--batch")
        .args(args)
        .output()
        .unwrap()
}

/// assert_cmd command with a given config file and no inherited context env
fn cmd(config: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(bigipctl_bin());
    cmd.env_remove("BIGIP_CONFIG")
        .env_remove("BIGIP_CONTEXT")
        .env_remove("COMPLETE")
        .arg("--config")
        .arg(config)
        .arg("--batch");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write a config with `dev` (current) pointing at `host` and an `other` context
fn write_config(dir: &TempDir, host: &str) -> PathBuf {
    let path = dir.path().join("bigip.yaml");
    let yaml = format!(
        "hosts:\n  dev:\n    host: {host}\n    user: admin\n    password: secret\n  \
         other:\n    host: 10.1.1.1\n    user: admin\n    password: secret\ncurrent: dev\n"
    );
    std::fs::write(&path, yaml).unwrap();
    path
}

async fn mount_device(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": {
                "https://localhost/mgmt/tm/sys/version/0": {
                    "nestedStats": {
                        "entries": { "Version": { "description": "17.1.0" } }
                    }
                }
            }
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool/~Common~web-pool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "web-pool",
            "partition": "Common"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool/~Common~web-pool/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "name": "a", "partition": "Common", "state": "up" },
                { "name": "b", "partition": "Common", "state": "down" }
            ]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool/~Common~web-pool/members/~Common~a/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": {
                "serverside.curConns": { "value": 5 },
                "serverside.totConns": { "value": 120 },
                "clientside.curConns": { "value": 9 }
            }
        })))
        .mount(server)
        .await;
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let output = Command::new(bigipctl_bin()).arg("--help").output().unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("BIG-IP"));
    assert!(out.contains("member"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let output = Command::new(bigipctl_bin())
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("bigipctl"));
}

#[test]
fn test_config_context_switch() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "10.0.0.1");

    let output = run(&config, &["config", "context", "other"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Switched to context 'other'"));
    assert!(std::fs::read_to_string(&config)
        .unwrap()
        .contains("current: other"));
}

#[test]
fn test_config_context_invalid() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "10.0.0.1");
    let before = std::fs::read_to_string(&config).unwrap();

    cmd(&config)
        .args(["config", "context", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Context 'invalid' not found"));
    assert_eq!(std::fs::read_to_string(&config).unwrap(), before);
}

#[test]
fn test_config_view_masks_passwords() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "10.0.0.1");

    let output = run(&config, &["config", "view"]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("secret"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    cmd(&dir.path().join("absent.yaml"))
        .args(["pool", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bigip.yaml");
    std::fs::write(&config, "hosts: [not, a, map\n").unwrap();

    let output = run(&config, &["pool", "list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).to_lowercase().contains("parse"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_authentication_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/version"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());

    let output = run(&config, &["pool", "list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Authentication rejected"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_member_list_order() {
    let server = MockServer::start().await;
    mount_device(&server).await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());

    let output = run(&config, &["--pool", "web-pool", "member", "list"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let a = out.find("a [up]").unwrap();
    let b = out.find("b [down]").unwrap();
    assert!(a < b);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_member_stats_up_only() {
    let server = MockServer::start().await;
    mount_device(&server).await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());

    let output = run(&config, &["--pool", "web-pool", "member", "stats", "all"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("curConns"));
    assert!(out.contains("totConns"));
    assert!(out.contains("120"));
    assert!(!out.lines().any(|l| l.trim_start().starts_with("b ")));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_member_disable_non_member() {
    let server = MockServer::start().await;
    mount_device(&server).await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());

    let output = run(&config, &["--pool", "web-pool", "member", "disable", "zzz"]);
    assert!(!output.status.success());
    assert!(!stdout(&output).contains("disabled"));
    assert!(stderr(&output).contains("Member zzz on pool web-pool not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_member_without_pool() {
    let server = MockServer::start().await;
    mount_device(&server).await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());

    let output = run(&config, &["member", "list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--pool"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_member_restart_unimplemented() {
    let server = MockServer::start().await;
    mount_device(&server).await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());

    let output = run(&config, &["--pool", "web-pool", "member", "restart"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("not implemented"));
}
