//! CLI smoke tests for the pw-triage binary
//!
//! Only the surfaces that need no Patchwork server: argument validation,
//! configuration errors, and the manifest-location check. Commands fail
//! before any network request is made.

use assert_cmd::Command;
use predicates::prelude::*;

fn pw_triage() -> Command {
    let mut cmd = Command::cargo_bin("pw-triage").unwrap();
    // Never pick up real settings from the developer's environment.
    cmd.env_remove("PW_SERVER")
        .env_remove("PW_PROJECT")
        .env_remove("PW_TOKEN")
        .env_remove("MAINTAINERS_FILE_PATH");
    cmd
}

#[test]
fn test_help_lists_commands() {
    pw_triage()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list-trees"))
        .stdout(predicate::str::contains("list-maintainers"))
        .stdout(predicate::str::contains("set-delegate"));
}

#[test]
fn test_missing_server_config_is_fatal() {
    pw_triage()
        .args(["list-trees", "--type", "patch", "2054"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pw-server"));
}

#[test]
fn test_missing_token_names_the_key() {
    pw_triage()
        .args(["list-trees", "--type", "patch", "2054"])
        .env("PW_SERVER", "https://patches.example.org/api/1.2")
        .env("PW_PROJECT", "dpdk")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pw-token"));
}

#[test]
fn test_missing_maintainers_path_is_fatal() {
    pw_triage()
        .args(["list-trees", "--type", "patch", "2054"])
        .env("PW_SERVER", "https://patches.example.org/api/1.2")
        .env("PW_PROJECT", "dpdk")
        .env("PW_TOKEN", "secret")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MAINTAINERS_FILE_PATH is not set"));
}

#[test]
fn test_unreadable_manifest_is_fatal() {
    pw_triage()
        .args(["list-maintainers", "--type", "series", "2054"])
        .env("PW_SERVER", "https://patches.example.org/api/1.2")
        .env("PW_PROJECT", "dpdk")
        .env("PW_TOKEN", "secret")
        .env("MAINTAINERS_FILE_PATH", "/nonexistent/MAINTAINERS")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read maintainers file"));
}

#[test]
fn test_type_is_required() {
    pw_triage()
        .args(["list-trees", "2054"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--type"));
}

#[test]
fn test_type_rejects_unknown_values() {
    pw_triage()
        .args(["list-trees", "--type", "bundle", "2054"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_id_must_be_numeric() {
    pw_triage()
        .args(["list-trees", "--type", "patch", "not-a-number"])
        .assert()
        .failure();
}

#[test]
fn test_rechecks_require_a_context() {
    pw_triage()
        .args(["list-rechecks", "--since", "2024-05-01T00:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--context"));
}
