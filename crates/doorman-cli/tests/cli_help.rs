use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_overrides() {
    cargo_bin_cmd!("doorman")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--api-base"))
        .stdout(predicate::str::contains("--api-key"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("doorman")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_refuses_without_terminal() {
    cargo_bin_cmd!("doorman")
        .env("DOORMAN_HOME", std::env::temp_dir().join("doorman-test-home"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
