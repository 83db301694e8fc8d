use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn verify_passes_for_clean_rule_set() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nsg-convert"));
    cmd.arg("verify")
        .arg(fixture("fixtures/rules-basic.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("verify rules=4"))
        .stdout(predicate::str::contains("result errors=0 warnings=0"));
}

#[test]
fn verify_fails_on_duplicate_names() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nsg-convert"));
    cmd.arg("verify")
        .arg(fixture("fixtures/rules-duplicate.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("verify failed: 1 errors"))
        .stdout(predicate::str::contains("duplicate_rule_name"));
}

#[test]
fn verify_reports_unrecognized_values_as_json() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nsg-convert"));
    cmd.arg("verify")
        .arg(fixture("fixtures/rules-invalid.toml"))
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"code\": \"unrecognized_protocol\""))
        .stdout(predicate::str::contains("\"code\": \"unrecognized_direction\""))
        .stdout(predicate::str::contains("\"errors\": 2"));
}

#[test]
fn verify_priority_clash_fails_only_in_strict_mode() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nsg-convert"));
    cmd.arg("verify")
        .arg(fixture("fixtures/rules-priority-clash.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate_priority"));

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nsg-convert"));
    cmd.arg("verify")
        .arg(fixture("fixtures/rules-priority-clash.toml"))
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("verify failed in strict mode: 1 warnings"));
}
