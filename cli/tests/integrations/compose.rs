use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn operands(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let left = dir.path().join("left.json");
    let right = dir.path().join("right.json");
    fs::write(&left, "[[0.25, 0.75], [1.0, 0.5]]").unwrap();
    fs::write(&right, "[[0.5, 1.0], [0.25, 0.0]]").unwrap();
    (left, right)
}

#[test]
fn test_cli_compose_max_min() {
    let temp_dir = TempDir::new().unwrap();
    let (left, right) = operands(&temp_dir);

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("compose").arg(&left).arg(&right).arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("[[0.25,0.25],[0.5,1.0]]\n"));
}

#[test]
fn test_cli_compose_named_table() {
    let temp_dir = TempDir::new().unwrap();
    let (left, right) = operands(&temp_dir);

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("compose")
        .arg(&left)
        .arg(&right)
        .arg("--with")
        .arg("min-alpha");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("min-alpha (2x2)"));
}

#[test]
fn test_cli_compose_unknown_composition() {
    let temp_dir = TempDir::new().unwrap();
    let (left, right) = operands(&temp_dir);

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("compose")
        .arg(&left)
        .arg(&right)
        .arg("--with")
        .arg("max-sum");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown composition: max-sum"));
}

#[test]
fn test_cli_compose_shape_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let left = temp_dir.path().join("left.json");
    fs::write(&left, "[[0.25, 0.75, 0.5]]").unwrap();

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("compose").arg(&left).arg(&left);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Dimension mismatch in compose"));
}

#[test]
fn test_cli_operators_catalog() {
    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("operators");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("probabilistic-sum"))
        .stdout(predicate::str::contains("max-lukasiewicz"))
        .stdout(predicate::str::contains("bounded-difference"));
}
