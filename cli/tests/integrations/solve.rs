use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_system(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_cli_solve_consistent_system() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_system(
        &temp_dir,
        "godel.json",
        r#"{ "family": "godel", "a": [[0.4]], "b": [0.4] }"#,
    );

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("solve").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("godel (=) system 1x1: consistent"))
        .stdout(predicate::str::contains("[0.4]"))
        .stdout(predicate::str::contains("boundary 1"));
}

#[test]
fn test_cli_solve_inconsistent_system() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_system(
        &temp_dir,
        "luk.json",
        r#"{ "family": "max-lukasiewicz", "a": [[0.6], [0.05]], "b": [0.3, 0.9] }"#,
    );

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("solve").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("inconsistent"))
        .stdout(predicate::str::contains("Contradicting rows: 1"));
}

#[test]
fn test_cli_solve_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_system(
        &temp_dir,
        "godel.json",
        r#"{ "family": "godel", "a": [[0.4]], "b": [0.4] }"#,
    );

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("solve").arg(&file).arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["exist"], true);
    assert_eq!(value["boundary"], serde_json::json!([[0.4]]));
}

#[test]
fn test_cli_solve_extremal_only_with_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_system(
        &temp_dir,
        "system.json",
        r#"{ "family": "godel", "a": [[0.75, 0.25], [0.5, 0.5]], "b": [0.5, 0.25] }"#,
    );

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("solve")
        .arg(&file)
        .arg("--family")
        .arg("max-lukasiewicz")
        .arg("--mode")
        .arg("<=")
        .arg("--extremal-only");

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("extremal: [0.75, 0.75]\n"));
}

#[test]
fn test_cli_solve_reports_dimension_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_system(
        &temp_dir,
        "bad.json",
        r#"{ "family": "godel", "a": [[0.5, 0.5], [0.5, 0.5]], "b": [0.5] }"#,
    );

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("solve").arg(&file);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Dimension mismatch in solve"));
}

#[test]
fn test_cli_solve_node_limit() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_system(
        &temp_dir,
        "wide.json",
        r#"{ "family": "max-lukasiewicz",
             "a": [[1, 0.75, 1, 0.75], [0.75, 1, 0.75, 1]],
             "b": [0.5, 0.5] }"#,
    );

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("solve").arg(&file).arg("--max-nodes").arg("2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("max_search_nodes"));
}

#[test]
fn test_cli_solve_missing_file() {
    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("solve").arg("does-not-exist.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot read does-not-exist.json"));
}
