use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_list_systems() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(
        temp_dir.path().join("a.json"),
        r#"{ "family": "godel", "a": [[0.4, 0.2]], "b": [0.4] }"#,
    )
    .unwrap();
    fs::write(
        nested.join("b.json"),
        r#"{ "family": "max-lukasiewicz", "mode": "ge", "a": [[0.6], [0.1]], "b": [0.3, 0.1] }"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("matrix.json"), "[[0.5]]").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "not a system").unwrap();

    let mut cmd = Command::cargo_bin("fuzzrel").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 3 files, 2 systems"))
        .stdout(predicate::str::contains("godel (=), 1x2"))
        .stdout(predicate::str::contains("max-lukasiewicz (>=), 2x1"));
}
