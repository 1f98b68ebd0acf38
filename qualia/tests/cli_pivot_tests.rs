// qualia/tests/cli_pivot_tests.rs
//
// End-to-end runs of the binary against a snapshot written to a temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn write_snapshot(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("assets.json");
    fs::write(
        &path,
        r#"[
            {"guid": "g1", "name": "ORDERS", "typeName": "Table",
             "connectorName": "A", "description": "Order facts"},
            {"guid": "g2", "name": "ORDERS_V", "typeName": "View",
             "connectorName": "A"},
            {"guid": "g3", "name": "CUSTOMERS", "typeName": "Table",
             "connectorName": "B", "description": "Customer master"}
        ]"#,
    )
    .expect("write snapshot");
    path
}

#[test]
fn test_pivot_flat_table_groups_and_sorts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write_snapshot(&dir);

    let mut cmd = Command::cargo_bin("qualia").expect("binary");
    cmd.arg("pivot")
        .arg(&snapshot)
        .args(["--by", "connection,assetType"])
        .args(["--measures", "assetCount"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 groups over 3 assets"))
        .stdout(predicate::str::contains("connection"))
        .stdout(predicate::str::contains("assetCount"));
}

#[test]
fn test_pivot_json_output_is_parseable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write_snapshot(&dir);

    let output = Command::cargo_bin("qualia")
        .expect("binary")
        .arg("pivot")
        .arg(&snapshot)
        .args(["--by", "connection"])
        .args(["--measures", "assetCount,descriptionCoverage"])
        .args(["--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let table: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON pivot table");
    let rows = table["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 2);
    // Connection A: 1 of 2 assets described -> 50.
    assert_eq!(rows[0]["keys"][0], "A");
    assert_eq!(rows[0]["values"]["assetCount"], 2.0);
    assert_eq!(rows[0]["values"]["descriptionCoverage"], 50.0);
    assert_eq!(rows[1]["keys"][0], "B");
}

#[test]
fn test_pivot_nested_rollup_renders_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write_snapshot(&dir);

    let mut cmd = Command::cargo_bin("qualia").expect("binary");
    cmd.arg("pivot")
        .arg(&snapshot)
        .args(["--by", "connection,assetType"])
        .args(["--measures", "assetCount"])
        .arg("--nested")
        .assert()
        .success()
        .stdout(predicate::str::contains("➜ A (2 assets)"))
        .stdout(predicate::str::contains("➜ B (1 assets)"));
}

#[test]
fn test_pivot_rejects_unknown_dimension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write_snapshot(&dir);

    let mut cmd = Command::cargo_bin("qualia").expect("binary");
    cmd.arg("pivot")
        .arg(&snapshot)
        .args(["--by", "popularity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dimension 'popularity'"));
}

#[test]
fn test_score_lists_assets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write_snapshot(&dir);

    let mut cmd = Command::cargo_bin("qualia").expect("binary");
    cmd.arg("score")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Scored 3 assets"))
        .stdout(predicate::str::contains("ORDERS"))
        .stdout(predicate::str::contains("Overall"));
}

#[test]
fn test_score_honors_custom_weights_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = write_snapshot(&dir);
    fs::write(
        dir.path().join("scoring-weights.yaml"),
        r#"
dimension_weights:
  completeness: 1.0
  accuracy: 0.0
  timeliness: 0.0
  consistency: 0.0
  usability: 0.0
"#,
    )
    .expect("write config");

    let output = Command::cargo_bin("qualia")
        .expect("binary")
        .arg("score")
        .arg(&snapshot)
        .args(["--config-dir"])
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let lines: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    // With all weight on completeness, overall == completeness for each asset.
    for line in lines.as_array().expect("array") {
        assert_eq!(line["score"]["overall"], line["score"]["completeness"]);
    }
}

#[test]
fn test_missing_snapshot_fails_cleanly() {
    let mut cmd = Command::cargo_bin("qualia").expect("binary");
    cmd.arg("pivot")
        .arg("/does/not/exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load snapshot"));
}
