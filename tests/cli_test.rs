// CLI tests for the repoatlas binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn repoatlas() -> Command {
    Command::cargo_bin("repoatlas").expect("binary exists")
}

fn create_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("app.py"),
        "import os\n\nclass App:\n    def run(self):\n        pass\n",
    )
    .unwrap();
    fs::write(dir.path().join("util.js"), "const fs = require('fs');\n").unwrap();
    dir
}

#[test]
fn test_analyze_text_output() {
    let dir = create_project();

    repoatlas()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis complete"))
        .stdout(predicate::str::contains("app.py"))
        .stdout(predicate::str::contains("-> os"));
}

#[test]
fn test_analyze_json_to_file() {
    let dir = create_project();
    let out = dir.path().join("report.json");

    repoatlas()
        .arg("analyze")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let report = fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert!(json["dependencies"]["app.py"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("os")));
    assert!(json["reverse_dependencies"]["fs"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("util.js")));
}

#[test]
fn test_analyze_missing_path_fails() {
    repoatlas()
        .arg("analyze")
        .arg("/nonexistent/repository")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_analyze_unknown_format_fails() {
    let dir = create_project();

    repoatlas()
        .arg("analyze")
        .arg(dir.path())
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}
