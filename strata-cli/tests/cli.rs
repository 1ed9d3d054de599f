//! End-to-end tests of the `strata` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn synth_writes_the_assembly() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("strata")
        .unwrap()
        .current_dir(dir.path())
        .args(["synth", "--no-color", "--output", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Synthesized 1 stack(s)"));

    assert!(dir.path().join("out/opensearch-cluster.template.json").exists());
    assert!(dir.path().join("out/manifest.json").exists());
}

#[test]
fn synth_print_emits_the_template() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("strata")
        .unwrap()
        .current_dir(dir.path())
        .args(["synth", "--no-color", "--output", "out", "--print"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let template: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(template["Resources"].is_object());
    assert_eq!(template["Outputs"].as_object().unwrap().len(), 1);
}

#[test]
fn synth_respects_strata_toml_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("strata.toml"), "[app]\noutput_dir = \"plan\"\n").unwrap();

    Command::cargo_bin("strata")
        .unwrap()
        .current_dir(dir.path())
        .args(["synth", "--no-color"])
        .assert()
        .success();

    assert!(dir.path().join("plan/opensearch-cluster.template.json").exists());
}

#[test]
fn invalid_config_fails_with_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("strata.toml"), "[app]\nout = \"x\"\n").unwrap();

    Command::cargo_bin("strata")
        .unwrap()
        .current_dir(dir.path())
        .args(["synth", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
