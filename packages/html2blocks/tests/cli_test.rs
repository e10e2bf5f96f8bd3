//! Command-line tests for the html2blocks binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_convert_file_to_stdout() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.arg("-i")
        .arg(fixture_path("release-notes.html"))
        .arg("--stdout");

    let output_pred = predicate::str::contains(r#""blockName": "heading""#)
        .and(predicate::str::contains(r#""blockName": "list""#))
        .and(predicate::str::contains(r#""url": "shot.png""#))
        .and(predicate::str::contains(r#""innerContent": ["#));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn test_convert_stdin_to_stdout() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.arg("--stdout").write_stdin("<h2>Test</h2>");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""level": 2"#));
}

#[test]
fn test_convert_to_output_file() {
    let dir = tempdir().expect("temp dir");
    let output = dir.path().join("blocks.json");

    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.arg("-i")
        .arg(fixture_path("release-notes.html"))
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generated 7 block(s)"));

    let content = fs::read_to_string(&output).expect("output written");
    let blocks: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(blocks.as_array().map(Vec::len), Some(7));
}

#[test]
fn test_yaml_format_with_namespace() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.args(["--stdout", "--format", "yaml", "--namespace", "core"])
        .write_stdin("<p>Hi</p>");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("blockName: core/paragraph"));
}

#[test]
fn test_client_ids_flag() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.args(["--stdout", "--client-ids"])
        .write_stdin("<p>a</p><p>b</p>");

    cmd.assert().success().stdout(
        predicate::str::contains(r#""clientId": "block-1""#)
            .and(predicate::str::contains(r#""clientId": "block-2""#)),
    );
}

#[test]
fn test_missing_input_file() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.args(["-i", "does-not-exist.html", "--stdout"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input file 'does-not-exist.html' not found"));
}

#[test]
fn test_empty_stdin() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.arg("--stdout").write_stdin("   \n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No HTML content to process"));
}

#[test]
fn test_no_output_method() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.arg("-i").arg(fixture_path("release-notes.html"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No output method specified"));
}

#[test]
fn test_invalid_namespace() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.args(["--stdout", "--namespace", "Core/Blocks"])
        .write_stdin("<p>Hi</p>");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid block namespace"));
}

#[test]
fn test_strict_mode_rejects_malformed_html() {
    let mut cmd = cargo_bin_cmd!("html2blocks");
    cmd.args(["--stdout", "--strict"])
        .write_stdin("<p>ok</p></div>");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("HTML parsing reported"));
}
