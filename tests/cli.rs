//! CLI integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("chunkplan.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn plan_emits_mapping_with_vendor_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        r#"
        [dependencies]
        react = "18.0.0"
        react-dom = "18.0.0"
        lodash = "4.0.0"
        "@babel/core" = "7.0.0"

        [patterns]
        prefix = ["react"]
        include = [["lodash", "utils"]]
        "#,
    );

    Command::cargo_bin("chunkplan")
        .unwrap()
        .args(["plan", "--compact", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(concat!(
            r#"{"react":["react","react-dom"],"utils":["lodash"],"vendor":["@babel/core"]}"#,
            "\n"
        ));
}

#[test]
fn plan_reads_dependencies_from_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        r#"
        [patterns]
        prefix = ["vue"]
        "#,
    );

    let manifest = dir.path().join("package.json");
    fs::write(
        &manifest,
        r#"{ "dependencies": { "vue": "^3.0.0", "pinia": "^2.0.0" } }"#,
    )
    .unwrap();

    Command::cargo_bin("chunkplan")
        .unwrap()
        .args(["plan", "--compact", "--config"])
        .arg(&config)
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(concat!(r#"{"vue":["vue"],"vendor":["pinia"]}"#, "\n"));
}

#[test]
fn plan_writes_mapping_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        r#"
        [dependencies]
        lodash = "4.0.0"
        "#,
    );

    let output = dir.path().join("chunks.json");

    Command::cargo_bin("chunkplan")
        .unwrap()
        .args(["plan", "--config"])
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"vendor\""));
    assert!(written.contains("\"lodash\""));
}

#[test]
fn check_accepts_valid_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        r#"
        [dependencies]
        react = "18.0.0"

        [patterns]
        prefix = ["react"]
        "#,
    );

    Command::cargo_bin("chunkplan")
        .unwrap()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("is valid"));
}

#[test]
fn check_rejects_reserved_vendor_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        r#"
        [patterns]
        include = [["lodash", "vendor"]]
        "#,
    );

    Command::cargo_bin("chunkplan")
        .unwrap()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn missing_config_file_fails_with_path_in_message() {
    Command::cargo_bin("chunkplan")
        .unwrap()
        .args(["plan", "--config", "no-such-file.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.toml"));
}
