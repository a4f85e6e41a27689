//! Integration tests for the CLI binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "author,citation,source,reference\n";

fn quote_clash() -> Command {
    Command::cargo_bin("quote-clash").unwrap()
}

/// Write both collections into a temp directory.
fn quote_files(rap: &str, authors: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rap.csv"), format!("{HEADER}{rap}")).unwrap();
    fs::write(dir.path().join("authors.csv"), format!("{HEADER}{authors}")).unwrap();
    dir
}

#[test]
fn help_lists_check() {
    quote_clash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_bundled_quotes() {
    quote_clash()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("rap"))
        .stdout(predicate::str::contains("author"))
        .stdout(predicate::str::contains("bundled"));
}

#[test]
fn check_local_files() {
    let dir = quote_files(
        "Nas,\"The world is yours, man\",N.Y. State of Mind,Illmatic\nNas,I never sleep,N.Y. State of Mind,Illmatic\n",
        "Albert Camus,One must imagine Sisyphus happy,The Myth of Sisyphus,1942\n",
    );
    quote_clash()
        .arg("check")
        .arg("--rap")
        .arg(dir.path().join("rap.csv"))
        .arg("--authors")
        .arg(dir.path().join("authors.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 authors"))
        .stdout(predicate::str::contains("rap.csv"));
}

#[test]
fn check_json_lists_counts_and_quotes() {
    let dir = quote_files(
        "Nas,\"The world is yours, man\",N.Y. State of Mind,Illmatic\n",
        "Albert Camus,One must imagine Sisyphus happy,The Myth of Sisyphus,1942\n",
    );
    let output = quote_clash()
        .arg("check")
        .arg("--json")
        .arg("--rap")
        .arg(dir.path().join("rap.csv"))
        .arg("--authors")
        .arg(dir.path().join("authors.csv"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["categories"][0]["category"], "rap");
    assert_eq!(report["categories"][0]["quotes"], 1);
    assert_eq!(report["categories"][1]["authors"], 1);
    assert_eq!(report["quotes"]["rap"][0]["citation"], "The world is yours, man");
    assert_eq!(report["quotes"]["author"][0]["category"], "author");
}

#[test]
fn check_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    quote_clash()
        .arg("check")
        .arg("--rap")
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("nope.csv"));
}

#[test]
fn check_empty_category_fails() {
    let dir = quote_files("Nas,The world is yours,N.Y. State of Mind,Illmatic\n", "");
    quote_clash()
        .arg("check")
        .arg("--authors")
        .arg(dir.path().join("authors.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no author quotes loaded"));
}
