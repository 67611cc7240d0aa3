//! Integration tests for the podex binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn podex() -> Command {
    Command::cargo_bin("podex").unwrap()
}

#[test]
fn help_lists_subcommands() {
    podex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("address"))
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn address_rejects_missing_file() {
    podex()
        .args(["address", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn address_rejects_non_pdf_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "plain text").unwrap();

    podex()
        .args(["address", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn quote_rejects_unknown_vendor() {
    podex()
        .args(["quote", "--vendor", "acme", "whatever.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown vendor"));
}

#[test]
fn quote_rejects_garbage_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, "not actually a pdf").unwrap();

    podex()
        .args(["quote", "--vendor", "accel", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PDF"));
}

#[test]
fn config_show_prints_defaults() {
    podex()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proximity_window"))
        .stdout(predicate::str::contains("JOURNEYS"));
}

#[test]
fn batch_rejects_empty_glob() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.pdf", dir.path().display());

    podex()
        .args(["batch", "--vendor", "ceildeck", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}
