//! End-to-end tests for the failure paths of the `scatterview` binary.
//!
//! Only the paths that terminate before a window is opened are exercised
//! here; successful runs block on an interactive display and are covered by
//! the unit tests on `data_loader`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn scatterview() -> Command {
    Command::cargo_bin("scatterview").unwrap()
}

#[test]
fn missing_arguments_abort_with_usage() {
    scatterview()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_labels_abort_with_usage() {
    scatterview()
        .args(["data.csv", "time"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_input_file_is_reported() {
    scatterview()
        .args(["/no/such/file.csv", "time", "value"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot open input file"));
}

#[test]
fn non_numeric_field_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1,2").unwrap();
    writeln!(file, "foo,2").unwrap();
    file.flush().unwrap();

    scatterview()
        .arg(file.path())
        .args(["time", "value"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'foo' is not a number"));
}

#[test]
fn zero_stride_is_rejected() {
    scatterview()
        .args(["data.csv", "time", "value", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn non_integer_stride_is_rejected() {
    scatterview()
        .args(["data.csv", "time", "value", "2.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
