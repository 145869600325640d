use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn billex() -> Command {
    Command::cargo_bin("billex").unwrap()
}

const CLOUDXP_TEXT: &str = "\
TAX INVOICE (ORIGINAL)

Account Number: 100234567
Invoice Number: CXP2025001234
Invoice Date: 15.11.2025
GST Registration Number: 27AABCA1234F1Z5

Billed To: ACME COMMUNICATIONS PRIVATE LIMITED
";

#[test]
fn help_lists_subcommands() {
    billex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("detect"));
}

#[test]
fn detect_identifies_cloudxp_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.txt");
    fs::write(&input, CLOUDXP_TEXT).unwrap();

    billex()
        .arg("detect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudxp"));
}

#[test]
fn detect_reports_unknown_layout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("memo.txt");
    fs::write(&input, "Quarterly review notes, nothing invoice-like.").unwrap();

    billex()
        .arg("detect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));
}

#[test]
fn process_emits_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.txt");
    fs::write(&input, CLOUDXP_TEXT).unwrap();

    billex()
        .arg("process")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"invoice_no\": \"CXP2025001234\""))
        .stdout(predicate::str::contains("\"gst_state\": \"Maharashtra\""));
}

#[test]
fn process_rejects_missing_file() {
    billex()
        .arg("process")
        .arg("no-such-file.txt")
        .assert()
        .failure();
}

#[test]
fn batch_summary_writes_tally_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoice.txt");
    fs::write(&input, CLOUDXP_TEXT).unwrap();

    billex()
        .arg("batch")
        .arg(dir.path().join("*.txt").to_str().unwrap())
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--summary")
        .assert()
        .success();

    let csv = fs::read_to_string(dir.path().join("tally.csv")).unwrap();
    assert!(csv.contains("Sr. No."));
    assert!(csv.contains("CLOUDXP"));
    assert!(csv.contains("CXP2025001234"));
}
