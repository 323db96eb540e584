//! End-to-end tests for the catatduit binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn catatduit() -> Command {
    Command::cargo_bin("catatduit").unwrap()
}

#[test]
fn parse_outputs_json_by_default() {
    catatduit()
        .args(["parse", "beli", "bakso", "15rb"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""intent":"expense""#))
        .stdout(predicate::str::contains(r#""amount":15000"#))
        .stdout(predicate::str::contains(r#""category":"Makanan""#));
}

#[test]
fn parse_text_format_shows_rupiah() {
    catatduit()
        .args(["parse", "gaji", "masuk", "5jt", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp 5.000.000"))
        .stdout(predicate::str::contains("Pemasukan"));
}

#[test]
fn parse_without_amount_warns_on_stderr() {
    catatduit()
        .args(["parse", "beli", "bakso", "enak"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""amount":0"#))
        .stderr(predicate::str::contains("No amount detected"));
}

#[test]
fn parse_omits_wallet_when_absent() {
    catatduit()
        .args(["parse", "beli", "pulsa", "50rb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wallet").not());
}

#[test]
fn scan_extracts_receipt_from_text_dump() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "INDOMARET").unwrap();
    writeln!(file, "Jl. Sudirman No. 1").unwrap();
    writeln!(file, "Indomie Goreng 2 x 3.500").unwrap();
    writeln!(file, "Aqua 600ml 5.000").unwrap();
    writeln!(file, "TOTAL Rp 12.000").unwrap();
    writeln!(file, "28/08/2026").unwrap();

    catatduit()
        .args(["scan", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""merchant":"Indomaret""#))
        .stdout(predicate::str::contains(r#""total":12000"#))
        .stdout(predicate::str::contains("rawText"));
}

#[test]
fn scan_honors_config_file() {
    let mut receipt = tempfile::NamedTempFile::new().unwrap();
    writeln!(receipt, "WARUNG MAKMUR").unwrap();
    writeln!(receipt, "TOTAL Rp 12.000").unwrap();

    // A config whose total range excludes 12.000.
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, r#"{{"min_total": 50000}}"#).unwrap();

    catatduit()
        .args([
            "scan",
            receipt.path().to_str().unwrap(),
            "--config",
            config.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""total":0"#));
}

#[test]
fn scan_empty_input_warns() {
    let file = tempfile::NamedTempFile::new().unwrap();

    catatduit()
        .args(["scan", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("manual review"));
}

#[test]
fn scan_missing_file_fails() {
    catatduit()
        .args(["scan", "/nonexistent/receipt.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn scan_fallback_emits_demo_receipt() {
    let file = tempfile::NamedTempFile::new().unwrap();

    catatduit()
        .args(["scan", file.path().to_str().unwrap(), "--fallback"])
        .assert()
        .success()
        .stderr(predicate::str::contains("demo receipt"))
        .stdout(predicate::str::contains(r#""confidence":0.75"#));
}

#[test]
fn demo_is_deterministic_with_seed() {
    let first = catatduit()
        .args(["demo", "--seed", "42"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    catatduit()
        .args(["demo", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::eq(first));
}

#[test]
fn demo_warns_about_synthetic_data() {
    catatduit()
        .args(["demo", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Demo data only"));
}

#[test]
fn demo_csv_format_lists_items() {
    catatduit()
        .args(["demo", "--seed", "1", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name,quantity,price,category"));
}
