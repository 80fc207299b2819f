//! Integration tests for the one-shot calc command.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn agecalc() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("agecalc"))
}

#[test]
fn calc_exact_birthday() {
    agecalc()
        .args(["calc", "2000-05-15", "--today", "2024-05-15", "--output", "quiet"])
        .assert()
        .success()
        .stdout("24 years and 0 months old\n");
}

#[test]
fn calc_day_before_birthday_borrows_a_month() {
    agecalc()
        .args(["calc", "2000-05-15", "--today", "2024-05-14", "--output", "quiet"])
        .assert()
        .success()
        .stdout("23 years and 11 months old\n");
}

#[test]
fn calc_negative_month_difference() {
    agecalc()
        .args(["calc", "2000-06-15", "--today", "2024-05-20", "--output", "quiet"])
        .assert()
        .success()
        .stdout("23 years and 11 months old\n");
}

#[test]
fn calc_multiple_dates_in_argument_order() {
    agecalc()
        .args([
            "calc",
            "2000-05-15",
            "2000-01-01",
            "--today",
            "2024-05-15",
            "--output",
            "quiet",
        ])
        .assert()
        .success()
        .stdout("24 years and 0 months old\n24 years and 4 months old\n");
}

#[test]
fn calc_table_output_has_columns_and_age() {
    agecalc()
        .args(["calc", "2000-05-15", "--today", "2024-05-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BIRTH DATE"))
        .stdout(predicate::str::contains("24 years and 0 months old"));
}

#[test]
fn calc_json_output_round_trips() {
    let output = agecalc()
        .args(["calc", "2000-05-15", "--today", "2024-05-14", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(rows[0]["birth_date"], "2000-05-15");
    assert_eq!(rows[0]["years"], 23);
    assert_eq!(rows[0]["months"], 11);
    assert_eq!(rows[0]["age"], "23 years and 11 months old");
}

#[test]
fn calc_rejects_malformed_input() {
    agecalc()
        .args(["calc", "2000/05/15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid date format. Please use YYYY-MM-DD.",
        ));
}

#[test]
fn calc_rejects_nonexistent_date() {
    agecalc()
        .args(["calc", "2023-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date. Please enter a valid date."));
}

#[test]
fn calc_rejects_malformed_today() {
    agecalc()
        .args(["calc", "2000-05-15", "--today", "not-a-date-at-all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn calc_requires_at_least_one_date() {
    agecalc().arg("calc").assert().failure();
}

#[test]
fn log_file_flag_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("agecalc.log");

    agecalc()
        .args(["--log-file"])
        .arg(&log_file)
        .args(["calc", "2000-05-15", "--today", "2024-05-15"])
        .assert()
        .success();

    assert!(log_file.exists());
}
