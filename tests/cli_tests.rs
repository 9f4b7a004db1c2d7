//! End-to-end CLI tests. Each test builds its own workbook fixture with
//! rust_xlsxwriter in a temp directory and runs the binary against it.

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("sheet_inspector").unwrap()
}

/// Prediction-shaped workbook: a "soccer" sheet with three data rows (one
/// missing draw probability) and a trailing "stats" sheet.
fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("predictions.xlsx");
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("soccer").unwrap();

    let headers: &[(u16, &str)] = &[
        (0, "num"),
        (1, "home"),
        (2, "away"),
        (3, "league"),
        (4, "date"),
        (5, "1x2_h"),
        (6, "1x2_d"),
        (7, "1x2_a"),
        (17, "o_2.5"),
        (21, "o_3"),
        (23, "o_4"),
        (33, "u_2.5"),
        (37, "u_3"),
    ];
    for &(col, name) in headers {
        sheet.write_string(0, col, name).unwrap();
    }

    sheet.write_number(1, 0, 1.0).unwrap();
    sheet.write_string(1, 1, "Arsenal").unwrap();
    sheet.write_string(1, 2, "Chelsea").unwrap();
    sheet.write_string(1, 3, "Premier League").unwrap();
    sheet.write_string(1, 4, "5.03 18:30").unwrap();
    sheet.write_number(1, 5, 0.45).unwrap();
    sheet.write_number(1, 6, 0.27).unwrap();
    sheet.write_number(1, 7, 0.28).unwrap();
    sheet.write_number(1, 17, 0.61).unwrap();
    sheet.write_number(1, 21, 0.38).unwrap();
    sheet.write_number(1, 23, 0.12).unwrap();
    sheet.write_number(1, 33, 0.39).unwrap();
    sheet.write_number(1, 37, 0.62).unwrap();

    // Draw probability left blank on purpose.
    sheet.write_number(2, 0, 2.0).unwrap();
    sheet.write_string(2, 1, "Lyon").unwrap();
    sheet.write_string(2, 2, "Nice").unwrap();
    sheet.write_string(2, 3, "Ligue 1").unwrap();
    sheet.write_string(2, 4, "15.03 21:00").unwrap();
    sheet.write_number(2, 5, 0.52).unwrap();
    sheet.write_number(2, 7, 0.21).unwrap();
    sheet.write_number(2, 17, 0.55).unwrap();
    sheet.write_number(2, 21, 0.33).unwrap();
    sheet.write_number(2, 33, 0.45).unwrap();
    sheet.write_number(2, 37, 0.67).unwrap();

    sheet.write_number(3, 0, 3.0).unwrap();
    sheet.write_string(3, 1, "Ajax").unwrap();
    sheet.write_string(3, 2, "PSV").unwrap();
    sheet.write_string(3, 3, "Eredivisie").unwrap();
    sheet.write_string(3, 4, "postponed").unwrap();
    sheet.write_number(3, 5, 0.41).unwrap();
    sheet.write_number(3, 6, 0.3).unwrap();
    sheet.write_number(3, 7, 0.29).unwrap();
    sheet.write_number(3, 17, 0.5).unwrap();
    sheet.write_number(3, 21, 0.28).unwrap();
    sheet.write_number(3, 33, 0.5).unwrap();
    sheet.write_number(3, 37, 0.72).unwrap();

    let stats = workbook.add_worksheet();
    stats.set_name("stats").unwrap();
    stats.write_string(0, 0, "metric").unwrap();
    stats.write_string(0, 1, "value").unwrap();
    stats.write_string(1, 0, "scraped_at").unwrap();
    stats.write_string(1, 1, "2026-03-05").unwrap();

    workbook.save(&path).unwrap();
    path
}

#[test]
fn sheets_lists_every_worksheet_with_extents() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path());

    cmd()
        .args(["--file", path.to_str().unwrap(), "sheets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total worksheets: 2"))
        .stdout(predicate::str::contains("Worksheet 1: 'soccer'"))
        .stdout(predicate::str::contains("Rows: 4, Columns: 38"))
        .stdout(predicate::str::contains("Dimensions: A1:AL4"))
        .stdout(predicate::str::contains("Worksheet 2: 'stats'"))
        .stdout(predicate::str::contains("Rows: 2, Columns: 2"));
}

#[test]
fn examine_reports_headers_mapping_and_statistics() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path());

    cmd()
        .args(["--file", path.to_str().unwrap(), "examine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Worksheet: soccer"))
        .stdout(predicate::str::contains("Column  2: home"))
        .stdout(predicate::str::contains("HomeTeam"))
        .stdout(predicate::str::contains("OverTwoGoals (o_2.5)"))
        .stdout(predicate::str::contains("Total data rows: 3"))
        .stdout(predicate::str::contains("Matches for today (day"));
}

#[test]
fn detail_reports_null_percentages() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path());

    cmd()
        .args(["--file", path.to_str().unwrap(), "detail", "soccer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SHEET DETAIL: soccer"))
        .stdout(predicate::str::contains("Total matches in file: 3"))
        .stdout(predicate::str::contains("1x2_d: 1 null values (33.3%)"))
        .stdout(predicate::str::contains("1x2_h: 0 null values (0.0%)"));
}

#[test]
fn missing_workbook_exits_nonzero_with_diagnostic() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("sheets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("workbook not found"))
        .stderr(predicate::str::contains("Resources/predictions.xlsx"));
}

#[test]
fn workbook_is_found_at_the_conventional_path() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("Resources")).unwrap();
    write_fixture(&dir.path().join("Resources"));

    cmd()
        .current_dir(dir.path())
        .arg("sheets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total worksheets: 2"));
}

#[test]
fn workbook_is_found_at_a_fallback_path() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    cmd()
        .current_dir(dir.path())
        .arg("sheets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total worksheets: 2"));
}

#[test]
fn unknown_sheet_exits_nonzero_naming_it() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path());

    cmd()
        .args(["--file", path.to_str().unwrap(), "detail", "tennis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'tennis' not found"))
        .stderr(predicate::str::contains("soccer"));
}

#[test]
fn corrupt_workbook_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("predictions.xlsx");
    std::fs::write(&path, b"this is not a zip container").unwrap();

    cmd()
        .args(["--file", path.to_str().unwrap(), "examine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open workbook"));
}

#[test]
fn json_examine_is_valid_and_carries_the_counts() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path());

    let output = cmd()
        .args(["--file", path.to_str().unwrap(), "--json", "examine"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["sheet_name"], "soccer");
    assert_eq!(report["row_count"], 4);
    assert_eq!(report["column_count"], 38);
    assert_eq!(report["data_row_count"], 3);
    assert_eq!(report["headers"][1], "home");
    assert_eq!(report["mapped_columns"][0]["field"], "HomeTeam");
    assert_eq!(report["mapped_columns"][0]["sample"], "Arsenal");
    assert!(report["matches_today"].is_u64());
}

#[test]
fn json_detail_reports_quality_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path());

    let output = cmd()
        .args(["--file", path.to_str().unwrap(), "--json", "detail", "soccer"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let quality = report["quality"].as_array().unwrap();
    assert_eq!(quality.len(), 6);

    let draw = quality.iter().find(|q| q["name"] == "1x2_d").unwrap();
    assert_eq!(draw["null_count"], 1);
    assert_eq!(draw["null_percentage"], 33.3);
}

#[test]
fn repeated_runs_print_identical_reports() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path());

    let run = || {
        cmd()
            .args(["--file", path.to_str().unwrap(), "examine"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(), run());
}
