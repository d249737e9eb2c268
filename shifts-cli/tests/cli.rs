//! Command-line behaviour against the demo listings.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// `shifts` with an empty config file, so a developer's own config is ignored.
fn shifts(dir: &TempDir) -> Command {
    let config = dir.path().join("shifts.toml");
    std::fs::write(&config, "").unwrap();
    let mut cmd = Command::cargo_bin("shifts").unwrap();
    cmd.arg("--config").arg(&config);
    cmd
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("shifts")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn mock_list_prints_demo_rows() {
    let dir = tempdir().unwrap();
    shifts(&dir)
        .args(["--mock", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 shifts near 55.7558,37.6173"))
        .stdout(predicate::str::contains("[1001] Northwind Logistics  [promo]"))
        .stdout(predicate::str::contains("$2800  3 spots"))
        .stdout(predicate::str::contains("fully staffed"));
}

#[test]
fn mock_list_uses_overridden_position() {
    let dir = tempdir().unwrap();
    shifts(&dir)
        .args(["--mock", "--lat", "59.9343", "--lon", "30.3351", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("near 59.9343,30.3351"));
}

#[test]
fn mock_list_windows_rows() {
    let dir = tempdir().unwrap();
    shifts(&dir)
        .args(["--mock", "list", "--offset", "288", "--height", "96"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 1-4"));
}

#[test]
fn mock_list_scrolled_past_end() {
    let dir = tempdir().unwrap();
    shifts(&dir)
        .args(["--mock", "list", "--offset", "9600", "--height", "96"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 shifts near 55.7558,37.6173 (no rows in view)"))
        .stdout(predicate::str::contains("showing").not())
        .stdout(predicate::str::contains("[1001]").not());
}

#[test]
fn mock_show_prints_details() {
    let dir = tempdir().unwrap();
    shifts(&dir)
        .args(["--mock", "show", "1003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logo:    [C]"))
        .stdout(predicate::str::contains("$3200 + $800 bonus = $4000"))
        .stdout(predicate::str::contains("https://maps.google.com/?q=55.7423,37.629"))
        .stdout(predicate::str::contains("> Book This Shift"));
}

#[test]
fn mock_show_unknown_id_fails() {
    let dir = tempdir().unwrap();
    shifts(&dir)
        .args(["--mock", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No shift with id nope"));
}

#[test]
fn invalid_position_is_rejected() {
    let dir = tempdir().unwrap();
    shifts(&dir)
        .args(["--mock", "--lat", "123", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid coordinates"));
}

#[test]
fn missing_config_file_is_an_error() {
    Command::cargo_bin("shifts")
        .unwrap()
        .args(["--config", "/definitely/not/here.toml", "--mock", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn unreachable_host_reports_generic_error() {
    let dir = tempdir().unwrap();
    shifts(&dir)
        .args(["--base-url", "http://127.0.0.1:9", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch shifts"));
}
