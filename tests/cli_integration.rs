//! Integration tests for the witx binary.
//!
//! These run the compiled CLI with `--no-prompt` so no test ever blocks on
//! a terminal read.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running witx with an isolated home and settings.
fn witx(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("witx").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("WITX_SETTINGS")
        .env_remove("WITX_TRACE");
    cmd
}

#[test]
fn help_flag_works() {
    let home = TempDir::new().unwrap();
    witx(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("workitem"));
}

#[test]
fn missing_required_argument_fails_with_hint() {
    let home = TempDir::new().unwrap();
    witx(&home)
        .args(["--no-prompt", "workitem", "show", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Required parameter service-url not supplied.",
        ))
        .stderr(predicate::str::contains(
            "--service-url <collection URL>",
        ));
}

#[test]
fn errors_are_reported_in_quiet_mode() {
    let home = TempDir::new().unwrap();
    witx(&home)
        .args(["-q", "workitem", "show", "1234"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "error: Required parameter service-url not supplied.",
        ));
}

#[test]
fn debug_mode_reports_settings_path_and_error() {
    let home = TempDir::new().unwrap();
    witx(&home)
        .args(["--debug", "--no-prompt", "workitem", "show", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings: "))
        .stderr(predicate::str::contains(
            "error: Required parameter service-url not supplied.",
        ));
}

#[test]
fn invalid_work_item_id_is_a_parse_error() {
    let home = TempDir::new().unwrap();
    witx(&home)
        .args(["--no-prompt", "workitem", "show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'abc' for work-item-id"));
}

#[test]
fn settings_show_redacts_token() {
    let home = TempDir::new().unwrap();
    let settings = home.path().join("s.toml");
    std::fs::write(
        &settings,
        "service-url = \"https://dev.example.test/org\"\ntoken = \"very-secret\"\n",
    )
    .unwrap();

    witx(&home)
        .args(["--settings"])
        .arg(&settings)
        .args(["--json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://dev.example.test/org"))
        .stdout(predicate::str::contains("very-secret").not());
}

#[test]
fn settings_show_without_file() {
    let home = TempDir::new().unwrap();
    witx(&home)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No settings saved"));
}

#[test]
fn completion_generates_script() {
    let home = TempDir::new().unwrap();
    witx(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("witx"));
}
