//! Integration tests for the verify checklist

use assert_cmd::Command;
use predicates::prelude::*;

fn setup_cmd() -> Command {
    let mut cmd = Command::cargo_bin("geminide-setup").unwrap();
    // Keep an ambient GEMINIDE_WORKSPACE from leaking into assertions
    cmd.env_remove("GEMINIDE_WORKSPACE");
    cmd
}

/// Count the pass/fail lines in a checklist report
fn check_line_count(output: &[u8]) -> usize {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with('✓') || trimmed.starts_with('✗')
        })
        .count()
}

#[test]
fn test_verify_empty_workspace_reports_every_check() {
    let temp = tempfile::TempDir::new().unwrap();
    let workspace = temp.path().join("geminide");

    let output = setup_cmd()
        .args(["-w", &workspace.display().to_string(), "verify"])
        .output()
        .unwrap();

    // At least the workspace-local checks fail, so the exit is non-zero,
    // yet the full checklist is still printed: one line per check.
    assert!(!output.status.success());
    assert_eq!(check_line_count(&output.stdout), 7);
}

#[test]
fn test_verify_reports_config_and_entry_point_labels() {
    let temp = tempfile::TempDir::new().unwrap();
    let workspace = temp.path().join("geminide");
    std::fs::create_dir_all(workspace.join("config")).unwrap();
    std::fs::write(workspace.join("config/config.json"), "{}").unwrap();

    setup_cmd()
        .args(["-w", &workspace.display().to_string(), "verify"])
        .assert()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("main.py"))
        .stdout(predicate::str::contains("virtual environment"))
        .stdout(predicate::str::contains("gcloud CLI"));
}

#[test]
fn test_verify_failure_summary_counts_failures() {
    let temp = tempfile::TempDir::new().unwrap();
    let workspace = temp.path().join("geminide");

    setup_cmd()
        .args(["-w", &workspace.display().to_string(), "verify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("checks failed"));
}
