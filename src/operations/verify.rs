//! Installation verification
//!
//! Runs every check and reports one pass/fail line per artifact; a failing
//! check never aborts the remainder of the checklist. The process exit status
//! reflects the overall result so scripts can gate on it.

use std::time::Duration;

use crate::process::{CommandRunner, CommandSpec};
use crate::ui;
use crate::workspace::Workspace;

const IMPORT_TIMEOUT: Duration = Duration::from_secs(10);

/// One checklist entry
#[derive(Debug, Clone)]
pub struct Check {
    pub label: String,
    pub ok: bool,
}

/// Python packages that must be importable inside the virtual environment
const REQUIRED_PYTHON_DEPS: &[&str] = &["requests", "keyring"];

/// Run every check, aborting none
pub fn collect_checks(runner: &dyn CommandRunner, workspace: &Workspace) -> Vec<Check> {
    let mut checks = Vec::new();

    checks.push(Check {
        label: "python3 runtime on PATH".to_string(),
        ok: runner.which("python3").is_some(),
    });

    let home = dirs::home_dir().unwrap_or_default();
    checks.push(Check {
        label: "gcloud CLI available".to_string(),
        ok: crate::provision::gcloud::find_gcloud(runner, &home).is_some(),
    });

    let venv_ok = workspace.venv_python().is_file();
    checks.push(Check {
        label: format!("virtual environment at {}", workspace.venv_dir().display()),
        ok: venv_ok,
    });

    for dep in REQUIRED_PYTHON_DEPS {
        checks.push(Check {
            label: format!("python package '{dep}' importable"),
            ok: venv_ok && import_succeeds(runner, workspace, dep),
        });
    }

    checks.push(Check {
        label: format!("configuration file {}", workspace.config_file().display()),
        ok: workspace.config_file().is_file(),
    });

    checks.push(Check {
        label: format!("editor entry point {}", workspace.main_entry().display()),
        ok: workspace.main_entry().is_file(),
    });

    checks
}

fn import_succeeds(runner: &dyn CommandRunner, workspace: &Workspace, package: &str) -> bool {
    let spec = CommandSpec::new(
        workspace.venv_python().display().to_string(),
        &["-c", &format!("import {package}")],
    )
    .with_timeout(IMPORT_TIMEOUT);
    runner.run(&spec).map(|o| o.success()).unwrap_or(false)
}

/// Print the checklist and return whether every check passed
pub fn run(runner: &dyn CommandRunner, workspace: &Workspace) -> bool {
    ui::heading(&format!("Verifying installation at {}", workspace.root.display()));

    let checks = collect_checks(runner, workspace);
    for check in &checks {
        ui::check(&check.label, check.ok);
    }

    let failed = checks.iter().filter(|c| !c.ok).count();
    if failed == 0 {
        ui::success("All checks passed");
        true
    } else {
        ui::error(&format!("{failed} of {} checks failed", checks.len()));
        false
    }
}
