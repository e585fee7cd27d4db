//! Workspace scaffolding
//!
//! Creates the directory tree, writes template files, and provisions the
//! isolated Python environment. Directory creation is idempotent. Template
//! files are written only when absent; `--force-config` opts into
//! overwriting, with the previous content backed up by the transaction so an
//! aborted run restores it.

use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{Result, SetupError};
use crate::file_ops;
use crate::process::{CommandRunner, CommandSpec};
use crate::templates::{Template, TemplateParams};
use crate::transaction::Transaction;
use crate::ui;
use crate::workspace::Workspace;

const VENV_TIMEOUT: Duration = Duration::from_secs(120);
const PIP_TIMEOUT: Duration = Duration::from_secs(600);

/// Templates owned by the scaffolder (launcher scripts live in `scripts.rs`)
const SCAFFOLD_TEMPLATES: &[Template] = &[
    Template::LoggingConf,
    Template::EnvExample,
    Template::Requirements,
    Template::RequirementsDev,
    Template::Readme,
];

/// Create the workspace directory tree (pre-existing directories are fine)
pub fn create_tree(workspace: &Workspace, tx: &mut Transaction) -> Result<()> {
    for dir in [
        workspace.root.clone(),
        workspace.config_dir(),
        workspace.logs_dir(),
        workspace.bin_dir(),
    ] {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| SetupError::FileWriteFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            tx.track_dir_created(&dir);
        }
    }
    ui::success(&format!("Workspace tree ready at {}", workspace.root.display()));
    Ok(())
}

/// Write one generated file, honoring the overwrite policy
fn write_managed_file(
    workspace: &Workspace,
    tx: &mut Transaction,
    relative_path: &str,
    content: &str,
    force: bool,
) -> Result<()> {
    let target = workspace.root.join(relative_path);
    if target.exists() {
        if !force {
            ui::info(&format!("Keeping existing {relative_path}"));
            return Ok(());
        }
        tx.backup_file(&target)?;
    } else {
        tx.track_file_created(&target);
    }
    file_ops::atomic_replace(&target, content)?;
    ui::success(&format!("Wrote {relative_path}"));
    Ok(())
}

/// Write config and template files into the workspace
pub fn write_templates(workspace: &Workspace, tx: &mut Transaction, force: bool) -> Result<()> {
    let params = TemplateParams::new(&workspace.root);

    write_managed_file(
        workspace,
        tx,
        "config/config.json",
        &AppConfig::default_template()?,
        force,
    )?;

    for template in SCAFFOLD_TEMPLATES {
        write_managed_file(
            workspace,
            tx,
            template.relative_path(),
            &template.render(&params),
            force,
        )?;
    }
    Ok(())
}

/// Create the isolated Python environment and install the dependency manifest
pub fn provision_venv(runner: &dyn CommandRunner, workspace: &Workspace) -> Result<()> {
    let venv = workspace.venv_dir();
    if workspace.venv_python().is_file() {
        ui::info("Virtual environment already present");
    } else {
        ui::info("Creating virtual environment");
        let output = runner.run(
            &CommandSpec::new(
                "python3",
                &["-m", "venv", &venv.display().to_string()],
            )
            .with_timeout(VENV_TIMEOUT),
        )?;
        if !output.success() {
            return Err(SetupError::VenvCreateFailed {
                path: venv.display().to_string(),
                reason: output.stderr.trim().to_string(),
            });
        }
    }

    ui::info("Installing Python dependencies into the virtual environment");
    let output = runner.run(
        &CommandSpec::new(
            workspace.venv_pip().display().to_string(),
            &["install", "-r", &workspace.requirements_file().display().to_string()],
        )
        .with_timeout(PIP_TIMEOUT),
    )?;
    if !output.success() {
        return Err(SetupError::CommandFailed {
            program: "pip".to_string(),
            reason: format!("dependency install exited with status {}", output.status_code),
        });
    }

    ui::success("Isolated environment ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::RecordingRunner;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Workspace) {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::at(&temp.path().join("geminide"));
        (temp, ws)
    }

    #[test]
    fn test_create_tree_is_idempotent() {
        let (_temp, ws) = workspace();
        let mut tx = Transaction::new();
        create_tree(&ws, &mut tx).unwrap();
        create_tree(&ws, &mut tx).unwrap();
        tx.commit();

        assert!(ws.config_dir().is_dir());
        assert!(ws.logs_dir().is_dir());
        assert!(ws.bin_dir().is_dir());
    }

    #[test]
    fn test_templates_written_on_first_run() {
        let (_temp, ws) = workspace();
        let mut tx = Transaction::new();
        create_tree(&ws, &mut tx).unwrap();
        write_templates(&ws, &mut tx, false).unwrap();
        tx.commit();

        assert!(ws.config_file().is_file());
        assert!(ws.root.join("config/logging.conf").is_file());
        assert!(ws.root.join("config/.env.example").is_file());
        assert!(ws.requirements_file().is_file());
        assert!(ws.root.join("requirements-dev.txt").is_file());
    }

    #[test]
    fn test_rerun_keeps_user_edits() {
        let (_temp, ws) = workspace();
        let mut tx = Transaction::new();
        create_tree(&ws, &mut tx).unwrap();
        write_templates(&ws, &mut tx, false).unwrap();
        tx.commit();

        std::fs::write(ws.config_file(), r#"{"edited": true}"#).unwrap();

        let mut tx = Transaction::new();
        write_templates(&ws, &mut tx, false).unwrap();
        tx.commit();

        assert_eq!(
            std::fs::read_to_string(ws.config_file()).unwrap(),
            r#"{"edited": true}"#
        );
    }

    #[test]
    fn test_force_overwrites_user_edits() {
        let (_temp, ws) = workspace();
        let mut tx = Transaction::new();
        create_tree(&ws, &mut tx).unwrap();
        write_templates(&ws, &mut tx, false).unwrap();
        tx.commit();

        std::fs::write(ws.config_file(), r#"{"edited": true}"#).unwrap();

        let mut tx = Transaction::new();
        write_templates(&ws, &mut tx, true).unwrap();
        tx.commit();

        let content = std::fs::read_to_string(ws.config_file()).unwrap();
        assert!(content.contains("google_cloud"));
    }

    #[test]
    fn test_scaffold_twice_yields_identical_path_set() {
        let (_temp, ws) = workspace();

        let run = |force: bool| {
            let mut tx = Transaction::new();
            create_tree(&ws, &mut tx).unwrap();
            write_templates(&ws, &mut tx, force).unwrap();
            tx.commit();
            let mut paths: Vec<_> = walkdir::WalkDir::new(&ws.root)
                .into_iter()
                .filter_map(|e| e.ok())
                .map(|e| e.path().to_path_buf())
                .collect();
            paths.sort();
            paths
        };

        let first = run(false);
        let second = run(false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_provision_venv_runs_python_then_pip() {
        let (_temp, ws) = workspace();
        let runner = RecordingRunner::new();
        provision_venv(&runner, &ws).unwrap();

        let invocations = runner.invocations.borrow();
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].program, "python3");
        assert!(invocations[0].args.iter().any(|a| a == "venv"));
        assert!(invocations[1].program.ends_with("venv/bin/pip"));
        assert!(invocations[1].args.iter().any(|a| a == "install"));
    }

    #[test]
    fn test_provision_venv_skips_creation_when_present() {
        let (_temp, ws) = workspace();
        std::fs::create_dir_all(ws.venv_dir().join("bin")).unwrap();
        std::fs::write(ws.venv_python(), "").unwrap();

        let runner = RecordingRunner::new();
        provision_venv(&runner, &ws).unwrap();

        // Only the pip install runs
        assert_eq!(runner.invocations.borrow().len(), 1);
    }

    #[test]
    fn test_venv_creation_failure_is_fatal() {
        let (_temp, ws) = workspace();
        let runner = RecordingRunner::new().with_reply("python3", 1, "");
        let err = provision_venv(&runner, &ws).unwrap_err();
        assert!(matches!(err, SetupError::VenvCreateFailed { .. }));
    }
}
