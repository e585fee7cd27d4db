//! Google Cloud setup helper
//!
//! Three strictly sequential stages, each gated on the previous one:
//! authenticate, select a project, enable the required service APIs. There is
//! no rollback across stages — a failure at stage 2 leaves the stage-1
//! session intact, which is the least surprising behavior for an interactive
//! helper.

use std::time::Duration;

use inquire::Text;

use crate::config::AppConfig;
use crate::error::{Result, SetupError};
use crate::process::{CommandRunner, CommandSpec};
use crate::ui;
use crate::workspace::Workspace;

const LIST_TIMEOUT: Duration = Duration::from_secs(30);
const ENABLE_TIMEOUT: Duration = Duration::from_secs(120);

/// Service APIs the editor needs enabled on the selected project
pub const REQUIRED_APIS: &[&str] = &[
    "aiplatform.googleapis.com",
    "cloudresourcemanager.googleapis.com",
];

pub fn run(runner: &dyn CommandRunner, workspace: &Workspace) -> Result<()> {
    authenticate(runner)?;

    let project_id = prompt_project_id(runner)?;
    select_project(runner, workspace, &project_id)?;

    enable_apis(runner)?;

    ui::success("Google Cloud setup complete");
    Ok(())
}

/// Stage 1: interactive login; validation is the tool's own exit status
fn authenticate(runner: &dyn CommandRunner) -> Result<()> {
    ui::heading("Stage 1/3: Authenticate with Google Cloud");
    let status = runner.run_interactive(&CommandSpec::new("gcloud", &["auth", "login"]))?;
    if status != 0 {
        return Err(SetupError::CloudStageFailed {
            stage: "authenticate".to_string(),
            reason: format!("gcloud auth login exited with status {status}"),
        });
    }
    Ok(())
}

/// List projects and prompt for an id; empty input is fatal
fn prompt_project_id(runner: &dyn CommandRunner) -> Result<String> {
    ui::heading("Stage 2/3: Select a project");

    let output = runner.run(
        &CommandSpec::new("gcloud", &["projects", "list"]).with_timeout(LIST_TIMEOUT),
    )?;
    if output.success() && !output.stdout.trim().is_empty() {
        println!("{}", output.stdout.trim_end());
    } else {
        ui::warning("Could not list projects; enter the id manually");
    }

    let answer = Text::new("Project id:").prompt()?;
    let project_id = answer.trim().to_string();
    if project_id.is_empty() {
        return Err(SetupError::ProjectIdEmpty);
    }
    Ok(project_id)
}

/// Stage 2: set the active project and patch the workspace configuration
pub fn select_project(
    runner: &dyn CommandRunner,
    workspace: &Workspace,
    project_id: &str,
) -> Result<()> {
    let status = runner.run_interactive(&CommandSpec::new(
        "gcloud",
        &["config", "set", "project", project_id],
    ))?;
    if status != 0 {
        return Err(SetupError::CloudStageFailed {
            stage: "select-project".to_string(),
            reason: format!("gcloud config set project exited with status {status}"),
        });
    }

    if patch_config_project(workspace, project_id)? {
        ui::success(&format!(
            "Set google_cloud.project_id = {project_id} in {}",
            workspace.config_file().display()
        ));
    }
    Ok(())
}

/// Patch `google_cloud.project_id` in place via typed load + atomic replace.
///
/// A missing or unparseable config file degrades to a warning asking the user
/// to edit manually; it never fails the stage.
pub fn patch_config_project(workspace: &Workspace, project_id: &str) -> Result<bool> {
    match AppConfig::load(&workspace.config_file()) {
        Ok(mut config) => {
            config.google_cloud.project_id = project_id.to_string();
            config.save(&workspace.config_file())?;
            Ok(true)
        }
        Err(SetupError::ConfigNotFound { .. } | SetupError::ConfigParseFailed { .. }) => {
            ui::warning(&format!(
                "Could not update {}; set google_cloud.project_id = \"{project_id}\" manually",
                workspace.config_file().display()
            ));
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Stage 3: enable the required service APIs
pub fn enable_apis(runner: &dyn CommandRunner) -> Result<()> {
    ui::heading("Stage 3/3: Enable required APIs");

    let mut args = vec!["services", "enable"];
    args.extend_from_slice(REQUIRED_APIS);
    let output = runner.run(&CommandSpec::new("gcloud", &args).with_timeout(ENABLE_TIMEOUT))?;
    if !output.success() {
        return Err(SetupError::CloudStageFailed {
            stage: "enable-apis".to_string(),
            reason: format!("gcloud services enable exited with status {}", output.status_code),
        });
    }

    ui::success(&format!("Enabled: {}", REQUIRED_APIS.join(", ")));
    Ok(())
}
