//! Full bootstrap installation
//!
//! Runs the install steps in strict dependency order: platform detection,
//! package provisioning, runtime verification, gcloud provisioning, workspace
//! scaffolding, script generation, desktop integration. The filesystem steps
//! run inside a transaction so a mid-sequence failure rolls the workspace
//! back; package and SDK installs are host-global and deliberately left in
//! place (re-running them is a no-op).

use crate::desktop;
use crate::error::{Result, SetupError};
use crate::platform::DistroFamily;
use crate::process::CommandRunner;
use crate::provision;
use crate::templates::TemplateParams;
use crate::transaction::Transaction;
use crate::ui;
use crate::workspace::{Workspace, scaffold, scripts};

/// Install behavior switches from the CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Overwrite existing config/template files (backed up by the transaction)
    pub force_config: bool,
    /// Skip the system package step (unprivileged hosts, re-runs)
    pub skip_packages: bool,
}

pub fn run(runner: &dyn CommandRunner, workspace: &Workspace, options: InstallOptions) -> Result<()> {
    if std::env::consts::OS != "linux" {
        return Err(SetupError::UnsupportedHost {
            os: std::env::consts::OS.to_string(),
        });
    }

    ui::heading("Installing Geminide");

    let family = DistroFamily::detect();
    ui::info(&format!("Detected distribution family: {}", family.as_str()));

    if options.skip_packages {
        ui::info("Skipping system package installation (--skip-packages)");
    } else {
        provision::packages::provision_packages(runner, family)?;
    }

    provision::runtime::verify_runtime(runner)?;

    let home = dirs::home_dir().ok_or_else(|| SetupError::IoError {
        message: "Could not determine the user home directory".to_string(),
    })?;
    provision::gcloud::provision_gcloud(runner, &home)?;

    let mut tx = Transaction::new();
    scaffold::create_tree(workspace, &mut tx)?;
    scaffold::write_templates(workspace, &mut tx, options.force_config)?;
    scripts::emit_scripts(workspace, &mut tx)?;
    scaffold::provision_venv(runner, workspace)?;

    let params = TemplateParams::new(&workspace.root);
    if let Some(entry) = desktop::entry_path() {
        if entry.exists() {
            tx.backup_file(&entry)?;
        } else {
            tx.track_file_created(&entry);
        }
    }
    let entry = desktop::install_entry(&params)?;
    ui::success(&format!("Desktop entry installed at {}", entry.display()));

    tx.commit();

    print_summary(workspace);
    Ok(())
}

fn print_summary(workspace: &Workspace) {
    ui::heading("Installation complete");
    println!("  Workspace:     {}", workspace.root.display());
    println!("  Configuration: {}", workspace.config_file().display());
    println!("  Launcher:      {}", workspace.bin_dir().join("run.sh").display());
    println!();
    println!("Next steps:");
    println!("  1. Copy the editor entry point to {}", workspace.main_entry().display());
    println!(
        "  2. Connect your Google Cloud project: {}",
        workspace.bin_dir().join("setup_gcloud.sh").display()
    );
    println!("  3. Start the editor: {}", workspace.bin_dir().join("run.sh").display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_to_safe_behavior() {
        let options = InstallOptions::default();
        assert!(!options.force_config);
        assert!(!options.skip_packages);
    }
}
