//! System package provisioning per distribution family
//!
//! Each known family maps to exactly one package-manager invocation covering
//! the editor's system dependencies: the Python runtime, pip, the tk GUI
//! bindings, git, and two HTTP fetch tools. An unknown family is a warning,
//! not an error: automated installation is skipped and the user installs by
//! hand. Package managers no-op on satisfied dependencies, so the step is
//! safely re-runnable.

use std::time::Duration;

use crate::error::{Result, SetupError};
use crate::platform::DistroFamily;
use crate::process::{CommandRunner, CommandSpec};
use crate::ui;

/// Deadline for a full package-manager run (downloads included)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(900);

/// Deadline for a package index refresh
const REFRESH_TIMEOUT: Duration = Duration::from_secs(300);

/// Index refresh preceding the install, where the family needs one.
///
/// apt installs fail outright against stale or empty indexes on a fresh
/// host; the other families' managers refresh as part of the install.
pub fn index_refresh_command(family: DistroFamily) -> Option<CommandSpec> {
    match family {
        DistroFamily::Debian => {
            Some(CommandSpec::new("apt-get", &["update"]).with_timeout(REFRESH_TIMEOUT))
        }
        _ => None,
    }
}

/// The single package-manager install invocation for a family, or `None` for Unknown
pub fn package_command(family: DistroFamily) -> Option<CommandSpec> {
    let spec = match family {
        DistroFamily::Debian => CommandSpec::new(
            "apt-get",
            &[
                "install",
                "-y",
                "python3",
                "python3-pip",
                "python3-venv",
                "python3-tk",
                "git",
                "curl",
                "wget",
            ],
        ),
        DistroFamily::RedHat => CommandSpec::new(
            "dnf",
            &[
                "install",
                "-y",
                "python3",
                "python3-pip",
                "python3-tkinter",
                "git",
                "curl",
                "wget",
            ],
        ),
        DistroFamily::Arch => CommandSpec::new(
            "pacman",
            &[
                "-S",
                "--noconfirm",
                "--needed",
                "python",
                "python-pip",
                "tk",
                "git",
                "curl",
                "wget",
            ],
        ),
        DistroFamily::Suse => CommandSpec::new(
            "zypper",
            &[
                "install",
                "-y",
                "python3",
                "python3-pip",
                "python3-tk",
                "git",
                "curl",
                "wget",
            ],
        ),
        DistroFamily::Unknown => return None,
    };
    Some(spec.with_timeout(INSTALL_TIMEOUT))
}

/// Prefix a package-manager invocation with sudo when available
fn elevate(runner: &dyn CommandRunner, spec: CommandSpec) -> CommandSpec {
    if runner.which("sudo").is_some() {
        let mut args = vec![spec.program.clone()];
        args.extend(spec.args.iter().cloned());
        CommandSpec {
            program: "sudo".to_string(),
            args,
            timeout: spec.timeout,
        }
    } else {
        spec
    }
}

/// Install system packages for the detected family
pub fn provision_packages(runner: &dyn CommandRunner, family: DistroFamily) -> Result<()> {
    let Some(spec) = package_command(family) else {
        ui::warning(
            "Unknown distribution; skipping automated package install. \
             Install python3, pip, tk bindings, git, curl and wget manually.",
        );
        return Ok(());
    };

    let manager = spec.program.clone();
    ui::info(&format!(
        "Installing system packages via {manager} ({} family)",
        family.as_str()
    ));

    if let Some(refresh) = index_refresh_command(family) {
        let refresh = elevate(runner, refresh);
        let status = runner.run_interactive(&refresh)?;
        if status != 0 {
            // Cached indexes may still satisfy the install; only the
            // install invocation itself is fatal
            ui::warning(&format!("Package index refresh exited with status {status}"));
        }
    }

    let spec = elevate(runner, spec);
    // Interactive so sudo can prompt for a password
    let status = runner.run_interactive(&spec)?;
    if status != 0 {
        return Err(SetupError::PackageInstallFailed {
            family: family.as_str().to_string(),
            reason: format!("{manager} exited with status {status}"),
        });
    }

    ui::success("System packages installed");
    Ok(())
}
