//! Google Cloud CLI provisioning
//!
//! Idempotent: when `gcloud` already resolves (on PATH or under the user's
//! SDK directory) the step reports success without any network access.
//! Otherwise the vendor bootstrap script is fetched with an explicit timeout
//! and bounded retry/backoff, run non-interactively, and the current
//! process's PATH is extended so later install steps find the tool without a
//! shell restart.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Result, SetupError};
use crate::process::{self, CommandRunner, CommandSpec};
use crate::ui;

/// Vendor bootstrap endpoint; serves a shell installer
pub const SDK_INSTALL_URL: &str = "https://sdk.cloud.google.com";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);
const DOWNLOAD_ATTEMPTS: u32 = 3;
const DOWNLOAD_BACKOFF: Duration = Duration::from_secs(2);

/// Directory the vendor installer places binaries in
pub fn sdk_bin_dir(home: &Path) -> PathBuf {
    home.join("google-cloud-sdk").join("bin")
}

/// Resolve an existing gcloud binary, if any
pub fn find_gcloud(runner: &dyn CommandRunner, home: &Path) -> Option<PathBuf> {
    if let Some(path) = runner.which("gcloud") {
        return Some(path);
    }
    let sdk_gcloud = sdk_bin_dir(home).join("gcloud");
    sdk_gcloud.is_file().then_some(sdk_gcloud)
}

/// Install the Google Cloud CLI if it is not already present
pub fn provision_gcloud(runner: &dyn CommandRunner, home: &Path) -> Result<()> {
    if let Some(path) = find_gcloud(runner, home) {
        ui::success(&format!(
            "Google Cloud CLI already installed ({})",
            path.display()
        ));
        return Ok(());
    }

    ui::info("Google Cloud CLI not found; installing from vendor bootstrap");

    let script = tempfile::Builder::new()
        .prefix("gcloud-install-")
        .suffix(".sh")
        .tempfile()?;
    let script_path = script.path().to_path_buf();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Downloading {SDK_INSTALL_URL}"));

    let download_result =
        download_installer(runner, &script_path, DOWNLOAD_ATTEMPTS, DOWNLOAD_BACKOFF);
    spinner.finish_and_clear();
    download_result?;

    ui::info("Running Google Cloud SDK installer (this can take a few minutes)");
    let status = runner.run_interactive(
        &CommandSpec::new(
            "bash",
            &[
                &script_path.display().to_string(),
                "--disable-prompts",
                "--install-dir",
                &home.display().to_string(),
            ],
        )
        .with_timeout(INSTALL_TIMEOUT),
    )?;
    if status != 0 {
        return Err(SetupError::CommandFailed {
            program: "bash".to_string(),
            reason: format!("SDK installer exited with status {status}"),
        });
    }

    extend_process_path(&sdk_bin_dir(home));
    ui::success("Google Cloud CLI installed");
    ui::warning(&format!(
        "Add {} to PATH in your shell profile; this install only extends the current process",
        sdk_bin_dir(home).display()
    ));
    Ok(())
}

/// Fetch the vendor bootstrap script with bounded retry/backoff
fn download_installer(
    runner: &dyn CommandRunner,
    target: &Path,
    attempts: u32,
    backoff: Duration,
) -> Result<()> {
    process::retry_with_backoff(attempts, backoff, || {
        let output = runner.run(
            &CommandSpec::new(
                "curl",
                &["-fsSL", SDK_INSTALL_URL, "-o", &target.display().to_string()],
            )
            .with_timeout(DOWNLOAD_TIMEOUT),
        )?;
        if output.success() {
            Ok(())
        } else {
            Err(SetupError::DownloadFailed {
                url: SDK_INSTALL_URL.to_string(),
                reason: format!("curl exited with status {}", output.status_code),
            })
        }
    })
}

/// Prepend a directory to this process's PATH so subsequent steps resolve it
fn extend_process_path(dir: &Path) {
    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![dir.to_path_buf()];
    paths.extend(std::env::split_paths(&current));
    if let Ok(joined) = std::env::join_paths(paths) {
        // Single-threaded installer; no concurrent readers of the environment
        unsafe {
            std::env::set_var("PATH", joined);
        }
    }
}
