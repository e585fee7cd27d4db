//! Python runtime verification
//!
//! A resolvable `python3` is a hard requirement: the editor, its virtual
//! environment, and its dependencies all need it. Missing runtime aborts the
//! installer with a non-zero status.

use std::time::Duration;

use crate::error::{Result, SetupError};
use crate::process::{CommandRunner, CommandSpec};
use crate::ui;

const VERSION_TIMEOUT: Duration = Duration::from_secs(5);

/// Confirm `python3` resolves on PATH and report its version string
pub fn verify_runtime(runner: &dyn CommandRunner) -> Result<String> {
    if runner.which("python3").is_none() {
        return Err(SetupError::RuntimeMissing);
    }

    let output = runner.run(
        &CommandSpec::new("python3", &["--version"]).with_timeout(VERSION_TIMEOUT),
    )?;
    if !output.success() {
        return Err(SetupError::RuntimeMissing);
    }

    // `python3 --version` printed to stderr before 3.4
    let version = if output.stdout.trim().is_empty() {
        output.stderr.trim().to_string()
    } else {
        output.stdout.trim().to_string()
    };

    ui::success(&format!("Runtime available: {version}"));
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::RecordingRunner;

    #[test]
    fn test_missing_runtime_is_fatal() {
        let runner = RecordingRunner::new();
        let err = verify_runtime(&runner).unwrap_err();
        assert!(matches!(err, SetupError::RuntimeMissing));
        // No version probe without a resolvable binary
        assert!(runner.invocations.borrow().is_empty());
    }

    #[test]
    fn test_reports_version_from_stdout() {
        let runner = RecordingRunner::new()
            .with_on_path(&["python3"])
            .with_reply("python3", 0, "Python 3.12.3\n");
        let version = verify_runtime(&runner).unwrap();
        assert_eq!(version, "Python 3.12.3");
    }

    #[test]
    fn test_broken_runtime_is_fatal() {
        let runner = RecordingRunner::new()
            .with_on_path(&["python3"])
            .with_reply("python3", 127, "");
        let err = verify_runtime(&runner).unwrap_err();
        assert!(matches!(err, SetupError::RuntimeMissing));
    }
}
