//! Error types and handling for geminide-setup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Fatal errors (unsupported host, missing runtime) abort the installer with a
//! non-zero status; recoverable conditions (unknown distribution, missing
//! config during cloud setup) are downgraded to warnings at the call site and
//! never reach this type.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    // Host / platform errors
    #[error("Unsupported host platform: {os}")]
    #[diagnostic(
        code(geminide::platform::unsupported),
        help("geminide-setup targets Linux hosts with a desktop environment")
    )]
    UnsupportedHost { os: String },

    // Runtime errors
    #[error("Python 3 runtime not found on PATH")]
    #[diagnostic(
        code(geminide::runtime::missing),
        help(
            "Install python3 with your distribution's package manager and re-run 'geminide-setup install'"
        )
    )]
    RuntimeMissing,

    // Provisioning errors
    #[error("Package installation failed for {family} family: {reason}")]
    #[diagnostic(
        code(geminide::provision::packages_failed),
        help("Re-run with elevated privileges, or install the listed packages manually")
    )]
    PackageInstallFailed { family: String, reason: String },

    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(geminide::provision::download_failed),
        help("Check network connectivity; the download is retried with backoff before failing")
    )]
    DownloadFailed { url: String, reason: String },

    #[error("Failed to create virtual environment at {path}: {reason}")]
    #[diagnostic(code(geminide::workspace::venv_failed))]
    VenvCreateFailed { path: String, reason: String },

    // External command errors
    #[error("Command '{program}' failed: {reason}")]
    #[diagnostic(code(geminide::process::command_failed))]
    CommandFailed { program: String, reason: String },

    #[error("Command '{program}' timed out after {seconds}s")]
    #[diagnostic(
        code(geminide::process::timeout),
        help("The step did not complete within its deadline; check network connectivity")
    )]
    CommandTimeout { program: String, seconds: u64 },

    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(geminide::workspace::not_found),
        help("Run 'geminide-setup install' to create the workspace")
    )]
    WorkspaceNotFound { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(geminide::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(geminide::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Cloud setup errors
    #[error("Project id must not be empty")]
    #[diagnostic(
        code(geminide::cloud::empty_project),
        help("Pick one of the project ids listed by 'gcloud projects list'")
    )]
    ProjectIdEmpty,

    #[error("Cloud setup failed at stage '{stage}': {reason}")]
    #[diagnostic(code(geminide::cloud::stage_failed))]
    CloudStageFailed { stage: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(geminide::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(geminide::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(geminide::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        SetupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SetupError {
    fn from(err: inquire::InquireError) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = SetupError::RuntimeMissing;
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("geminide::runtime::missing".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let setup_err: SetupError = io_err.into();
        assert!(matches!(setup_err, SetupError::IoError { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("not json");
        let json_err = parse_result.unwrap_err();
        let setup_err: SetupError = json_err.into();
        assert!(matches!(setup_err, SetupError::ConfigParseFailed { .. }));
    }

    test_error_contains!(
        test_runtime_missing_error,
        SetupError::RuntimeMissing,
        "Python 3 runtime not found"
    );

    test_error_contains!(
        test_unsupported_host_error,
        SetupError::UnsupportedHost {
            os: "windows".to_string()
        },
        "Unsupported host platform",
        "windows"
    );

    test_error_contains!(
        test_package_install_failed_error,
        SetupError::PackageInstallFailed {
            family: "debian".to_string(),
            reason: "apt-get exited with status 100".to_string()
        },
        "Package installation failed",
        "debian"
    );

    test_error_contains!(
        test_download_failed_error,
        SetupError::DownloadFailed {
            url: "https://sdk.cloud.google.com".to_string(),
            reason: "connection reset".to_string()
        },
        "Failed to download",
        "sdk.cloud.google.com"
    );

    test_error_contains!(
        test_command_timeout_error,
        SetupError::CommandTimeout {
            program: "curl".to_string(),
            seconds: 120
        },
        "timed out after 120s"
    );

    test_error_contains!(
        test_empty_project_error,
        SetupError::ProjectIdEmpty,
        "Project id must not be empty"
    );
}
