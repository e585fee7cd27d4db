//! Named file templates with typed substitution parameters
//!
//! Generated file content lives here, decoupled from the orchestration logic
//! in the scaffolder. Each template is rendered against [`TemplateParams`]
//! (workspace path, application name, setup binary path); nothing else may
//! appear as a placeholder.

use std::path::{Path, PathBuf};

/// Substitution parameters available to every template
#[derive(Debug, Clone)]
pub struct TemplateParams {
    /// Absolute workspace root
    pub workspace: PathBuf,
    /// Application display name
    pub app_name: String,
    /// Path the maintenance scripts invoke this binary through.
    ///
    /// The generated scripts must keep working when the binary was never
    /// put on PATH, so this records where the installing binary actually
    /// lives rather than assuming a bare program name resolves.
    pub setup_bin: PathBuf,
}

impl TemplateParams {
    pub fn new(workspace: &Path) -> Self {
        let setup_bin = std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("geminide-setup"));
        Self {
            workspace: workspace.to_path_buf(),
            app_name: "Geminide".to_string(),
            setup_bin,
        }
    }

    pub fn with_setup_bin(mut self, setup_bin: &Path) -> Self {
        self.setup_bin = setup_bin.to_path_buf();
        self
    }
}

/// The fixed set of generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    LoggingConf,
    EnvExample,
    Requirements,
    RequirementsDev,
    Readme,
    RunScript,
    DevScript,
    VerifyScript,
    UninstallScript,
    CloudSetupScript,
    DesktopEntry,
}

impl Template {
    /// Target path relative to the workspace root.
    ///
    /// The desktop entry is the one artifact that lives outside the workspace;
    /// its install path comes from [`crate::desktop`], not from here.
    pub fn relative_path(self) -> &'static str {
        match self {
            Template::LoggingConf => "config/logging.conf",
            Template::EnvExample => "config/.env.example",
            Template::Requirements => "requirements.txt",
            Template::RequirementsDev => "requirements-dev.txt",
            Template::Readme => "README.md",
            Template::RunScript => "bin/run.sh",
            Template::DevScript => "bin/dev.sh",
            Template::VerifyScript => "bin/verify.sh",
            Template::UninstallScript => "bin/uninstall.sh",
            Template::CloudSetupScript => "bin/setup_gcloud.sh",
            Template::DesktopEntry => "geminide.desktop",
        }
    }

    /// Whether the rendered file must be executable
    pub fn executable(self) -> bool {
        matches!(
            self,
            Template::RunScript
                | Template::DevScript
                | Template::VerifyScript
                | Template::UninstallScript
                | Template::CloudSetupScript
        )
    }

    fn source(self) -> &'static str {
        match self {
            Template::LoggingConf => LOGGING_CONF,
            Template::EnvExample => ENV_EXAMPLE,
            Template::Requirements => REQUIREMENTS,
            Template::RequirementsDev => REQUIREMENTS_DEV,
            Template::Readme => README,
            Template::RunScript => RUN_SH,
            Template::DevScript => DEV_SH,
            Template::VerifyScript => VERIFY_SH,
            Template::UninstallScript => UNINSTALL_SH,
            Template::CloudSetupScript => SETUP_GCLOUD_SH,
            Template::DesktopEntry => DESKTOP_ENTRY,
        }
    }

    /// Render the template against the given parameters
    pub fn render(self, params: &TemplateParams) -> String {
        self.source()
            .replace("{{workspace}}", &params.workspace.display().to_string())
            .replace("{{app_name}}", &params.app_name)
            .replace("{{setup_bin}}", &params.setup_bin.display().to_string())
    }
}

const LOGGING_CONF: &str = r"[loggers]
keys=root,geminide

[handlers]
keys=file,console

[formatters]
keys=detailed,simple

[logger_root]
level=WARNING
handlers=console

[logger_geminide]
level=DEBUG
handlers=file,console
qualname=geminide
propagate=0

[handler_file]
class=handlers.RotatingFileHandler
level=DEBUG
formatter=detailed
args=('{{workspace}}/logs/geminide.log', 'a', 10485760, 5)

[handler_console]
class=StreamHandler
level=INFO
formatter=simple
args=(sys.stdout,)

[formatter_detailed]
format=%(asctime)s - %(name)s - %(levelname)s - %(message)s
datefmt=%Y-%m-%d %H:%M:%S

[formatter_simple]
format=%(levelname)s: %(message)s
";

const ENV_EXAMPLE: &str = r"# Environment overrides for {{app_name}}
# Copy to .env and fill in values; config/config.json takes precedence.
GOOGLE_CLOUD_PROJECT=
GOOGLE_CLOUD_REGION=us-central1
GEMINI_MODEL=gemini-pro
GEMINIDE_DEBUG=0
";

const REQUIREMENTS: &str = r"requests>=2.31
keyring>=24.0
";

const REQUIREMENTS_DEV: &str = r"-r requirements.txt
pytest>=8.0
black>=24.0
flake8>=7.0
";

const README: &str = r"# {{app_name}} workspace

This directory was generated by geminide-setup and holds everything the
{{app_name}} editor needs at runtime:

- `config/` - configuration, logging rules, environment template
- `logs/` - runtime logs
- `venv/` - isolated Python environment
- `bin/` - launcher and maintenance scripts
- `main.py` - the editor entry point (installed separately)

Run `bin/setup_gcloud.sh` once to connect your Google Cloud project, then
start the editor with `bin/run.sh`.
";

const RUN_SH: &str = r#"#!/bin/bash
# Launch {{app_name}}
cd "{{workspace}}" || exit 1
source venv/bin/activate
exec python3 main.py "$@"
"#;

const DEV_SH: &str = r#"#!/bin/bash
# Launch {{app_name}} in debug mode with unbuffered output
cd "{{workspace}}" || exit 1
source venv/bin/activate
export GEMINIDE_DEBUG=1
export PYTHONUNBUFFERED=1
export PYTHONPATH="{{workspace}}"
exec python3 main.py --debug "$@"
"#;

const VERIFY_SH: &str = r#"#!/bin/bash
# Check the {{app_name}} installation
exec "{{setup_bin}}" --workspace "{{workspace}}" verify
"#;

const UNINSTALL_SH: &str = r#"#!/bin/bash
# Remove the {{app_name}} installation (interactive)
exec "{{setup_bin}}" --workspace "{{workspace}}" uninstall
"#;

const SETUP_GCLOUD_SH: &str = r#"#!/bin/bash
# Connect {{app_name}} to a Google Cloud project (interactive)
exec "{{setup_bin}}" --workspace "{{workspace}}" cloud-setup
"#;

const DESKTOP_ENTRY: &str = r"[Desktop Entry]
Type=Application
Name={{app_name}}
Comment=AI-powered code editor backed by Google Gemini
Exec={{workspace}}/bin/run.sh
Terminal=false
Categories=Development;IDE;
";
