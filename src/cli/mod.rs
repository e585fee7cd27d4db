//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;

/// geminide-setup - installer for the Geminide AI code editor
#[derive(Parser, Debug)]
#[command(
    name = "geminide-setup",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer and environment bootstrapper for the Geminide AI code editor",
    long_about = "geminide-setup provisions a Linux host for the Geminide editor: system \
                  packages, the Python runtime, the Google Cloud CLI, and a relocatable \
                  workspace with an isolated dependency environment.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  geminide-setup install                 \x1b[90m# Bootstrap into ~/geminide\x1b[0m\n   \
                  geminide-setup -w /opt/geminide install \x1b[90m# Custom workspace\x1b[0m\n   \
                  geminide-setup verify                  \x1b[90m# Checklist of installed artifacts\x1b[0m\n   \
                  geminide-setup cloud-setup             \x1b[90m# Connect a Google Cloud project\x1b[0m\n   \
                  geminide-setup uninstall               \x1b[90m# Interactive removal\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to ~/geminide)
    #[arg(long, short = 'w', global = true, env = "GEMINIDE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap the host and scaffold the workspace
    Install(InstallArgs),

    /// Check every installed artifact and report a pass/fail line per check
    Verify,

    /// Remove the desktop entry and optionally the whole workspace
    Uninstall,

    /// Authenticate, pick a project, and enable the required cloud APIs
    #[command(name = "cloud-setup")]
    CloudSetup,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
