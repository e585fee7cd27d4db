//! geminide-setup - installer for the Geminide AI code editor
//!
//! Bootstraps a Linux host for the Geminide editor: detects the distribution,
//! installs system packages, verifies the Python runtime, provisions the
//! Google Cloud CLI, and scaffolds a relocatable workspace with an isolated
//! dependency environment and companion scripts.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod desktop;
mod error;
mod file_ops;
mod operations;
mod platform;
mod process;
mod provision;
mod templates;
mod transaction;
mod ui;
mod workspace;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.workspace, args),
        Commands::Verify => commands::verify::run(cli.workspace),
        Commands::Uninstall => commands::uninstall::run(cli.workspace),
        Commands::CloudSetup => commands::cloud_setup::run(cli.workspace),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
