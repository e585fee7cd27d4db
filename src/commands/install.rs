//! Install command CLI wrapper
//!
//! Resolves the workspace and delegates to operations/install.rs for all
//! sequencing and policy.

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::operations::install::{self, InstallOptions};
use crate::process::SystemRunner;
use crate::workspace::Workspace;

pub fn run(workspace: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let workspace = Workspace::resolve(workspace);
    let options = InstallOptions {
        force_config: args.force_config,
        skip_packages: args.skip_packages,
    };
    install::run(&SystemRunner, &workspace, options)
}
