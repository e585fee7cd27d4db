//! Cloud-setup command CLI wrapper

use std::path::PathBuf;

use crate::error::{Result, SetupError};
use crate::operations::cloud;
use crate::process::SystemRunner;
use crate::workspace::Workspace;

pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let workspace = Workspace::resolve(workspace);
    if !workspace.exists() {
        return Err(SetupError::WorkspaceNotFound {
            path: workspace.root.display().to_string(),
        });
    }
    cloud::run(&SystemRunner, &workspace)
}
