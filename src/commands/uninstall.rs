//! Uninstall command CLI wrapper

use std::path::PathBuf;

use crate::desktop;
use crate::error::{Result, SetupError};
use crate::operations::uninstall;
use crate::workspace::Workspace;

pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let workspace = Workspace::resolve(workspace);
    // A stale desktop entry is still worth removing when the workspace is gone
    let has_desktop_entry = desktop::entry_path().is_some_and(|p| p.exists());
    if !workspace.exists() && !has_desktop_entry {
        return Err(SetupError::WorkspaceNotFound {
            path: workspace.root.display().to_string(),
        });
    }
    uninstall::run(&workspace)
}
