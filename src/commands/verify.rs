//! Verify command CLI wrapper

use std::path::PathBuf;

use crate::error::Result;
use crate::operations::verify;
use crate::process::SystemRunner;
use crate::workspace::Workspace;

/// Exit code when one or more checks fail
const EXIT_CHECKS_FAILED: i32 = 1;

pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let workspace = Workspace::resolve(workspace);
    let all_ok = verify::run(&SystemRunner, &workspace);
    if !all_ok {
        std::process::exit(EXIT_CHECKS_FAILED);
    }
    Ok(())
}
