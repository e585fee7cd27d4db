//! Low-level file operations for scaffolding
//!
//! - Directory creation (ensure_parent_dir)
//! - Crash-safe file replacement (atomic_replace)
//! - Executable script writing

use std::path::Path;

use crate::error::{Result, SetupError};

fn file_write_error(path: &Path, e: std::io::Error) -> SetupError {
    SetupError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| file_write_error(parent, e))?;
    }
    Ok(())
}

/// Replace a file's content atomically: write to a temporary sibling, then
/// rename over the target. A crash mid-write leaves either the old or the new
/// content, never a partial file.
pub fn atomic_replace(target: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(target)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| file_write_error(target, e))?;
    std::fs::write(tmp.path(), content).map_err(|e| file_write_error(tmp.path(), e))?;
    tmp.persist(target)
        .map_err(|e| file_write_error(target, e.error))?;
    Ok(())
}

/// Write a file and mark it executable (0755 on Unix)
pub fn write_executable(target: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(target)?;
    std::fs::write(target, content).map_err(|e| file_write_error(target, e))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(target, std::fs::Permissions::from_mode(0o755))
            .map_err(|e| file_write_error(target, e))?;
    }
    Ok(())
}
