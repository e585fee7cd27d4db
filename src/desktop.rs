//! Desktop-menu integration
//!
//! The one artifact living outside the workspace: a `.desktop` entry under
//! the user's applications directory pointing at the workspace launcher by
//! absolute path. Created on install, removed on uninstall.

use std::path::PathBuf;

use crate::error::{Result, SetupError};
use crate::file_ops;
use crate::templates::{Template, TemplateParams};

const ENTRY_FILE_NAME: &str = "geminide.desktop";

/// Path of the desktop entry for the current user
pub fn entry_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("applications").join(ENTRY_FILE_NAME))
}

/// Write the desktop entry referencing the workspace launcher
pub fn install_entry(params: &TemplateParams) -> Result<PathBuf> {
    let path = entry_path().ok_or_else(|| SetupError::IoError {
        message: "Could not determine the user data directory for desktop entries".to_string(),
    })?;
    file_ops::atomic_replace(&path, &Template::DesktopEntry.render(params))?;
    Ok(path)
}

/// Remove the desktop entry if present; reports whether anything was removed
pub fn remove_entry() -> Result<bool> {
    let Some(path) = entry_path() else {
        return Ok(false);
    };
    if path.exists() {
        std::fs::remove_file(&path).map_err(|e| SetupError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_path_is_under_applications() {
        if let Some(path) = entry_path() {
            assert!(path.ends_with("applications/geminide.desktop"));
        }
    }

    #[test]
    fn test_rendered_entry_references_launcher() {
        let params = TemplateParams::new(std::path::Path::new("/opt/geminide"));
        let rendered = Template::DesktopEntry.render(&params);
        assert!(rendered.contains("Exec=/opt/geminide/bin/run.sh"));
        assert!(rendered.contains("Type=Application"));
    }
}
