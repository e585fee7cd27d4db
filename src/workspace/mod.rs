//! Workspace layout and resolution
//!
//! The workspace is the installer-owned directory tree holding every
//! generated artifact for one editor instance. All paths are derived from the
//! root so the tree stays relocatable and uninstall can reason over exactly
//! what it owns.

use std::path::{Path, PathBuf};

pub mod scaffold;
pub mod scripts;

/// Default workspace directory name under the user's home
const DEFAULT_DIR_NAME: &str = "geminide";

/// An installer-owned workspace rooted at a single directory
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Resolve the workspace root: explicit flag/env value, or `~/geminide`
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let root = explicit.unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_DIR_NAME)
        });
        Self { root }
    }

    #[allow(dead_code)]
    pub fn at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join("config")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("config.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.root.join("venv")
    }

    pub fn venv_python(&self) -> PathBuf {
        self.venv_dir().join("bin").join("python3")
    }

    pub fn venv_pip(&self) -> PathBuf {
        self.venv_dir().join("bin").join("pip")
    }

    pub fn requirements_file(&self) -> PathBuf {
        self.root.join("requirements.txt")
    }

    /// The editor entry point, supplied separately from the installer
    pub fn main_entry(&self) -> PathBuf {
        self.root.join("main.py")
    }
}
