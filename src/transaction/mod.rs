//! Transactional runner for install actions
//!
//! The install sequence mutates host-global state (workspace files, the
//! desktop-entry registry). Each completed action is recorded here with a
//! symmetric undo so a failure mid-sequence rolls the filesystem back instead
//! of leaving a half-installed workspace. Rollback happens automatically on
//! drop unless the transaction is committed.
//!
//! Package-database mutations are deliberately NOT tracked: package managers
//! no-op on already-satisfied dependencies, and uninstalling shared system
//! packages behind the user's back would be worse than leaving them.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, SetupError};

/// Saved content of a file the transaction is about to overwrite
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    content: Vec<u8>,
}

/// A transaction over filesystem install actions
#[derive(Debug, Default)]
pub struct Transaction {
    /// Files created during this transaction
    created_files: HashSet<PathBuf>,

    /// Directories created during this transaction
    created_dirs: HashSet<PathBuf>,

    /// Files overwritten during this transaction (with original content)
    overwritten_files: Vec<FileBackup>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back up a file that is about to be overwritten
    pub fn backup_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if path.exists() {
            let content = fs::read(&path).map_err(|e| SetupError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            self.overwritten_files.push(FileBackup { path, content });
        }
        Ok(())
    }

    /// Track a file that was created during this transaction
    pub fn track_file_created(&mut self, path: impl Into<PathBuf>) {
        self.created_files.insert(path.into());
    }

    /// Track a directory that was created during this transaction
    pub fn track_dir_created(&mut self, path: impl Into<PathBuf>) {
        self.created_dirs.insert(path.into());
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Undo every recorded action in reverse dependency order
    fn rollback(&mut self) {
        for path in &self.created_files {
            if path.exists() {
                let _ = fs::remove_file(path);
            }
        }

        for backup in &self.overwritten_files {
            if let Err(e) = fs::write(&backup.path, &backup.content) {
                crate::ui::warning(&format!(
                    "Failed to restore {}: {}",
                    backup.path.display(),
                    e
                ));
            }
        }

        // Deepest directories first so nested empties unwind cleanly
        let mut dirs: Vec<_> = self.created_dirs.iter().collect();
        dirs.sort_by_key(|d| std::cmp::Reverse(d.components().count()));
        for path in dirs {
            if path.is_dir() {
                let is_empty = fs::read_dir(path)
                    .map(|mut d| d.next().is_none())
                    .unwrap_or(false);
                if is_empty {
                    let _ = fs::remove_dir(path);
                }
            }
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_commit_keeps_created_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");

        let mut tx = Transaction::new();
        fs::write(&file, "{}").unwrap();
        tx.track_file_created(&file);
        tx.commit();

        assert!(file.exists());
    }

    #[test]
    fn test_rollback_removes_created_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");

        {
            let mut tx = Transaction::new();
            fs::write(&file, "{}").unwrap();
            tx.track_file_created(&file);
            // dropped without commit
        }

        assert!(!file.exists());
    }

    #[test]
    fn test_rollback_restores_overwritten_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");
        fs::write(&file, "user edits").unwrap();

        {
            let mut tx = Transaction::new();
            tx.backup_file(&file).unwrap();
            fs::write(&file, "fresh defaults").unwrap();
        }

        assert_eq!(fs::read_to_string(&file).unwrap(), "user edits");
    }

    #[test]
    fn test_rollback_removes_empty_created_dirs_deepest_first() {
        let temp = TempDir::new().unwrap();
        let outer = temp.path().join("config");
        let inner = outer.join("themes");

        {
            let mut tx = Transaction::new();
            fs::create_dir_all(&inner).unwrap();
            tx.track_dir_created(&outer);
            tx.track_dir_created(&inner);
        }

        assert!(!inner.exists());
        assert!(!outer.exists());
    }

    #[test]
    fn test_rollback_keeps_nonempty_dirs() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("logs");

        {
            let mut tx = Transaction::new();
            fs::create_dir_all(&dir).unwrap();
            tx.track_dir_created(&dir);
            // A file the transaction does not own appears in the directory
            fs::write(dir.join("existing.log"), "keep me").unwrap();
        }

        assert!(dir.exists());
        assert!(dir.join("existing.log").exists());
    }

    #[test]
    fn test_backup_missing_file_is_noop() {
        let temp = TempDir::new().unwrap();
        let mut tx = Transaction::new();
        tx.backup_file(temp.path().join("absent.json")).unwrap();
        tx.commit();
    }
}
