use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-backed project store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a project store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a project store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    fn read(&self, relative: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.path(relative))?)
    }

    fn write(&self, relative: &str, content: &str) -> Result<(), AppError> {
        fs::write(self.path(relative), content)?;
        Ok(())
    }

    fn copy(&self, from: &str, to: &str) -> Result<(), AppError> {
        fs::copy(self.path(from), self.path(to))?;
        Ok(())
    }

    fn dir_name(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
