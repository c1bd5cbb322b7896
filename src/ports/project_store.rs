use std::path::Path;

use crate::domain::AppError;

/// Rooted filesystem access to the target project tree.
pub trait ProjectStore {
    /// Project root directory.
    fn root(&self) -> &Path;

    /// Whether `relative` exists under the project root.
    fn exists(&self, relative: &str) -> bool;

    /// Read a project file to a string.
    fn read(&self, relative: &str) -> Result<String, AppError>;

    /// Write a project file, replacing any existing content.
    fn write(&self, relative: &str, content: &str) -> Result<(), AppError>;

    /// Copy one project file onto another path under the root.
    fn copy(&self, from: &str, to: &str) -> Result<(), AppError>;

    /// Base name of the project directory, used as the Valet site name.
    fn dir_name(&self) -> String;
}
