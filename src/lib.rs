//! laravel-init: interactive setup wizard for freshly cloned Laravel projects.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::AppContext;
use app::commands::init;
use domain::Platform;
use services::{DialoguerPrompter, FilesystemProjectStore, ShellCommandRunner};

pub use domain::AppError;

/// Run the full setup wizard against the current directory.
pub fn initialize() -> Result<(), AppError> {
    let platform = Platform::detect();
    let project = FilesystemProjectStore::current()?;
    let runner = ShellCommandRunner::new(platform);
    let prompter = DialoguerPrompter::new();
    let ctx = AppContext::new(project, runner, prompter, platform);

    init::execute(&ctx)
}
