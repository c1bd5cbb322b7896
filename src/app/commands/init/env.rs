use crate::domain::{AppError, DatabaseConfig, env_file};
use crate::ports::ProjectStore;

/// What the environment-file step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileOutcome {
    /// `.env` was already present and left untouched.
    AlreadyExists,
    /// `.env` created from the template with database values patched in.
    CreatedConfigured,
    /// `.env` created from the template unchanged.
    CreatedDefault,
    /// Neither `.env` nor `.env.example` exists.
    TemplateMissing,
}

/// Create `.env` from `.env.example`, patching in the collected values.
///
/// An existing `.env` is never overwritten; calling this twice is a no-op
/// the second time.
pub fn setup_env_file<P: ProjectStore>(
    project: &P,
    config: Option<&DatabaseConfig>,
) -> Result<EnvFileOutcome, AppError> {
    if project.exists(env_file::ENV_FILE) {
        return Ok(EnvFileOutcome::AlreadyExists);
    }
    if !project.exists(env_file::ENV_TEMPLATE) {
        return Ok(EnvFileOutcome::TemplateMissing);
    }

    project.copy(env_file::ENV_TEMPLATE, env_file::ENV_FILE)?;

    match config {
        Some(config) => {
            let content = project.read(env_file::ENV_FILE)?;
            project.write(env_file::ENV_FILE, &env_file::apply_db_config(&content, config))?;
            Ok(EnvFileOutcome::CreatedConfigured)
        }
        None => Ok(EnvFileOutcome::CreatedDefault),
    }
}

/// Database values currently in `.env`, used to pre-seed prompt defaults.
///
/// `None` when the file is absent or unreadable; partially matching content
/// yields a partial config rather than an error.
pub fn current_db_config<P: ProjectStore>(project: &P) -> Option<DatabaseConfig> {
    if !project.exists(env_file::ENV_FILE) {
        return None;
    }
    project.read(env_file::ENV_FILE).ok().map(|content| env_file::extract_db_config(&content))
}
