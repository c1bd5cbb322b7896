use dialoguer::{Confirm, Input, Password, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// dialoguer-backed prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_failed(err: dialoguer::Error) -> AppError {
    AppError::PromptFailed(err.to_string())
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_failed)
    }

    fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_failed)
    }

    fn input(&self, message: &str, default: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(message)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_failed)
    }

    fn password(&self, message: &str) -> Result<String, AppError> {
        Password::new()
            .with_prompt(message)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_failed)
    }
}
