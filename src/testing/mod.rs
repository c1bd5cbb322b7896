//! Scripted port implementations for exercising the pipeline without a
//! terminal or a real shell.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{CommandOutcome, CommandRunner, Prompter};

/// Command runner that answers from a script and records every invocation.
pub struct ScriptedRunner {
    failing_prefixes: Vec<String>,
    invocations: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Runner where every command succeeds.
    pub fn new() -> Self {
        Self::failing_on(&[])
    }

    /// Runner where commands starting with any of `prefixes` fail.
    pub fn failing_on(prefixes: &[&str]) -> Self {
        Self {
            failing_prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Every command line passed to `run`, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str, _silent: bool) -> CommandOutcome {
        self.invocations.borrow_mut().push(command.to_string());
        let fails = self.failing_prefixes.iter().any(|prefix| command.starts_with(prefix));
        CommandOutcome {
            success: !fails,
            stdout: String::new(),
            stderr: if fails { "scripted failure".to_string() } else { String::new() },
        }
    }
}

/// A scripted answer for one prompt, consumed in order.
#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
    Input(String),
    Password(String),
    /// Accept whatever default the question offers.
    UseDefault,
}

/// What a prompt sequence actually asked, for asserting visibility rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRecord {
    Confirm { message: String, default: bool },
    Select { message: String, default: usize },
    Input { message: String, default: String },
    Password { message: String },
}

/// Prompter that replays a queue of canned answers and records every
/// question it was asked.
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<PromptRecord>>,
}

impl ScriptedPrompter {
    pub fn with_answers(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::new(Vec::new()) }
    }

    /// Every question asked so far, in order.
    pub fn asked(&self) -> Vec<PromptRecord> {
        self.asked.borrow().clone()
    }

    fn next_answer(&self, message: &str) -> Result<Answer, AppError> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::PromptFailed(format!("no scripted answer for: {message}")))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool, AppError> {
        self.asked
            .borrow_mut()
            .push(PromptRecord::Confirm { message: message.to_string(), default });
        match self.next_answer(message)? {
            Answer::Confirm(value) => Ok(value),
            Answer::UseDefault => Ok(default),
            other => Err(AppError::PromptFailed(format!(
                "expected a confirm answer for '{message}', got {other:?}"
            ))),
        }
    }

    fn select(&self, message: &str, _items: &[&str], default: usize) -> Result<usize, AppError> {
        self.asked
            .borrow_mut()
            .push(PromptRecord::Select { message: message.to_string(), default });
        match self.next_answer(message)? {
            Answer::Select(index) => Ok(index),
            Answer::UseDefault => Ok(default),
            other => Err(AppError::PromptFailed(format!(
                "expected a select answer for '{message}', got {other:?}"
            ))),
        }
    }

    fn input(&self, message: &str, default: &str) -> Result<String, AppError> {
        self.asked.borrow_mut().push(PromptRecord::Input {
            message: message.to_string(),
            default: default.to_string(),
        });
        match self.next_answer(message)? {
            Answer::Input(value) => Ok(value),
            Answer::UseDefault => Ok(default.to_string()),
            other => Err(AppError::PromptFailed(format!(
                "expected an input answer for '{message}', got {other:?}"
            ))),
        }
    }

    fn password(&self, message: &str) -> Result<String, AppError> {
        self.asked.borrow_mut().push(PromptRecord::Password { message: message.to_string() });
        match self.next_answer(message)? {
            Answer::Password(value) => Ok(value),
            Answer::UseDefault => Ok(String::new()),
            other => Err(AppError::PromptFailed(format!(
                "expected a password answer for '{message}', got {other:?}"
            ))),
        }
    }
}
