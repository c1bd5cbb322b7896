//! Spinner-wrapped execution of external command steps.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ports::CommandRunner;

/// One external command step in the pipeline.
#[derive(Debug, Clone)]
pub struct RunStep<'a> {
    /// Shell command line to execute.
    pub command: &'a str,
    /// Spinner label while the command runs.
    pub loading: &'a str,
    /// Label shown when the command fails.
    pub error_label: &'a str,
}

/// Presentation options for a step; all independently togglable.
#[derive(Debug, Clone, Default)]
pub struct StepOptions {
    /// Discard command output instead of buffering it.
    pub silent: bool,
    /// Print buffered output after a successful run.
    pub show_output: bool,
    /// Print captured error text when the command fails.
    pub verbose: bool,
    /// Replaces the default "<loading> - Completado" success text.
    pub success_message: Option<String>,
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Run one step behind a spinner and report whether it succeeded.
///
/// Escalating a failure (aborting the pipeline) is the caller's decision;
/// this function never terminates the process.
pub fn run_step<C: CommandRunner>(runner: &C, step: &RunStep<'_>, options: &StepOptions) -> bool {
    let bar = spinner(step.loading);
    let outcome = runner.run(step.command, options.silent);

    if outcome.success {
        let message = options
            .success_message
            .clone()
            .unwrap_or_else(|| format!("{} - Completado", step.loading));
        bar.finish_with_message(format!("{} {}", "✓".green(), message));
        if options.show_output && !outcome.stdout.is_empty() {
            println!("{}", outcome.stdout);
        }
        true
    } else {
        bar.finish_with_message(format!("{} {}", "✗".red(), step.error_label));
        if options.verbose && !outcome.stderr.is_empty() {
            eprintln!("{}", outcome.stderr.red());
        }
        false
    }
}
