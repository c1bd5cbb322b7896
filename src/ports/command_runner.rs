/// Result of one external command invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Synchronous shell-command execution.
///
/// Invocation failures (spawn errors as much as non-zero exits) are folded
/// into the outcome; running a command never aborts the process and never
/// raises across this boundary.
pub trait CommandRunner {
    /// Run `command` through the platform shell, blocking until it exits.
    /// With `silent`, output is discarded instead of buffered.
    fn run(&self, command: &str, silent: bool) -> CommandOutcome;

    /// Run `command` and return its trimmed stdout, or `None` on any
    /// failure. The read-only probe path; never fatal.
    fn capture(&self, command: &str) -> Option<String> {
        let outcome = self.run(command, false);
        if outcome.success { Some(outcome.stdout.trim().to_string()) } else { None }
    }
}
