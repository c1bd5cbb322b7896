use std::process::{Command, Stdio};

use crate::domain::Platform;
use crate::ports::{CommandOutcome, CommandRunner};

/// Runs command lines through the platform shell, blocking until exit.
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    platform: Platform,
}

impl ShellCommandRunner {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn shell_invocation(&self, command: &str) -> Command {
        let mut invocation = match self.platform {
            Platform::Windows => {
                let mut shell = Command::new("cmd");
                shell.arg("/C");
                shell
            }
            Platform::Unix => {
                let mut shell = Command::new("sh");
                shell.arg("-c");
                shell
            }
        };
        invocation.arg(command);
        invocation.stdin(Stdio::null());
        invocation
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, silent: bool) -> CommandOutcome {
        let mut invocation = self.shell_invocation(command);

        if silent {
            invocation.stdout(Stdio::null()).stderr(Stdio::null());
            return match invocation.status() {
                Ok(status) => {
                    CommandOutcome { success: status.success(), ..Default::default() }
                }
                Err(spawn) => {
                    CommandOutcome { stderr: spawn.to_string(), ..Default::default() }
                }
            };
        }

        match invocation.output() {
            Ok(output) => CommandOutcome {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(spawn) => CommandOutcome { stderr: spawn.to_string(), ..Default::default() },
        }
    }
}
