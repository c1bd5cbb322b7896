use crate::domain::Platform;
use crate::ports::{CommandRunner, ProjectStore, Prompter};

/// Application context holding dependencies for the setup pipeline.
pub struct AppContext<P: ProjectStore, C: CommandRunner, U: Prompter> {
    project: P,
    runner: C,
    prompter: U,
    platform: Platform,
}

impl<P: ProjectStore, C: CommandRunner, U: Prompter> AppContext<P, C, U> {
    /// Create a new application context.
    pub fn new(project: P, runner: C, prompter: U, platform: Platform) -> Self {
        Self { project, runner, prompter, platform }
    }

    /// Get a reference to the project store.
    pub fn project(&self) -> &P {
        &self.project
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &C {
        &self.runner
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &U {
        &self.prompter
    }

    /// The detected host platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }
}
