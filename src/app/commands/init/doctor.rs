use crate::domain::Platform;
use crate::ports::CommandRunner;

/// Result of probing one external tool.
#[derive(Debug, Clone)]
pub struct ToolCheck {
    pub name: &'static str,
    pub installed: bool,
    pub required: bool,
}

/// Outcome of the dependency probe pass.
#[derive(Debug, Clone)]
pub struct DoctorReport {
    pub checks: Vec<ToolCheck>,
}

impl DoctorReport {
    /// True only when every required tool answered its probe. Optional
    /// tools never flip this result.
    pub fn all_required_installed(&self) -> bool {
        self.checks.iter().filter(|check| check.required).all(|check| check.installed)
    }
}

/// Probe the external tools the pipeline will invoke, one attempt each.
///
/// Valet is only probed on non-Windows platforms and is optional there:
/// without it the project is prepared but not linked.
pub fn execute<C: CommandRunner>(runner: &C, platform: Platform) -> DoctorReport {
    let node_probe = if platform.is_windows() { "where node" } else { "which node" };

    let mut probes: Vec<(&'static str, &str, bool)> = vec![
        ("PHP", "php -v", true),
        ("Composer", "composer -V", true),
        ("Node.js", node_probe, true),
        ("NPM", "npm -v", true),
    ];
    if !platform.is_windows() {
        probes.push(("Laravel Valet", "valet -V", false));
    }

    let checks = probes
        .into_iter()
        .map(|(name, command, required)| ToolCheck {
            name,
            installed: runner.run(command, true).success,
            required,
        })
        .collect();

    DoctorReport { checks }
}
