//! Dependency installation.

use std::path::Path;

use crate::shell::{CommandOptions, CommandRunner};

use super::outcome::StepOutcome;
use super::package_manager::PackageManager;

/// Run `<pm> install` with the user's terminal attached.
///
/// Any failure is fatal: later steps cannot work without dependencies.
pub fn install_dependencies(
    manager: PackageManager,
    runner: &dyn CommandRunner,
    project_root: &Path,
) -> StepOutcome {
    let command = manager.install_command();

    match runner.run(&command, &CommandOptions::inherited(project_root)) {
        Ok(result) if result.success => {
            StepOutcome::Completed("Dependencies installed".to_string())
        }
        Ok(result) => StepOutcome::Fatal(format!(
            "Failed to install dependencies: `{}` exited with code {}",
            command,
            result
                .exit_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        )),
        Err(e) => StepOutcome::Fatal(format!("Failed to install dependencies: {}", e)),
    }
}
