//! Package manager detection.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shell::{CommandLine, CommandOptions, CommandRunner};

use super::runtime_version::extract_version;

/// A supported JavaScript package manager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Pnpm,
    Npm,
    Yarn,
}

impl PackageManager {
    /// Executable name.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// `<pm> --version`
    pub fn version_command(&self) -> CommandLine {
        CommandLine::new(self.command(), ["--version"])
    }

    /// `<pm> install`
    pub fn install_command(&self) -> CommandLine {
        CommandLine::new(self.command(), ["install"])
    }

    /// `<pm> run <script>`
    pub fn run_script_command(&self, script: &str) -> CommandLine {
        CommandLine::new(self.command(), ["run", script])
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// The package manager chosen for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedPackageManager {
    pub manager: PackageManager,
    /// Version reported by `--version`, if it printed one.
    pub version: Option<String>,
}

impl fmt::Display for DetectedPackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.manager, version),
            None => write!(f, "{}", self.manager),
        }
    }
}

/// A candidate whose `--version` probe did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableManager {
    pub manager: PackageManager,
    /// Why the probe failed: `not installed`, an exit code, or the start error.
    pub reason: String,
}

/// Probe candidates in order and return the first that runs successfully.
///
/// Probe output is captured and discarded. Candidates after the first
/// success are never run. When none succeeds, every candidate is returned
/// with the reason its probe failed.
pub fn detect_package_manager(
    candidates: &[PackageManager],
    runner: &dyn CommandRunner,
    project_root: &Path,
) -> Result<DetectedPackageManager, Vec<UnavailableManager>> {
    let options = CommandOptions::captured(project_root);
    let mut unavailable = Vec::new();

    for &manager in candidates {
        let reason = match runner.run(&manager.version_command(), &options) {
            Ok(result) if result.success => {
                tracing::debug!("Found {}: {}", manager, result.stdout.trim());
                return Ok(DetectedPackageManager {
                    manager,
                    version: extract_version(&result.stdout),
                });
            }
            Ok(result) => match result.exit_code {
                Some(code) => format!("exited with code {}", code),
                None => "terminated by a signal".to_string(),
            },
            Err(e) if e.is_program_missing() => "not installed".to_string(),
            Err(e) => e.to_string(),
        };
        tracing::debug!("{} unavailable: {}", manager, reason);
        unavailable.push(UnavailableManager { manager, reason });
    }

    Err(unavailable)
}

/// Message for when no candidate could be run.
pub fn not_found_message(unavailable: &[UnavailableManager]) -> String {
    let tried: Vec<&str> = unavailable.iter().map(|u| u.manager.command()).collect();
    let reasons: Vec<String> = unavailable
        .iter()
        .map(|u| format!("{} {}", u.manager, u.reason))
        .collect();
    format!(
        "No supported package manager found (tried: {}): {}. Install one of them and try again.",
        tried.join(", "),
        reasons.join("; ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    const DEFAULT: [PackageManager; 3] =
        [PackageManager::Pnpm, PackageManager::Npm, PackageManager::Yarn];

    #[test]
    fn commands_use_manager_name() {
        assert_eq!(PackageManager::Pnpm.install_command().to_string(), "pnpm install");
        assert_eq!(
            PackageManager::Yarn.run_script_command("lint:fix").to_string(),
            "yarn run lint:fix"
        );
        assert_eq!(PackageManager::Npm.version_command().to_string(), "npm --version");
    }

    #[test]
    fn first_available_candidate_wins() {
        let mut runner = MockRunner::new();
        runner.succeed_with_output("pnpm --version", "8.15.1\n");
        runner.succeed_with_output("npm --version", "10.2.4\n");

        let detected = detect_package_manager(&DEFAULT, &runner, Path::new(".")).unwrap();

        assert_eq!(detected.manager, PackageManager::Pnpm);
        assert_eq!(detected.version.as_deref(), Some("8.15.1"));
        assert_eq!(runner.calls(), vec!["pnpm --version"]);
    }

    #[test]
    fn skips_missing_and_failing_candidates_then_stops() {
        let mut runner = MockRunner::new();
        runner.missing("pnpm --version");
        runner.succeed_with_output("npm --version", "10.2.4\n");
        runner.succeed_with_output("yarn --version", "1.22.19\n");

        let detected = detect_package_manager(&DEFAULT, &runner, Path::new(".")).unwrap();

        assert_eq!(detected.manager, PackageManager::Npm);
        assert_eq!(runner.calls(), vec!["pnpm --version", "npm --version"]);
        assert!(!runner.was_called("yarn --version"));
    }

    #[test]
    fn non_zero_probe_counts_as_unavailable() {
        let mut runner = MockRunner::new();
        runner.fail("pnpm --version", 1);
        runner.fail("npm --version", 1);
        runner.succeed("yarn --version");

        let detected = detect_package_manager(&DEFAULT, &runner, Path::new(".")).unwrap();

        assert_eq!(detected.manager, PackageManager::Yarn);
        assert_eq!(detected.version, None);
        assert_eq!(runner.calls().len(), 3);
    }

    #[test]
    fn none_available_reports_every_candidate() {
        let runner = MockRunner::new();

        let unavailable = detect_package_manager(&DEFAULT, &runner, Path::new(".")).unwrap_err();

        assert_eq!(unavailable.len(), 3);
        assert!(unavailable.iter().all(|u| u.reason == "not installed"));
        assert_eq!(runner.calls().len(), 3);
    }

    #[test]
    fn respects_custom_order() {
        let runner = MockRunner::succeeding();
        let order = [PackageManager::Yarn, PackageManager::Npm];

        let detected = detect_package_manager(&order, &runner, Path::new(".")).unwrap();

        assert_eq!(detected.manager, PackageManager::Yarn);
    }

    #[test]
    fn not_found_message_lists_candidates_and_reasons() {
        let mut runner = MockRunner::new();
        runner.fail("npm --version", 1);
        runner.fail_to_start("yarn --version", "Permission denied (os error 13)");

        let unavailable = detect_package_manager(&DEFAULT, &runner, Path::new(".")).unwrap_err();
        let msg = not_found_message(&unavailable);

        assert!(msg.contains("(tried: pnpm, npm, yarn)"));
        assert!(msg.contains("pnpm not installed"));
        assert!(msg.contains("npm exited with code 1"));
        assert!(msg.contains("Permission denied (os error 13)"));
    }

    #[test]
    fn detected_display_includes_version() {
        let detected = DetectedPackageManager {
            manager: PackageManager::Npm,
            version: Some("10.2.4".into()),
        };
        assert_eq!(detected.to_string(), "npm 10.2.4");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let parsed: Vec<PackageManager> = serde_yaml::from_str("[pnpm, npm, yarn]").unwrap();
        assert_eq!(parsed, DEFAULT.to_vec());
    }
}
