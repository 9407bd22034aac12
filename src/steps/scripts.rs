//! Type-check and lint scripts.
//!
//! Both run through the detected package manager with the terminal
//! attached. Neither can end the run: failures become warnings.

use std::path::Path;

use crate::config::ScriptsConfig;
use crate::shell::{CommandLine, CommandOptions, CommandRunner};
use crate::ui::UserInterface;

use super::outcome::StepOutcome;
use super::package_manager::PackageManager;

fn succeeds(runner: &dyn CommandRunner, command: &CommandLine, project_root: &Path) -> bool {
    match runner.run(command, &CommandOptions::inherited(project_root)) {
        Ok(result) => result.success,
        Err(e) => {
            tracing::debug!("Could not run {}: {}", command, e);
            false
        }
    }
}

/// Run the type-check script.
pub fn run_typecheck(
    manager: PackageManager,
    script: &str,
    runner: &dyn CommandRunner,
    project_root: &Path,
) -> StepOutcome {
    let command = manager.run_script_command(script);

    if succeeds(runner, &command, project_root) {
        StepOutcome::Completed("Type checking passed".to_string())
    } else {
        StepOutcome::Warning(format!(
            "Type checking failed (`{}`); fix the reported errors when convenient",
            command
        ))
    }
}

/// Run the lint script, falling back to the auto-fix script on failure.
pub fn run_lint(
    manager: PackageManager,
    scripts: &ScriptsConfig,
    runner: &dyn CommandRunner,
    project_root: &Path,
    ui: &mut dyn UserInterface,
) -> StepOutcome {
    let lint = manager.run_script_command(&scripts.lint);

    if succeeds(runner, &lint, project_root) {
        return StepOutcome::Completed("Linting passed".to_string());
    }

    let fix = manager.run_script_command(&scripts.lint_fix);
    ui.message(&format!("Lint issues found, running `{}`", fix));

    if succeeds(runner, &fix, project_root) {
        StepOutcome::Completed("Lint issues fixed automatically".to_string())
    } else {
        StepOutcome::Warning(format!(
            "Lint issues remain after `{}`; run `{}` to see them",
            fix, lint
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    #[test]
    fn typecheck_success_completes() {
        let runner = MockRunner::succeeding();

        let outcome = run_typecheck(PackageManager::Npm, "typecheck", &runner, Path::new("."));

        assert!(matches!(outcome, StepOutcome::Completed(_)));
        assert_eq!(runner.calls(), vec!["npm run typecheck"]);
    }

    #[test]
    fn typecheck_failure_is_a_warning() {
        let mut runner = MockRunner::new();
        runner.fail("npm run typecheck", 2);

        let outcome = run_typecheck(PackageManager::Npm, "typecheck", &runner, Path::new("."));

        assert!(outcome.is_warning());
    }

    #[test]
    fn typecheck_missing_tool_is_a_warning() {
        let runner = MockRunner::new();

        let outcome = run_typecheck(PackageManager::Pnpm, "tsc", &runner, Path::new("."));

        assert!(outcome.is_warning());
        assert!(outcome.message().contains("pnpm run tsc"));
    }

    #[test]
    fn lint_success_skips_fix() {
        let runner = MockRunner::succeeding();
        let mut ui = MockUI::new();

        let outcome = run_lint(
            PackageManager::Npm,
            &ScriptsConfig::default(),
            &runner,
            Path::new("."),
            &mut ui,
        );

        assert_eq!(outcome, StepOutcome::Completed("Linting passed".into()));
        assert!(!runner.was_called("npm run lint:fix"));
    }

    #[test]
    fn lint_failure_then_fix_success_completes() {
        let mut runner = MockRunner::succeeding();
        runner.fail("npm run lint", 1);
        let mut ui = MockUI::new();

        let outcome = run_lint(
            PackageManager::Npm,
            &ScriptsConfig::default(),
            &runner,
            Path::new("."),
            &mut ui,
        );

        assert_eq!(
            outcome,
            StepOutcome::Completed("Lint issues fixed automatically".into())
        );
        assert_eq!(runner.calls(), vec!["npm run lint", "npm run lint:fix"]);
        assert!(ui.has_message("npm run lint:fix"));
    }

    #[test]
    fn lint_and_fix_failure_is_a_warning() {
        let mut runner = MockRunner::new();
        runner.fail("yarn run lint", 1);
        runner.fail("yarn run lint:fix", 1);
        let mut ui = MockUI::new();

        let outcome = run_lint(
            PackageManager::Yarn,
            &ScriptsConfig::default(),
            &runner,
            Path::new("."),
            &mut ui,
        );

        assert!(outcome.is_warning());
        assert!(!outcome.is_fatal());
    }

    #[test]
    fn lint_uses_configured_script_names() {
        let mut runner = MockRunner::new();
        runner.fail("pnpm run eslint", 1);
        runner.succeed("pnpm run eslint:fix");
        let scripts = ScriptsConfig {
            typecheck: "tsc".into(),
            lint: "eslint".into(),
            lint_fix: "eslint:fix".into(),
        };
        let mut ui = MockUI::new();

        let outcome = run_lint(
            PackageManager::Pnpm,
            &scripts,
            &runner,
            Path::new("."),
            &mut ui,
        );

        assert!(matches!(outcome, StepOutcome::Completed(_)));
    }
}
