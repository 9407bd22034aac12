//! Bootstrap orchestration.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::TrailheadConfig;
use crate::error::Result;
use crate::shell::{os_label, CommandRunner};
use crate::steps::{
    check_browser, check_runtime, detect_package_manager, ensure_build_dir, init_env_file,
    install_dependencies, not_found_message, run_lint, run_typecheck, DetectedPackageManager,
    PackageManager, StepKind, StepOutcome,
};
use crate::ui::{format_duration, UserInterface};

/// Title of the closing banner.
pub const READY_TITLE: &str = "Development environment ready!";

/// Message recorded for steps excluded with `--skip`.
pub const SKIPPED_BY_REQUEST: &str = "skipped by request";

/// Options for a single bootstrap run.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    /// Steps to leave out. Gates are never skipped.
    pub skip: Vec<StepKind>,
    /// Use only this package manager instead of the configured candidates.
    pub package_manager: Option<PackageManager>,
    /// Browser binary to check before the configured install locations.
    pub browser_override: Option<PathBuf>,
}

/// What a bootstrap run did.
#[derive(Debug, Clone, Default)]
pub struct BootstrapReport {
    /// Outcome of every step that ran or was skipped, in order.
    pub outcomes: Vec<(StepKind, StepOutcome)>,
    /// Package manager chosen by detection.
    pub package_manager: Option<DetectedPackageManager>,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

impl BootstrapReport {
    /// Whether the run finished without a fatal outcome.
    pub fn is_success(&self) -> bool {
        !self.outcomes.iter().any(|(_, o)| o.is_fatal())
    }

    /// Process exit code: 0 on success (warnings included), 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Messages of all warning outcomes.
    pub fn warnings(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| o.is_warning())
            .map(|(_, o)| o.message())
            .collect()
    }

    /// Outcome recorded for a step, if it was reached.
    pub fn outcome(&self, kind: StepKind) -> Option<&StepOutcome> {
        self.outcomes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, o)| o)
    }

    fn record(&mut self, kind: StepKind, outcome: StepOutcome) -> bool {
        debug!("{}: {} ({})", kind, outcome.label(), outcome.message());
        let fatal = outcome.is_fatal();
        self.outcomes.push((kind, outcome));
        fatal
    }
}

/// Runs the bootstrap steps in order against one project.
pub struct BootstrapRunner<'a> {
    config: &'a TrailheadConfig,
    project_root: &'a Path,
    runner: &'a dyn CommandRunner,
}

impl<'a> BootstrapRunner<'a> {
    pub fn new(
        config: &'a TrailheadConfig,
        project_root: &'a Path,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            project_root,
            runner,
        }
    }

    /// Run every step, stopping at the first fatal outcome.
    ///
    /// Fatal outcomes are reported through the UI and the returned report;
    /// only infrastructure errors (filesystem failures) come back as `Err`.
    pub fn run(
        &self,
        options: &BootstrapOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<BootstrapReport> {
        let start = Instant::now();
        let mut report = BootstrapReport::default();
        debug!(
            "Bootstrapping {} on {}",
            self.project_root.display(),
            os_label()
        );

        ui.show_header(&format!("Setting up {}", self.project_name()));

        let outcome = self.quiet_step(ui, StepKind::RuntimeVersion, || {
            Ok(check_runtime(
                &self.config.runtime,
                self.runner,
                self.project_root,
            ))
        })?;
        if report.record(StepKind::RuntimeVersion, outcome) {
            return Ok(finish(report, start));
        }

        let candidates = match options.package_manager {
            Some(manager) => vec![manager],
            None => self.config.package_managers.clone(),
        };
        let mut detected = None;
        let outcome = self.quiet_step(ui, StepKind::PackageManager, || {
            Ok(
                match detect_package_manager(&candidates, self.runner, self.project_root) {
                    Ok(pm) => {
                        let message = format!("Using {}", pm);
                        detected = Some(pm);
                        StepOutcome::Completed(message)
                    }
                    Err(unavailable) => StepOutcome::Fatal(not_found_message(&unavailable)),
                },
            )
        })?;
        report.package_manager = detected.clone();
        let stopped = report.record(StepKind::PackageManager, outcome);
        let Some(manager) = detected.map(|d| d.manager).filter(|_| !stopped) else {
            return Ok(finish(report, start));
        };
        debug!("Using package manager {}", manager);

        for kind in StepKind::ALL.into_iter().filter(|k| !k.is_gate()) {
            let outcome = if options.skip.contains(&kind) {
                ui.skipped(&format!("{} ({})", kind.description(), SKIPPED_BY_REQUEST));
                StepOutcome::Skipped(SKIPPED_BY_REQUEST.to_string())
            } else {
                self.run_step(kind, manager, options, ui)?
            };

            if report.record(kind, outcome) {
                return Ok(finish(report, start));
            }
        }

        let report = finish(report, start);
        self.show_banner(&report, manager, ui);
        Ok(report)
    }

    fn run_step(
        &self,
        kind: StepKind,
        manager: PackageManager,
        options: &BootstrapOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<StepOutcome> {
        let scripts = &self.config.scripts;

        match kind {
            StepKind::EnvFile => self.quiet_step(ui, kind, || {
                init_env_file(self.project_root, &self.config.env_file)
            }),
            StepKind::BuildDir => self.quiet_step(ui, kind, || {
                ensure_build_dir(self.project_root, &self.config.build_dir)
            }),
            StepKind::Browser => self.quiet_step(ui, kind, || {
                Ok(check_browser(
                    &self.config.browser,
                    options.browser_override.as_deref(),
                ))
            }),
            StepKind::Install => {
                announce(ui, kind);
                let outcome = install_dependencies(manager, self.runner, self.project_root);
                render(ui, &outcome);
                Ok(outcome)
            }
            StepKind::Typecheck => {
                announce(ui, kind);
                let outcome =
                    run_typecheck(manager, &scripts.typecheck, self.runner, self.project_root);
                render(ui, &outcome);
                Ok(outcome)
            }
            StepKind::Lint => {
                announce(ui, kind);
                let outcome = run_lint(manager, scripts, self.runner, self.project_root, ui);
                render(ui, &outcome);
                Ok(outcome)
            }
            StepKind::RuntimeVersion | StepKind::PackageManager => {
                unreachable!("gates run before the remaining steps")
            }
        }
    }

    /// Run a step with captured output under a spinner.
    ///
    /// Warnings and fatals are cleared off the spinner and reported through
    /// the UI, which shows them in every output mode.
    fn quiet_step<F>(
        &self,
        ui: &mut dyn UserInterface,
        kind: StepKind,
        step: F,
    ) -> Result<StepOutcome>
    where
        F: FnOnce() -> Result<StepOutcome>,
    {
        let mut spinner = ui.start_spinner(&format!("{}...", kind.description()));
        let result = step();
        match &result {
            Ok(StepOutcome::Completed(m)) => spinner.finish_success(m),
            Ok(StepOutcome::Skipped(m)) => spinner.finish_skipped(m),
            Ok(outcome) => {
                spinner.clear();
                render(ui, outcome);
            }
            Err(_) => spinner.clear(),
        }
        result
    }

    fn show_banner(
        &self,
        report: &BootstrapReport,
        manager: PackageManager,
        ui: &mut dyn UserInterface,
    ) {
        let warnings = report.warnings();
        if !warnings.is_empty() {
            ui.warning(&format!(
                "Finished with {} warning{}",
                warnings.len(),
                if warnings.len() == 1 { "" } else { "s" }
            ));
        }

        if ui.output_mode().shows_summary() {
            ui.message("\nSummary:");
            for (kind, outcome) in &report.outcomes {
                ui.message(&format!(
                    "  {:<16} {:<8} {}",
                    kind.name(),
                    outcome.label(),
                    outcome.message()
                ));
            }
        }

        let steps = next_steps(self.config, manager);
        ui.show_next_steps(READY_TITLE, &steps);
        ui.message(&format!("\nDone in {}", format_duration(report.elapsed)));
    }

    fn project_name(&self) -> String {
        self.project_root
            .canonicalize()
            .ok()
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    }
}

/// Substitute `{pm}`, `{build_dir}` and `{env_file}` in the configured
/// next-step lines.
pub fn next_steps(config: &TrailheadConfig, manager: PackageManager) -> Vec<String> {
    let build_dir = config.build_dir.display().to_string();
    let env_file = config.env_file.target.display().to_string();

    config
        .next_steps
        .iter()
        .map(|line| {
            line.replace("{pm}", manager.command())
                .replace("{build_dir}", &build_dir)
                .replace("{env_file}", &env_file)
        })
        .collect()
}

fn finish(mut report: BootstrapReport, start: Instant) -> BootstrapReport {
    report.elapsed = start.elapsed();
    report
}

fn announce(ui: &mut dyn UserInterface, kind: StepKind) {
    let index = StepKind::ALL
        .iter()
        .position(|k| *k == kind)
        .map_or(0, |i| i + 1);
    ui.show_step(index, StepKind::ALL.len(), kind.description());
}

fn render(ui: &mut dyn UserInterface, outcome: &StepOutcome) {
    match outcome {
        StepOutcome::Completed(m) => ui.success(m),
        StepOutcome::Skipped(m) => ui.skipped(m),
        StepOutcome::Warning(m) => ui.warning(m),
        StepOutcome::Fatal(m) => ui.error(m),
    }
}
