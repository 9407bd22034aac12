//! Step identifiers and outcomes.

use std::fmt;

/// One of the fixed bootstrap steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StepKind {
    /// Runtime version gate. Cannot be skipped.
    #[value(skip)]
    RuntimeVersion,
    /// Package manager detection gate. Cannot be skipped.
    #[value(skip)]
    PackageManager,
    EnvFile,
    Install,
    BuildDir,
    Typecheck,
    Lint,
    Browser,
}

impl StepKind {
    /// Every step, in the order the orchestrator runs them.
    pub const ALL: [StepKind; 8] = [
        StepKind::RuntimeVersion,
        StepKind::PackageManager,
        StepKind::EnvFile,
        StepKind::Install,
        StepKind::BuildDir,
        StepKind::Typecheck,
        StepKind::Lint,
        StepKind::Browser,
    ];

    /// Stable kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RuntimeVersion => "runtime-version",
            Self::PackageManager => "package-manager",
            Self::EnvFile => "env-file",
            Self::Install => "install",
            Self::BuildDir => "build-dir",
            Self::Typecheck => "typecheck",
            Self::Lint => "lint",
            Self::Browser => "browser",
        }
    }

    /// Short description shown while the step runs.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RuntimeVersion => "Checking runtime version",
            Self::PackageManager => "Detecting package manager",
            Self::EnvFile => "Setting up environment file",
            Self::Install => "Installing dependencies",
            Self::BuildDir => "Preparing build directory",
            Self::Typecheck => "Type checking",
            Self::Lint => "Linting",
            Self::Browser => "Looking for a browser",
        }
    }

    /// Whether failure of this step ends the run.
    pub fn is_gate(&self) -> bool {
        matches!(self, Self::RuntimeVersion | Self::PackageManager)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened when a step ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step did its work.
    Completed(String),
    /// Nothing to do (already done, input missing, or skipped by request).
    Skipped(String),
    /// The step failed but the run continues.
    Warning(String),
    /// The step failed and the run stops.
    Fatal(String),
}

impl StepOutcome {
    /// The message carried by this outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::Completed(m) | Self::Skipped(m) | Self::Warning(m) | Self::Fatal(m) => m,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }

    /// Short status label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed(_) => "ok",
            Self::Skipped(_) => "skipped",
            Self::Warning(_) => "warning",
            Self::Fatal(_) => "failed",
        }
    }
}
