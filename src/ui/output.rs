//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including a per-step summary.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show warnings, errors and the final banner only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows routine status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows the per-step summary after a run.
    pub fn shows_summary(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows warnings.
    pub fn shows_warnings(&self) -> bool {
        true
    }
}
