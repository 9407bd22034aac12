//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI and piped output
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use trailhead::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("my-extension");
//! ui.success("Setup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::format_duration;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, TrailheadTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message. Suppressed in quiet mode.
    fn message(&mut self, msg: &str);

    /// Print output the user asked for, such as a rendered config.
    /// Written to stdout in every output mode.
    fn output(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display a skipped/no-op message.
    fn skipped(&mut self, msg: &str);

    /// Start a spinner for an operation whose output is captured.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Announce a step, e.g. "[4/8] Installing dependencies".
    fn show_step(&mut self, current: usize, total: usize, title: &str);

    /// Show the closing summary: a title line followed by numbered lines.
    fn show_next_steps(&mut self, title: &str, steps: &[String]);
}

/// Handle for controlling a spinner.
///
/// Finishing replaces the spinner with one newline-terminated status line.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);

    /// Remove the spinner without printing anything, so the caller can
    /// report the result through the UI instead.
    fn clear(&mut self);
}
