//! Progress spinners.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use super::theme::TrailheadTheme;
use super::SpinnerHandle;

/// A progress spinner for operations whose output is captured.
///
/// The animated line is drawn by indicatif on stderr. When the spinner
/// finishes it is cleared and the final status line is written to `out`.
pub struct ProgressSpinner<W = Term> {
    bar: ProgressBar,
    theme: TrailheadTheme,
    out: Option<W>,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: TrailheadTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme,
            out: Some(Term::stdout()),
        }
    }

    /// Create a spinner that doesn't draw anything.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: TrailheadTheme::plain(),
            out: None,
        }
    }
}

impl<W: Write> ProgressSpinner<W> {
    fn finish_with(&mut self, line: String) {
        self.bar.finish_and_clear();
        if let Some(out) = self.out.as_mut() {
            writeln!(out, "{}", line).ok();
        }
    }
}

impl<W: Write> SpinnerHandle for ProgressSpinner<W> {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_skipped(&mut self, msg: &str) {
        let line = self.theme.format_skipped(msg);
        self.finish_with(line);
    }

    fn clear(&mut self) {
        self.bar.finish_and_clear();
    }
}
