//! Plain-text UI for CI and piped output.

use super::theme::TrailheadTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// No spinners and no colors. Warnings and errors go to stderr so they
/// stand out in CI logs; everything else goes to stdout.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn output(&mut self, text: &str) {
        println!("{}", text);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("○ {}", msg);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_step(&mut self, current: usize, total: usize, title: &str) {
        if self.mode.shows_status() {
            println!("\n[{}/{}] {}", current, total, title);
        }
    }

    fn show_next_steps(&mut self, title: &str, steps: &[String]) {
        println!("\n✓ {}", title);
        if steps.is_empty() {
            return;
        }
        println!("\nNext steps:");
        for (i, step) in steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }
}

/// Spinner stand-in that prints the final status line only.
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", TrailheadTheme::plain().format_success(msg));
        }
    }

    fn clear(&mut self) {}

    fn finish_skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", TrailheadTheme::plain().format_skipped(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_output_mode() {
        let ui = NonInteractiveUI::new(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn spinner_finishes_without_panicking() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        let mut spinner = ui.start_spinner("Probing");
        spinner.finish_success("done");

        let mut spinner = ui.start_spinner("Looking for Chrome");
        spinner.clear();
    }
}
