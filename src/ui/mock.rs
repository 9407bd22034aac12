//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion, including how each spinner finished.
//!
//! # Example
//!
//! ```
//! use trailhead::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting setup");
//! let mut spinner = ui.start_spinner("Checking Node.js version");
//! spinner.finish_success("Node.js v20.11.0");
//!
//! assert!(ui.messages().contains(&"Starting setup".to_string()));
//! assert!(ui.has_success("v20.11.0"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// How a captured spinner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Skipped,
    /// Removed without a status line; the caller reported through the UI.
    Cleared,
}

type SpinnerLog = Rc<RefCell<Vec<(SpinnerStatus, String)>>>;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    outputs: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    skips: Vec<String>,
    headers: Vec<String>,
    steps: Vec<(usize, usize, String)>,
    spinners: Vec<String>,
    spinner_results: SpinnerLog,
    next_steps: Option<(String, Vec<String>)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Text passed to `output`, which every mode prints.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn skips(&self) -> &[String] {
        &self.skips
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Announced steps as `(current, total, title)`.
    pub fn steps(&self) -> &[(usize, usize, String)] {
        &self.steps
    }

    /// Messages spinners were started with.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Final status of every spinner, in finish order.
    pub fn spinner_results(&self) -> Vec<(SpinnerStatus, String)> {
        self.spinner_results.borrow().clone()
    }

    /// Title and lines passed to `show_next_steps`, if it was called.
    pub fn next_steps(&self) -> Option<&(String, Vec<String>)> {
        self.next_steps.as_ref()
    }

    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// True if a success line or successful spinner contains `text`.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes.iter().any(|m| m.contains(text))
            || self.spinner_finished(SpinnerStatus::Success, text)
    }

    pub fn has_output(&self, text: &str) -> bool {
        self.outputs.iter().any(|m| m.contains(text))
    }

    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(text))
    }

    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }

    /// True if a skip line or skipped spinner contains `text`.
    pub fn has_skipped(&self, text: &str) -> bool {
        self.skips.iter().any(|m| m.contains(text))
            || self.spinner_finished(SpinnerStatus::Skipped, text)
    }

    fn spinner_finished(&self, status: SpinnerStatus, text: &str) -> bool {
        self.spinner_results
            .borrow()
            .iter()
            .any(|(s, m)| *s == status && m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn skipped(&mut self, msg: &str) {
        self.skips.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            log: Rc::clone(&self.spinner_results),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_step(&mut self, current: usize, total: usize, title: &str) {
        self.steps.push((current, total, title.to_string()));
    }

    fn show_next_steps(&mut self, title: &str, steps: &[String]) {
        self.next_steps = Some((title.to_string(), steps.to_vec()));
    }
}

/// Spinner that records its final status into the owning [`MockUI`].
pub struct MockSpinner {
    log: SpinnerLog,
}

impl MockSpinner {
    fn record(&self, status: SpinnerStatus, msg: &str) {
        self.log.borrow_mut().push((status, msg.to_string()));
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.record(SpinnerStatus::Success, msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.record(SpinnerStatus::Skipped, msg);
    }

    fn clear(&mut self) {
        self.record(SpinnerStatus::Cleared, "");
    }
}
