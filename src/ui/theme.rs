//! Visual theme and styling.

use console::Style;

/// Colors and symbols used by the terminal UI.
#[derive(Debug, Clone)]
pub struct TrailheadTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/running elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for step counters (dim).
    pub step_number: Style,
}

impl Default for TrailheadTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailheadTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            step_number: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            step_number: Style::new(),
        }
    }

    /// Pick colored or plain depending on the environment.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a step announcement, e.g. `[4/8] Installing dependencies`.
    pub fn format_step(&self, current: usize, total: usize, title: &str) -> String {
        format!(
            "{} {}",
            self.step_number.apply_to(format!("[{}/{}]", current, total)),
            self.info.apply_to(title)
        )
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▲"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = TrailheadTheme::plain().format_success("Done");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Done"));
    }

    #[test]
    fn theme_formats_warning() {
        let msg = TrailheadTheme::plain().format_warning("Careful");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Careful"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = TrailheadTheme::plain().format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_skipped() {
        let msg = TrailheadTheme::plain().format_skipped("Nothing to do");
        assert!(msg.contains("○"));
        assert!(msg.contains("Nothing to do"));
    }

    #[test]
    fn theme_formats_step() {
        let msg = TrailheadTheme::plain().format_step(4, 8, "Installing");
        assert!(msg.contains("[4/8]"));
        assert!(msg.contains("Installing"));
    }

    #[test]
    fn theme_formats_header() {
        let msg = TrailheadTheme::plain().format_header("my-app");
        assert!(msg.contains("▲"));
        assert!(msg.contains("my-app"));
    }
}
