//! Browser lookup.

use std::path::{Path, PathBuf};

use crate::config::BrowserConfig;

use super::outcome::StepOutcome;

/// Environment variable that points at a browser binary explicitly.
pub const BROWSER_PATH_ENV: &str = "CHROME_PATH";

/// Return the first existing path: the explicit override, then the
/// configured install locations in order.
pub fn locate_browser(config: &BrowserConfig, explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .into_iter()
        .chain(config.paths.iter().map(PathBuf::as_path))
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}

/// Look for the browser; absence is only a warning.
pub fn check_browser(config: &BrowserConfig, explicit: Option<&Path>) -> StepOutcome {
    match locate_browser(config, explicit) {
        Some(path) => StepOutcome::Completed(format!(
            "Found {} at {}",
            config.name,
            path.display()
        )),
        None => StepOutcome::Warning(format!(
            "{} was not found. Install it to load the development build, \
             or set {} to the browser executable.",
            config.name, BROWSER_PATH_ENV
        )),
    }
}
