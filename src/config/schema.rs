//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the optional
//! `.trailhead.yml` file. Every field has a default, so an empty file (or no
//! file at all) describes the standard Node.js project layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::steps::package_manager::PackageManager;
use crate::steps::runtime_version::VersionComparison;

/// Root configuration structure for `.trailhead.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailheadConfig {
    /// Runtime version requirement
    pub runtime: RuntimeConfig,

    /// Package managers to probe, in preference order
    pub package_managers: Vec<PackageManager>,

    /// Environment file seeding
    pub env_file: EnvFileConfig,

    /// Build output directory (relative to project root)
    pub build_dir: PathBuf,

    /// Package scripts invoked by the check steps
    pub scripts: ScriptsConfig,

    /// Browser lookup
    pub browser: BrowserConfig,

    /// Lines printed under "Next steps" once setup completes.
    ///
    /// `{pm}`, `{build_dir}` and `{env_file}` are substituted.
    pub next_steps: Vec<String>,
}

impl Default for TrailheadConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            package_managers: default_package_managers(),
            env_file: EnvFileConfig::default(),
            build_dir: PathBuf::from("dist"),
            scripts: ScriptsConfig::default(),
            browser: BrowserConfig::default(),
            next_steps: default_next_steps(),
        }
    }
}

/// The language runtime the project needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Executable that prints the version with `--version`
    pub command: String,

    /// Display name
    pub name: String,

    /// Minimum accepted version, e.g. "18.0.0"
    pub minimum_version: String,

    /// How versions are compared
    pub comparison: VersionComparison,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command: "node".to_string(),
            name: "Node.js".to_string(),
            minimum_version: "18.0.0".to_string(),
            comparison: VersionComparison::default(),
        }
    }
}

/// Template and target paths for the local env file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvFileConfig {
    /// Checked-in template
    pub template: PathBuf,

    /// Git-ignored local override, created from the template if absent
    pub target: PathBuf,
}

impl Default for EnvFileConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(".env.example"),
            target: PathBuf::from(".env"),
        }
    }
}

/// Names of the package scripts run after install.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptsConfig {
    pub typecheck: String,
    pub lint: String,
    pub lint_fix: String,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            typecheck: "typecheck".to_string(),
            lint: "lint".to_string(),
            lint_fix: "lint:fix".to_string(),
        }
    }
}

/// Browser used to load the development build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Display name
    pub name: String,

    /// Install locations checked in order; the first that exists wins
    pub paths: Vec<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            name: "Google Chrome".to_string(),
            paths: default_browser_paths(),
        }
    }
}

fn default_package_managers() -> Vec<PackageManager> {
    vec![PackageManager::Pnpm, PackageManager::Npm, PackageManager::Yarn]
}

/// Well-known Chrome/Chromium install locations across operating systems.
pub fn default_browser_paths() -> Vec<PathBuf> {
    [
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        r"C:\Program Files\Google\Chrome\Application\chrome.exe",
        r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        "/usr/bin/google-chrome",
        "/usr/bin/chromium-browser",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

fn default_next_steps() -> Vec<String> {
    vec![
        "Review {env_file} and fill in any missing values".to_string(),
        "Run `{pm} run dev` to start the development build".to_string(),
        "Open chrome://extensions, enable Developer mode, and load `{build_dir}` as an unpacked extension".to_string(),
    ]
}
