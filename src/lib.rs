//! Trailhead - development environment bootstrap for JavaScript projects.
//!
//! Trailhead replaces an ad-hoc setup script with a fixed sequence of
//! checks: runtime version, package manager detection, `.env` seeding,
//! dependency install, build directory, type checking, linting, and a
//! browser lookup.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.trailhead.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`runner`] - The bootstrap orchestrator
//! - [`shell`] - Subprocess execution behind the [`shell::CommandRunner`] seam
//! - [`steps`] - The individual bootstrap steps
//! - [`ui`] - Spinners, styling, and terminal output
//!
//! # Example
//!
//! ```
//! use trailhead::config::TrailheadConfig;
//! use trailhead::runner::{BootstrapOptions, BootstrapRunner};
//! use trailhead::shell::MockRunner;
//! use trailhead::ui::MockUI;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let mut runner = MockRunner::succeeding();
//! runner.succeed_with_output("node --version", "v20.11.0");
//!
//! let mut config = TrailheadConfig::default();
//! config.browser.paths.clear();
//!
//! let mut ui = MockUI::new();
//! let report = BootstrapRunner::new(&config, temp.path(), &runner)
//!     .run(&BootstrapOptions::default(), &mut ui)
//!     .unwrap();
//!
//! assert_eq!(report.exit_code(), 0);
//! assert!(temp.path().join("dist").is_dir());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, TrailheadError};
