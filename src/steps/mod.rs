//! The individual bootstrap steps.
//!
//! Each step is a plain function that does one thing and reports a
//! [`StepOutcome`]. Steps that touch the filesystem return
//! `Result<StepOutcome>` so unexpected IO errors reach the caller; steps
//! that run commands go through a [`CommandRunner`](crate::shell::CommandRunner).
//!
//! | Step | Function | Failure |
//! |------|----------|---------|
//! | runtime version | [`check_runtime`] | fatal |
//! | package manager | [`detect_package_manager`] | fatal |
//! | env file | [`init_env_file`] | none |
//! | install | [`install_dependencies`] | fatal |
//! | build dir | [`ensure_build_dir`] | none |
//! | typecheck | [`run_typecheck`] | warning |
//! | lint | [`run_lint`] | warning |
//! | browser | [`check_browser`] | warning |
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use trailhead::shell::MockRunner;
//! use trailhead::steps::{detect_package_manager, install_dependencies, PackageManager, StepOutcome};
//!
//! let mut runner = MockRunner::new();
//! runner.succeed_with_output("npm --version", "10.2.4");
//! runner.succeed("npm install");
//!
//! let candidates = [PackageManager::Pnpm, PackageManager::Npm, PackageManager::Yarn];
//! let detected = detect_package_manager(&candidates, &runner, Path::new(".")).unwrap();
//! assert_eq!(detected.manager, PackageManager::Npm);
//!
//! let outcome = install_dependencies(detected.manager, &runner, Path::new("."));
//! assert!(matches!(outcome, StepOutcome::Completed(_)));
//! ```

pub mod browser;
pub mod build_dir;
pub mod env_file;
pub mod install;
pub mod outcome;
pub mod package_manager;
pub mod runtime_version;
pub mod scripts;

pub use browser::{check_browser, locate_browser, BROWSER_PATH_ENV};
pub use build_dir::ensure_build_dir;
pub use env_file::init_env_file;
pub use install::install_dependencies;
pub use outcome::{StepKind, StepOutcome};
pub use package_manager::{
    detect_package_manager, not_found_message, DetectedPackageManager, PackageManager,
    UnavailableManager,
};
pub use runtime_version::{check_runtime, extract_version, RuntimeVersion, VersionComparison};
pub use scripts::{run_lint, run_typecheck};
