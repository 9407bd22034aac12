//! Run command implementation.
//!
//! The `trailhead run` command bootstraps the project. It is also what a
//! bare `trailhead` invocation does.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::runner::{BootstrapOptions, BootstrapRunner};
use crate::shell::CommandRunner;
use crate::steps::BROWSER_PATH_ENV;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
    runner: &'a dyn CommandRunner,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(
        project_root: &Path,
        config_path: Option<&Path>,
        args: RunArgs,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
            runner,
        }
    }

    fn build_options(&self) -> BootstrapOptions {
        BootstrapOptions {
            skip: self.args.skip.clone(),
            package_manager: self.args.package_manager,
            browser_override: std::env::var_os(BROWSER_PATH_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let options = self.build_options();

        let report =
            BootstrapRunner::new(&config, &self.project_root, self.runner).run(&options, ui)?;

        if report.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}
