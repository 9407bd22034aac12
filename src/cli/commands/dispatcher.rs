//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::{Result, TrailheadError};
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::config::ConfigCommand;
use super::run::RunCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Dispatch and execute a command. No subcommand means `run`.
    ///
    /// Every command except `completions` needs the project directory.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config_path = self.config_path.as_deref();

        if !matches!(cli.command, Some(Commands::Completions(_))) && !self.project_root.is_dir() {
            return Err(TrailheadError::ProjectNotFound {
                path: self.project_root.clone(),
            });
        }

        match &cli.command {
            Some(Commands::Run(args)) => {
                RunCommand::new(&self.project_root, config_path, args.clone(), &SystemRunner)
                    .execute(ui)
            }
            None => {
                let args = bare_run_args()?;
                RunCommand::new(&self.project_root, config_path, args, &SystemRunner).execute(ui)
            }
            Some(Commands::Config(args)) => {
                ConfigCommand::new(&self.project_root, config_path, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }
}

/// `run` arguments for a bare `trailhead` invocation.
///
/// Parsed through clap so environment fallbacks such as
/// `TRAILHEAD_PACKAGE_MANAGER` still apply.
fn bare_run_args() -> Result<RunArgs> {
    use clap::{Args, FromArgMatches};

    let matches = RunArgs::augment_args(clap::Command::new("run"))
        .try_get_matches_from(["run"])
        .map_err(|e| TrailheadError::Other(e.into()))?;
    RunArgs::from_arg_matches(&matches).map_err(|e| TrailheadError::Other(e.into()))
}
