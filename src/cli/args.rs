//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::steps::{PackageManager, StepKind};

/// Trailhead - Development environment bootstrap for JavaScript projects.
#[derive(Debug, Parser)]
#[command(name = "trailhead")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .trailhead.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap the project (default if no command specified)
    Run(RunArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Skip specified steps (comma-separated)
    #[arg(long, value_delimiter = ',', value_enum)]
    pub skip: Vec<StepKind>,

    /// Use this package manager instead of probing the configured list
    #[arg(long, value_enum, env = "TRAILHEAD_PACKAGE_MANAGER")]
    pub package_manager: Option<PackageManager>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::parse_from(["trailhead"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_skip_list() {
        let cli = Cli::parse_from(["trailhead", "run", "--skip", "lint,browser"]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.skip, vec![StepKind::Lint, StepKind::Browser]);
    }

    #[test]
    fn rejects_skipping_gates() {
        let result = Cli::try_parse_from(["trailhead", "run", "--skip", "runtime-version"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_package_manager() {
        let cli = Cli::parse_from(["trailhead", "run", "--package-manager", "yarn"]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.package_manager, Some(PackageManager::Yarn));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["trailhead", "config", "--json", "-q", "-p", "/tmp/app"]);
        assert!(cli.quiet);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/app")));
        assert!(matches!(cli.command, Some(Commands::Config(ConfigArgs { json: true }))));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["trailhead", "-q", "-v"]).is_err());
    }
}
