//! Config command implementation.
//!
//! The `trailhead config` command shows the resolved configuration: file
//! values layered over the defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::ConfigArgs;
use crate::config::{find_config_file, load_config};
use crate::error::{Result, TrailheadError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn source(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(|| find_config_file(&self.project_root))
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        let rendered = if self.args.json {
            serde_json::to_string_pretty(&config).context("Failed to serialize config as JSON")
        } else {
            serde_yaml::to_string(&config).context("Failed to serialize config as YAML")
        }
        .map_err(TrailheadError::Other)?;

        if !self.args.json {
            match self.source() {
                Some(path) => ui.output(&format!("# {}", path.display())),
                None => ui.output("# defaults (no .trailhead.yml found)"),
            }
        }
        ui.output(rendered.trim_end());

        Ok(CommandResult::success())
    }
}
