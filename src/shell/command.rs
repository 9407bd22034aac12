//! Subprocess execution.

use crate::error::{Result, TrailheadError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use super::platform::process_command;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Executable name, resolved through `PATH`.
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Create a command line from a program and arguments.
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String) -> Self {
        Self {
            exit_code,
            stdout,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that capture both streams, for probes.
    pub fn captured(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }

    /// Options that inherit both streams, so the user sees live output.
    pub fn inherited(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            ..Default::default()
        }
    }
}

/// Something that can run commands.
///
/// Steps talk to the operating system only through this trait, so tests can
/// swap in [`MockRunner`](super::MockRunner).
pub trait CommandRunner {
    /// Run a command to completion.
    ///
    /// A command that starts and exits non-zero is `Ok` with
    /// `success == false`. A command that cannot be started at all is `Err`.
    fn run(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine, options: &CommandOptions) -> Result<CommandResult> {
        execute(command, options)
    }
}

/// Execute a command, blocking until it exits.
pub fn execute(command: &CommandLine, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = process_command(&command.program);
    cmd.args(&command.args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    // stdin is always inherited; an install may need to ask for credentials.
    cmd.stdin(Stdio::inherit());

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!("Executing: {}", command);

    let output = cmd.output().map_err(|source| {
        tracing::debug!("Failed to start {}: {}", command, source);
        TrailheadError::CommandSpawn {
            command: command.to_string(),
            source,
        }
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    tracing::debug!(
        "{} exited with {:?} after {:?}",
        command,
        output.status.code(),
        duration
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout))
    }
}
