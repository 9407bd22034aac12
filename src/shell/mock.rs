//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with scripted results keyed by
//! the full command line (`"npm run lint"`), and records every invocation
//! for later assertion. Commands with no scripted result behave as if the
//! program is not installed.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use trailhead::shell::{CommandLine, CommandOptions, CommandRunner, MockRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.succeed_with_output("npm --version", "10.2.4\n");
//! runner.fail("npm run lint", 1);
//!
//! let options = CommandOptions::captured(Path::new("."));
//! let result = runner.run(&CommandLine::new("npm", ["--version"]), &options).unwrap();
//! assert_eq!(result.stdout, "10.2.4\n");
//! assert!(runner.run(&CommandLine::new("pnpm", ["--version"]), &options).is_err());
//! assert_eq!(runner.calls(), vec!["npm --version", "pnpm --version"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use crate::error::{Result, TrailheadError};

use super::command::{CommandLine, CommandOptions, CommandResult, CommandRunner};

/// Scripted response for a command line.
#[derive(Debug, Clone)]
enum MockResponse {
    Exit { code: i32, stdout: String },
    Missing,
    Unstartable { message: String },
}

/// Mock runner that returns scripted results.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every command is missing until scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner where every unscripted command succeeds.
    pub fn succeeding() -> Self {
        Self {
            fallback: Some(MockResponse::Exit {
                code: 0,
                stdout: String::new(),
            }),
            ..Default::default()
        }
    }

    /// Script a command to exit 0 with no output.
    pub fn succeed(&mut self, command: &str) {
        self.succeed_with_output(command, "");
    }

    /// Script a command to exit 0 and print `stdout`.
    pub fn succeed_with_output(&mut self, command: &str, stdout: &str) {
        self.responses.insert(
            command.to_string(),
            MockResponse::Exit {
                code: 0,
                stdout: stdout.to_string(),
            },
        );
    }

    /// Script a command to exit with a non-zero code.
    pub fn fail(&mut self, command: &str, code: i32) {
        self.responses.insert(
            command.to_string(),
            MockResponse::Exit {
                code,
                stdout: String::new(),
            },
        );
    }

    /// Script a command's program as not installed.
    pub fn missing(&mut self, command: &str) {
        self.responses
            .insert(command.to_string(), MockResponse::Missing);
    }

    /// Script a command that exists but cannot be started.
    pub fn fail_to_start(&mut self, command: &str, message: &str) {
        self.responses.insert(
            command.to_string(),
            MockResponse::Unstartable {
                message: message.to_string(),
            },
        );
    }

    /// All command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Check whether a command line was run.
    pub fn was_called(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &CommandLine, _options: &CommandOptions) -> Result<CommandResult> {
        let line = command.to_string();
        self.calls.borrow_mut().push(line.clone());

        let response = self
            .responses
            .get(&line)
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or(MockResponse::Missing);

        match response {
            MockResponse::Exit { code: 0, stdout } => Ok(CommandResult::success(stdout)),
            MockResponse::Exit { code, stdout } => Ok(CommandResult::failure(Some(code), stdout)),
            MockResponse::Missing => Err(TrailheadError::CommandSpawn {
                command: line,
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            }),
            MockResponse::Unstartable { message } => Err(TrailheadError::CommandSpawn {
                command: line,
                source: io::Error::new(io::ErrorKind::PermissionDenied, message),
            }),
        }
    }
}
