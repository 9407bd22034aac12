//! Subprocess execution and platform helpers.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    execute, CommandLine, CommandOptions, CommandResult, CommandRunner,
    SystemRunner,
};
pub use mock::MockRunner;
pub use platform::{is_ci, os_label, process_command};
