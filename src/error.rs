//! Error types for trailhead operations.
//!
//! This module defines [`TrailheadError`], the error type for everything that
//! is *not* a step outcome, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Step failures (runtime too old, install failed, lint failed) are
//!   reported as [`StepOutcome`](crate::steps::StepOutcome) values, not errors
//! - `TrailheadError` covers configuration problems and filesystem or
//!   process failures that abort the whole run
//! - Use `anyhow::Error` (via `TrailheadError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for trailhead operations.
#[derive(Debug, Error)]
pub enum TrailheadError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Project directory given on the command line does not exist.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// A process could not be started or waited on.
    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrailheadError {
    /// True when a command could not start because its program is not installed.
    pub fn is_program_missing(&self) -> bool {
        matches!(
            self,
            Self::CommandSpawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type alias for trailhead operations.
pub type Result<T> = std::result::Result<T, TrailheadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = TrailheadError::ConfigNotFound {
            path: PathBuf::from("/foo/.trailhead.yml"),
        };
        assert!(err.to_string().contains("/foo/.trailhead.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = TrailheadError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = TrailheadError::ConfigValidationError {
            message: "package_managers must not be empty".into(),
        };
        assert!(err.to_string().contains("package_managers"));
    }

    #[test]
    fn command_spawn_keeps_io_message() {
        let err = TrailheadError::CommandSpawn {
            command: "npm install".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm install"));
        assert!(msg.contains("access denied"));
        assert!(!err.is_program_missing());
    }

    #[test]
    fn not_found_spawn_means_program_missing() {
        let err = TrailheadError::CommandSpawn {
            command: "pnpm --version".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert!(err.is_program_missing());
    }

    #[test]
    fn project_not_found_displays_path() {
        let err = TrailheadError::ProjectNotFound {
            path: PathBuf::from("/tmp/nowhere"),
        };
        assert!(err.to_string().contains("/tmp/nowhere"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TrailheadError = io_err.into();
        assert!(matches!(err, TrailheadError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: TrailheadError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
