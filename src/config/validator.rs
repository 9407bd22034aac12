//! Configuration validation.

use crate::config::schema::TrailheadConfig;
use crate::error::{Result, TrailheadError};
use crate::steps::runtime_version::RuntimeVersion;

/// Validate a parsed configuration, returning the first problem found.
pub fn validate(config: &TrailheadConfig) -> Result<()> {
    if config.package_managers.is_empty() {
        return Err(invalid("package_managers must list at least one manager"));
    }

    if config.runtime.command.trim().is_empty() {
        return Err(invalid("runtime.command must not be empty"));
    }

    if RuntimeVersion::parse(&config.runtime.minimum_version).is_none() {
        return Err(invalid(&format!(
            "runtime.minimum_version '{}' is not a version number",
            config.runtime.minimum_version
        )));
    }

    let scripts = [
        ("scripts.typecheck", &config.scripts.typecheck),
        ("scripts.lint", &config.scripts.lint),
        ("scripts.lint_fix", &config.scripts.lint_fix),
    ];
    for (field, value) in scripts {
        if value.trim().is_empty() {
            return Err(invalid(&format!("{} must not be empty", field)));
        }
    }

    if config.build_dir.as_os_str().is_empty() {
        return Err(invalid("build_dir must not be empty"));
    }

    Ok(())
}

fn invalid(message: &str) -> TrailheadError {
    TrailheadError::ConfigValidationError {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&TrailheadConfig::default()).is_ok());
    }

    #[test]
    fn empty_package_manager_list_is_invalid() {
        let config = TrailheadConfig {
            package_managers: vec![],
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("package_managers"));
    }

    #[test]
    fn unparseable_minimum_version_is_invalid() {
        let mut config = TrailheadConfig::default();
        config.runtime.minimum_version = "latest".to_string();

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("latest"));
    }

    #[test]
    fn blank_script_name_is_invalid() {
        let mut config = TrailheadConfig::default();
        config.scripts.lint_fix = "  ".to_string();

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("scripts.lint_fix"));
    }

    #[test]
    fn empty_build_dir_is_invalid() {
        let config = TrailheadConfig {
            build_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }
}
