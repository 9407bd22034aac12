//! Configuration file discovery and loading.

use crate::config::schema::TrailheadConfig;
use crate::config::validator::validate;
use crate::error::{Result, TrailheadError};
use std::fs;
use std::path::{Path, PathBuf};

/// File names checked in the project root, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".trailhead.yml", ".trailhead.yaml"];

/// Find the project config file, if any.
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file and parse it into [`TrailheadConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<TrailheadConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TrailheadError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TrailheadError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`TrailheadConfig`].
///
/// An empty document is treated as an empty mapping, so every field takes
/// its default.
pub fn parse_config(content: &str, source_path: &Path) -> Result<TrailheadConfig> {
    if content.trim().is_empty() {
        return Ok(TrailheadConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| TrailheadError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the configuration for a project.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project root is searched and the defaults are used when nothing is found.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<TrailheadConfig> {
    let config = match config_override {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => match find_config_file(project_root) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            }
            None => {
                tracing::debug!("No config file in {}, using defaults", project_root.display());
                TrailheadConfig::default()
            }
        },
    };

    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_config_prefers_yml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".trailhead.yml"), "").unwrap();
        fs::write(temp.path().join(".trailhead.yaml"), "").unwrap();

        let found = find_config_file(temp.path()).unwrap();
        assert!(found.ends_with(".trailhead.yml"));
    }

    #[test]
    fn find_config_accepts_yaml_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".trailhead.yaml"), "").unwrap();

        let found = find_config_file(temp.path()).unwrap();
        assert!(found.ends_with(".trailhead.yaml"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, TrailheadConfig::default());
    }

    #[test]
    fn empty_config_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".trailhead.yml"), "\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, TrailheadConfig::default());
    }

    #[test]
    fn discovered_config_is_applied() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".trailhead.yml"), "build_dir: out\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.build_dir, PathBuf::from("out"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let result = load_config(temp.path(), Some(&path));

        assert!(matches!(result, Err(TrailheadError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".trailhead.yml");
        fs::write(&path, "build_dir: [unclosed").unwrap();

        let err = load_config(temp.path(), None).unwrap_err();

        assert!(matches!(err, TrailheadError::ConfigParseError { .. }));
        assert!(err.to_string().contains(".trailhead.yml"));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".trailhead.yml"), "package_managers: []\n").unwrap();

        let result = load_config(temp.path(), None);

        assert!(matches!(
            result,
            Err(TrailheadError::ConfigValidationError { .. })
        ));
    }
}
