//! Local environment file seeding.

use std::fs;
use std::path::Path;

use crate::config::EnvFileConfig;
use crate::error::Result;

use super::outcome::StepOutcome;

/// Copy the env template to the local override if the override is absent.
///
/// An existing override is never touched. A missing template is not an
/// error; there is simply nothing to copy.
pub fn init_env_file(project_root: &Path, config: &EnvFileConfig) -> Result<StepOutcome> {
    let target = project_root.join(&config.target);
    let template = project_root.join(&config.template);

    if target.exists() {
        tracing::debug!("{} already exists", target.display());
        return Ok(StepOutcome::Skipped(format!(
            "{} already exists",
            config.target.display()
        )));
    }

    if !template.exists() {
        tracing::debug!("No template at {}", template.display());
        return Ok(StepOutcome::Skipped(format!(
            "No {} template found",
            config.template.display()
        )));
    }

    fs::copy(&template, &target)?;

    Ok(StepOutcome::Completed(format!(
        "Created {} from {}",
        config.target.display(),
        config.template.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_template_when_target_missing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env.example"), "API_URL=http://localhost\n").unwrap();

        let outcome = init_env_file(temp.path(), &EnvFileConfig::default()).unwrap();

        assert!(matches!(outcome, StepOutcome::Completed(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join(".env")).unwrap(),
            "API_URL=http://localhost\n"
        );
    }

    #[test]
    fn copy_is_byte_for_byte() {
        let temp = TempDir::new().unwrap();
        let bytes = b"KEY=\xff\xfe\r\nOTHER=1";
        fs::write(temp.path().join(".env.example"), bytes).unwrap();

        init_env_file(temp.path(), &EnvFileConfig::default()).unwrap();

        assert_eq!(fs::read(temp.path().join(".env")).unwrap(), bytes);
    }

    #[test]
    fn never_overwrites_existing_target() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env.example"), "TEMPLATE=1\n").unwrap();
        fs::write(temp.path().join(".env"), "MINE=1\n").unwrap();

        let outcome = init_env_file(temp.path(), &EnvFileConfig::default()).unwrap();

        assert!(matches!(outcome, StepOutcome::Skipped(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join(".env")).unwrap(),
            "MINE=1\n"
        );
    }

    #[test]
    fn running_twice_matches_running_once() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env.example"), "A=1\n").unwrap();

        init_env_file(temp.path(), &EnvFileConfig::default()).unwrap();
        let first = fs::read(temp.path().join(".env")).unwrap();

        fs::write(temp.path().join(".env.example"), "A=2\n").unwrap();
        let second_outcome = init_env_file(temp.path(), &EnvFileConfig::default()).unwrap();
        let second = fs::read(temp.path().join(".env")).unwrap();

        assert!(matches!(second_outcome, StepOutcome::Skipped(_)));
        assert_eq!(first, second);
    }

    #[test]
    fn missing_template_is_skipped_silently() {
        let temp = TempDir::new().unwrap();

        let outcome = init_env_file(temp.path(), &EnvFileConfig::default()).unwrap();

        assert!(matches!(outcome, StepOutcome::Skipped(_)));
        assert!(!temp.path().join(".env").exists());
    }

    #[test]
    fn honors_configured_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("config")).unwrap();
        fs::write(temp.path().join("config/app.env.sample"), "X=1").unwrap();
        let config = EnvFileConfig {
            template: "config/app.env.sample".into(),
            target: "config/app.env".into(),
        };

        init_env_file(temp.path(), &config).unwrap();

        assert!(temp.path().join("config/app.env").exists());
    }
}
