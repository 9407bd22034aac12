//! Build output directory.

use std::fs;
use std::path::Path;

use crate::error::Result;

use super::outcome::StepOutcome;

/// Make sure the build directory exists, creating parents as needed.
pub fn ensure_build_dir(project_root: &Path, build_dir: &Path) -> Result<StepOutcome> {
    let path = project_root.join(build_dir);

    if path.is_dir() {
        return Ok(StepOutcome::Skipped(format!(
            "{} already exists",
            build_dir.display()
        )));
    }

    fs::create_dir_all(&path)?;
    tracing::debug!("Created {}", path.display());

    Ok(StepOutcome::Completed(format!(
        "Created {} directory",
        build_dir.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_directory() {
        let temp = TempDir::new().unwrap();

        let outcome = ensure_build_dir(temp.path(), Path::new("dist")).unwrap();

        assert!(matches!(outcome, StepOutcome::Completed(_)));
        assert!(temp.path().join("dist").is_dir());
    }

    #[test]
    fn creates_intermediate_directories() {
        let temp = TempDir::new().unwrap();

        ensure_build_dir(temp.path(), Path::new("build/chrome/dev")).unwrap();

        assert!(temp.path().join("build/chrome/dev").is_dir());
    }

    #[test]
    fn existing_directory_is_left_alone() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dist")).unwrap();
        fs::write(temp.path().join("dist/manifest.json"), "{}").unwrap();

        let first = ensure_build_dir(temp.path(), Path::new("dist")).unwrap();
        let second = ensure_build_dir(temp.path(), Path::new("dist")).unwrap();

        assert!(matches!(first, StepOutcome::Skipped(_)));
        assert_eq!(first, second);
        assert!(temp.path().join("dist/manifest.json").exists());
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dist"), "not a dir").unwrap();

        assert!(ensure_build_dir(temp.path(), Path::new("dist")).is_err());
    }
}
