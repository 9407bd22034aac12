//! Runtime version gate.
//!
//! Runs `<runtime> --version`, pulls the first version number out of the
//! output, and compares it with the configured minimum.

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::RuntimeConfig;
use crate::shell::{CommandLine, CommandOptions, CommandRunner};

use super::outcome::StepOutcome;

/// How a found version is compared with the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionComparison {
    /// Component-wise integer comparison. Missing components count as 0.
    #[default]
    Numeric,
    /// Plain string comparison of the version text.
    ///
    /// Matches what older setup scripts did with `process.version`, and
    /// shares their flaw: `"9.0.0"` sorts after `"18.0.0"`.
    Lexical,
}

/// A version number such as `20.11.0`, without any leading `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersion {
    text: String,
    parts: Vec<u64>,
}

impl RuntimeVersion {
    /// Parse the first version number found in `input`.
    ///
    /// Accepts `v20.11.0`, `20.11`, `18`, or tool output like
    /// `node v20.11.0 (lts)`.
    pub fn parse(input: &str) -> Option<Self> {
        let text = extract_version(input)?;
        let parts = text
            .split('.')
            .map(|p| p.parse().ok())
            .collect::<Option<Vec<u64>>>()?;
        Some(Self { text, parts })
    }

    /// The version text, e.g. `20.11.0`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric components.
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// Compare with another version using the given mode.
    pub fn compare(&self, other: &RuntimeVersion, mode: VersionComparison) -> Ordering {
        match mode {
            VersionComparison::Numeric => compare_numeric(&self.parts, &other.parts),
            VersionComparison::Lexical => self.text.cmp(&other.text),
        }
    }

    /// Whether this version is at least `minimum`.
    pub fn satisfies(&self, minimum: &RuntimeVersion, mode: VersionComparison) -> bool {
        self.compare(minimum, mode) != Ordering::Less
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn compare_numeric(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let l = a.get(i).copied().unwrap_or(0);
        let r = b.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+){0,2})").expect("version pattern is valid"));

/// Extract the first `N`, `N.N` or `N.N.N` version from command output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check the installed runtime against the configured minimum.
pub fn check_runtime(
    config: &RuntimeConfig,
    runner: &dyn CommandRunner,
    project_root: &Path,
) -> StepOutcome {
    let Some(minimum) = RuntimeVersion::parse(&config.minimum_version) else {
        return StepOutcome::Fatal(format!(
            "Invalid minimum {} version '{}'",
            config.name, config.minimum_version
        ));
    };

    let command = CommandLine::new(&config.command, ["--version"]);
    let result = match runner.run(&command, &CommandOptions::captured(project_root)) {
        Ok(result) if result.success => result,
        Ok(result) => {
            return StepOutcome::Fatal(format!(
                "`{}` exited with code {}; is {} installed correctly?",
                command,
                result
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                config.name
            ));
        }
        Err(e) if e.is_program_missing() => {
            return StepOutcome::Fatal(format!(
                "{} {} or higher is required, but `{}` was not found",
                config.name, minimum, config.command
            ));
        }
        Err(e) => {
            return StepOutcome::Fatal(format!(
                "Could not check the {} version: {}",
                config.name, e
            ));
        }
    };

    let Some(found) = RuntimeVersion::parse(&result.stdout) else {
        return StepOutcome::Fatal(format!(
            "Could not read a version from `{}` output: {}",
            command,
            result.stdout.trim()
        ));
    };

    tracing::debug!(
        "{} version {} (minimum {}, {:?} comparison)",
        config.name,
        found,
        minimum,
        config.comparison
    );

    if found.satisfies(&minimum, config.comparison) {
        StepOutcome::Completed(format!("{} v{}", config.name, found))
    } else {
        StepOutcome::Fatal(format!(
            "{} {} or higher is required. Current version: v{}",
            config.name, minimum, found
        ))
    }
}
