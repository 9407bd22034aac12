//! Configuration loading, parsing, and validation.
//!
//! Configuration is optional. When a project has no `.trailhead.yml`, the
//! defaults describe a standard Node.js project: `node` ≥ 18, `pnpm`/`npm`/
//! `yarn`, `.env.example` → `.env`, and a `dist` build directory.
//!
//! # Example
//!
//! ```
//! use trailhead::config::{load_config, TrailheadConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".trailhead.yml"), "build_dir: build").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.build_dir, std::path::PathBuf::from("build"));
//! assert_eq!(config.runtime, TrailheadConfig::default().runtime);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, CONFIG_FILE_NAMES};
pub use schema::{
    default_browser_paths, BrowserConfig, EnvFileConfig, RuntimeConfig, ScriptsConfig,
    TrailheadConfig,
};
pub use validator::validate;
