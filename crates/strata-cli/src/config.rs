//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATA_OUTPUT__NO_COLOR=true`
//! 3. Config file: `--config <FILE>` or [`AppConfig::config_path`]
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "STRATA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Project settings.
    #[serde(default)]
    pub project: ProjectConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Root used when `--root` is not given.  Relative paths are resolved
    /// against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_from(&path, required, Self::environment())
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".strata.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    /// Environment source fed from a map so tests never read the process env.
    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment().source(Some(source))
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
        assert!(cfg.project.root.is_none());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let cfg =
            AppConfig::load_from(Path::new("/nonexistent/strata.toml"), false, env_from(&[]))
                .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        assert!(
            AppConfig::load_from(Path::new("/nonexistent/strata.toml"), true, env_from(&[]))
                .is_err()
        );
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_toml("[output]\nformat = \"json\"\n\n[project]\nroot = \"backend\"\n");
        let cfg = AppConfig::load_from(file.path(), true, env_from(&[])).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.project.root, Some(PathBuf::from("backend")));
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_toml("[output]\nno_color = false\n");
        let cfg = AppConfig::load_from(
            file.path(),
            true,
            env_from(&[("STRATA_OUTPUT__NO_COLOR", "true")]),
        )
        .unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn config_path_is_toml() {
        let p = AppConfig::config_path();
        assert_eq!(p.extension().and_then(|e| e.to_str()), Some("toml"));
    }
}
