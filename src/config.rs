//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lazyseq/lazyseq.toml`
//! 3. Local config: `<dir>/.lazyseq.toml`
//! 4. Environment variables: `LAZYSEQ_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Upper bound for `take`; larger values are rejected when loading.
pub const MAX_TAKE: usize = 1_000_000;

/// Unified configuration for lazyseq.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// How many values to take from unbounded sequences (default: 10, at most `MAX_TAKE`)
    pub take: usize,
    /// Separator placed between rendered items (default: newline)
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            take: 10,
            separator: "\n".into(),
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub take: Option<usize>,
    pub separator: Option<String>,
}

/// Get the XDG config directory for lazyseq.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lazyseq").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lazyseq.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".lazyseq.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            take: overlay.take.unwrap_or(self.take),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.lazyseq.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("loading local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        let current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.take > MAX_TAKE {
            return Err(ApplicationError::Config {
                message: format!("take = {} exceeds maximum {}", self.take, MAX_TAKE),
            });
        }
        Ok(())
    }

    /// Apply LAZYSEQ_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(Environment::with_prefix("LAZYSEQ").try_parsing(true))
            .build()
            .map_err(config_err)?;

        match config.get::<usize>("take") {
            Ok(val) => settings.take = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# lazyseq configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/lazyseq/lazyseq.toml
#   Local:  <dir>/.lazyseq.toml
#   Env:    LAZYSEQ_* environment variables

# Number of values taken from unbounded sequences
# take = 10

# Separator between rendered items
# separator = "\n"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
