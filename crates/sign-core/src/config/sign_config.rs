//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{OutputConfig, OutputFormat, StorageConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SIGN_*`)
/// 3. Project config (`sign_compare.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SignConfig {
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub storage_dir: Option<String>,
    pub json: bool,
}

impl SignConfig {
    /// Load configuration rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SignConfig) -> Result<(), ConfigError> {
        if let Some(ref dir) = config.storage.dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref format) = config.output.format {
            if OutputFormat::parse(format).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.format".to_string(),
                    message: format!("expected \"text\" or \"json\", got {format:?}"),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut SignConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SignConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values override.
    fn merge(base: &mut SignConfig, other: &SignConfig) {
        if other.storage.dir.is_some() {
            base.storage.dir = other.storage.dir.clone();
        }
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
    }

    /// Pattern: `SIGN_STORAGE_DIR`, `SIGN_OUTPUT_FORMAT`.
    fn apply_env_overrides(config: &mut SignConfig) {
        if let Ok(val) = std::env::var("SIGN_STORAGE_DIR") {
            config.storage.dir = Some(val);
        }
        if let Ok(val) = std::env::var("SIGN_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
    }

    fn apply_cli_overrides(config: &mut SignConfig, cli: &CliOverrides) {
        if let Some(ref dir) = cli.storage_dir {
            config.storage.dir = Some(dir.clone());
        }
        if cli.json {
            config.output.format = Some("json".to_string());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
