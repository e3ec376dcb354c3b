//! Top-level sensorgate configuration with 4-layer resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ActiveRuleConfig, AnalysisConfig};
use crate::constants::{
    ANALYSIS_MODE_ENV_VAR, MODE_FULL, MODE_PREVIEW, PROJECT_CONFIG_FILE, USER_CONFIG_DIR,
    USER_CONFIG_FILE,
};
use crate::errors::ConfigError;

/// Top-level configuration feeding the optimizer's stores.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SENSORGATE_*`)
/// 3. Project config (`sensorgate.toml` in project root)
/// 4. User config (`~/.sensorgate/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SensorGateConfig {
    pub analysis: AnalysisConfig,
    /// Flat analysis properties (the configuration store contents).
    pub properties: BTreeMap<String, String>,
    /// Active rules resolved from quality profiles.
    pub active_rules: Vec<ActiveRuleConfig>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub analysis_mode: Option<String>,
    pub properties: BTreeMap<String, String>,
}

impl SensorGateConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        ::tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SensorGateConfig) -> Result<(), ConfigError> {
        let mode = config.analysis.effective_mode();
        if mode != MODE_FULL && mode != MODE_PREVIEW {
            return Err(ConfigError::InvalidValue {
                field: "analysis.mode".to_string(),
                message: format!("expected '{MODE_FULL}' or '{MODE_PREVIEW}', got '{mode}'"),
            });
        }

        for (index, rule) in config.active_rules.iter().enumerate() {
            if rule.repository.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("active_rules[{index}].repository"),
                    message: "must not be empty".to_string(),
                });
            }
            if rule.rule.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("active_rules[{index}].rule"),
                    message: "must not be empty".to_string(),
                });
            }
            if !rule.has_known_severity() {
                return Err(ConfigError::InvalidValue {
                    field: format!("active_rules[{index}].severity"),
                    message: format!("unknown severity '{}'", rule.effective_severity()),
                });
            }
        }

        if config.properties.keys().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "properties".to_string(),
                message: "property keys must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.sensorgate/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SensorGateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SensorGateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Scalars override only when set,
    /// properties override key by key, active rules accumulate.
    fn merge(base: &mut SensorGateConfig, other: SensorGateConfig) {
        if other.analysis.mode.is_some() {
            base.analysis.mode = other.analysis.mode;
        }
        base.properties.extend(other.properties);
        base.active_rules.extend(other.active_rules);
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut SensorGateConfig) {
        if let Ok(val) = std::env::var(ANALYSIS_MODE_ENV_VAR) {
            if let Some(mode) = normalize_mode(&val) {
                config.analysis.mode = Some(mode);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SensorGateConfig, cli: &CliOverrides) {
        if let Some(mode) = cli.analysis_mode.as_deref().and_then(normalize_mode) {
            config.analysis.mode = Some(mode);
        }
        config
            .properties
            .extend(cli.properties.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Trimmed, lowercased mode name; `None` when blank.
fn normalize_mode(value: &str) -> Option<String> {
    let mode = value.trim().to_ascii_lowercase();
    (!mode.is_empty()).then_some(mode)
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
