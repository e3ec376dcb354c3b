//! Shared constants for the sensorgate optimizer.

/// Project-level configuration file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "sensorgate.toml";

/// User-level configuration directory name, relative to the home directory.
pub const USER_CONFIG_DIR: &str = ".sensorgate";

/// User-level configuration file name inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "SENSORGATE_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "sensorgate=info";

/// Environment variable overriding the analysis mode (`full` | `preview`).
pub const ANALYSIS_MODE_ENV_VAR: &str = "SENSORGATE_ANALYSIS_MODE";

/// Analysis mode name for a full run.
pub const MODE_FULL: &str = "full";

/// Analysis mode name for a preview run.
pub const MODE_PREVIEW: &str = "preview";

/// Severity given to an active rule that does not declare one.
pub const DEFAULT_SEVERITY: &str = "MAJOR";

/// Known rule severities, lowest first.
pub const SEVERITIES: [&str; 5] = ["INFO", "MINOR", "MAJOR", "CRITICAL", "BLOCKER"];

/// Separator between module key and relative path in an input file key.
pub const FILE_KEY_SEPARATOR: char = ':';

/// Separator between repository and rule in a textual rule key.
pub const RULE_KEY_SEPARATOR: char = ':';
