//! Active rule entries, as resolved from quality profiles.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEVERITY, SEVERITIES};

/// One `[[active_rules]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ActiveRuleConfig {
    /// Rule repository key, e.g. "squid".
    pub repository: String,
    /// Rule key inside the repository.
    pub rule: String,
    /// Severity name. Default: "MAJOR".
    pub severity: Option<String>,
    /// Language the rule applies to, if any.
    pub language: Option<String>,
    /// Engine-specific key of the rule.
    pub internal_key: Option<String>,
    /// Rule parameters.
    pub params: std::collections::BTreeMap<String, String>,
}

impl ActiveRuleConfig {
    /// Returns the effective severity, uppercased, defaulting to "MAJOR".
    pub fn effective_severity(&self) -> String {
        self.severity
            .as_deref()
            .map(|s| s.trim().to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_SEVERITY.to_string())
    }

    /// Returns true if the effective severity is one of the known names.
    pub fn has_known_severity(&self) -> bool {
        SEVERITIES.contains(&self.effective_severity().as_str())
    }
}
