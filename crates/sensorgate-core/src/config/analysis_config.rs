//! Analysis mode configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{MODE_FULL, MODE_PREVIEW};

/// Configuration for the `[analysis]` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Analysis mode: "full" | "preview". Default: "full".
    pub mode: Option<String>,
}

impl AnalysisConfig {
    /// Returns the effective mode, defaulting to "full".
    pub fn effective_mode(&self) -> &str {
        self.mode.as_deref().unwrap_or(MODE_FULL)
    }

    /// Returns true when the effective mode is preview.
    pub fn is_preview(&self) -> bool {
        self.effective_mode() == MODE_PREVIEW
    }
}
