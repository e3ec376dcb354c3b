//! Analysis mode flag: full analysis or preview.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sensorgate_core::config::AnalysisConfig;
use sensorgate_core::constants::{MODE_FULL, MODE_PREVIEW};

/// Shared analysis mode handle.
///
/// Clones share one flag, so the mode selector and every optimizer built
/// from a clone observe the same value.
#[derive(Debug, Clone, Default)]
pub struct AnalysisMode {
    preview: Arc<AtomicBool>,
}

impl AnalysisMode {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn preview() -> Self {
        let mode = Self::default();
        mode.set_preview(true);
        mode
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        if config.is_preview() {
            Self::preview()
        } else {
            Self::full()
        }
    }

    pub fn is_preview(&self) -> bool {
        self.preview.load(Ordering::Acquire)
    }

    /// Switch mode. Meant for the mode selector, before sensors are evaluated.
    pub fn set_preview(&self, preview: bool) {
        self.preview.store(preview, Ordering::Release);
    }

    pub fn name(&self) -> &'static str {
        if self.is_preview() {
            MODE_PREVIEW
        } else {
            MODE_FULL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_full() {
        assert!(!AnalysisMode::default().is_preview());
        assert_eq!(AnalysisMode::full().name(), "full");
        assert_eq!(AnalysisMode::preview().name(), "preview");
    }

    #[test]
    fn clones_share_the_flag() {
        let selector = AnalysisMode::full();
        let reader = selector.clone();
        selector.set_preview(true);
        assert!(reader.is_preview());
    }

    #[test]
    fn built_from_config() {
        let config = AnalysisConfig {
            mode: Some("preview".into()),
        };
        assert!(AnalysisMode::from_config(&config).is_preview());
        assert!(!AnalysisMode::from_config(&AnalysisConfig::default()).is_preview());
    }
}
