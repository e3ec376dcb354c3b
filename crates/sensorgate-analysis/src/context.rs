//! Bundle of the four stores the optimizer and sensors read from.

use std::path::Path;
use std::sync::Arc;

use sensorgate_core::config::{CliOverrides, SensorGateConfig};
use sensorgate_core::errors::PipelineError;

use crate::fs::ProjectFileIndex;
use crate::mode::AnalysisMode;
use crate::rules::{ActiveRules, ActiveRulesBuilder};
use crate::settings::Settings;

/// Shared, cheaply cloneable view of one analysis run.
///
/// The file index starts empty; file discovery fills it through
/// [`ProjectFileIndex::add`] on the shared handle.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    pub fs: Arc<ProjectFileIndex>,
    pub active_rules: Arc<ActiveRules>,
    pub settings: Arc<Settings>,
    pub mode: AnalysisMode,
}

impl AnalysisContext {
    pub fn new(
        fs: Arc<ProjectFileIndex>,
        active_rules: Arc<ActiveRules>,
        settings: Arc<Settings>,
        mode: AnalysisMode,
    ) -> Self {
        Self {
            fs,
            active_rules,
            settings,
            mode,
        }
    }

    /// Context for a resolved configuration: properties become settings,
    /// `[[active_rules]]` become the active rule registry, `[analysis].mode`
    /// sets the mode. The file index is empty.
    pub fn from_config(config: &SensorGateConfig) -> Result<Self, PipelineError> {
        let active_rules = ActiveRulesBuilder::from_config(&config.active_rules)?.build();
        let settings = Settings::from_properties(config.properties.iter());
        Ok(Self {
            fs: Arc::new(ProjectFileIndex::new()),
            active_rules: Arc::new(active_rules),
            settings: Arc::new(settings),
            mode: AnalysisMode::from_config(&config.analysis),
        })
    }

    /// Load the layered configuration for `root` and build a context from it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, PipelineError> {
        let config = SensorGateConfig::load(root, cli_overrides)?;
        let context = Self::from_config(&config)?;
        tracing::debug!(
            mode = context.mode.name(),
            active_rules = context.active_rules.len(),
            properties = context.settings.len(),
            "analysis context loaded"
        );
        Ok(context)
    }
}
