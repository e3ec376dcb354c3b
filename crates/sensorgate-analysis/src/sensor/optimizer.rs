//! Sensor execution optimizer.
//!
//! A sensor runs only if every gate its descriptor declares passes. Gates are
//! checked cheapest first and the first failing one decides the skip reason:
//!
//! 1. preview: `disabled_in_preview` while the mode is preview
//! 2. properties: every required key is set
//! 3. rules: one required repository has an active rule
//! 4. files: one indexed file matches the language and type restrictions
//!
//! Gates are pure reads of the stores, so the order changes cost, never the
//! outcome of `should_execute`.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::descriptor::SensorDescriptor;
use crate::context::AnalysisContext;
use crate::fs::ProjectFileIndex;
use crate::mode::AnalysisMode;
use crate::rules::ActiveRules;
use crate::settings::Settings;

/// Why a sensor was not executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    DisabledInPreview,
    /// First missing required property, in key order.
    MissingProperty { key: String },
    NoActiveRule,
    NoMatchingFile,
}

impl SkipReason {
    /// Stable short code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DisabledInPreview => "disabled_in_preview",
            Self::MissingProperty { .. } => "missing_property",
            Self::NoActiveRule => "no_active_rule",
            Self::NoMatchingFile => "no_matching_file",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DisabledInPreview => f.write_str("it is disabled in preview mode"),
            Self::MissingProperty { key } => {
                write!(f, "the required property '{key}' is missing")
            }
            Self::NoActiveRule => {
                f.write_str("there is no related rule activated in the quality profile")
            }
            Self::NoMatchingFile => f.write_str("there is no related file in current project"),
        }
    }
}

/// Outcome of evaluating a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExecutionDecision {
    Execute,
    Skip(SkipReason),
}

impl ExecutionDecision {
    pub fn should_execute(&self) -> bool {
        matches!(self, Self::Execute)
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Execute => None,
            Self::Skip(reason) => Some(reason),
        }
    }
}

/// Decides whether a sensor should run, from its descriptor and the current
/// state of the file index, active rules, settings and analysis mode.
///
/// Holds shared handles only: files added to the index or properties set
/// after construction are visible to later decisions.
#[derive(Debug, Clone)]
pub struct SensorOptimizer {
    fs: Arc<ProjectFileIndex>,
    active_rules: Arc<ActiveRules>,
    settings: Arc<Settings>,
    mode: AnalysisMode,
}

impl SensorOptimizer {
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

    pub fn from_context(context: &AnalysisContext) -> Self {
        Self::new(
            Arc::clone(&context.fs),
            Arc::clone(&context.active_rules),
            Arc::clone(&context.settings),
            context.mode.clone(),
        )
    }

    /// True iff every gate declared by `descriptor` passes.
    pub fn should_execute(&self, descriptor: &SensorDescriptor) -> bool {
        self.evaluate(descriptor).should_execute()
    }

    /// Evaluate `descriptor`, logging the reason at debug level on skip.
    pub fn evaluate(&self, descriptor: &SensorDescriptor) -> ExecutionDecision {
        let decision = self.decide(descriptor);
        if let ExecutionDecision::Skip(reason) = &decision {
            debug!(
                sensor = descriptor.name(),
                skip_reason = reason.code(),
                "'{}' skipped because {}",
                descriptor.name(),
                reason
            );
        }
        decision
    }

    fn decide(&self, descriptor: &SensorDescriptor) -> ExecutionDecision {
        if descriptor.is_disabled_in_preview() && self.mode.is_preview() {
            return ExecutionDecision::Skip(SkipReason::DisabledInPreview);
        }

        if let Some(key) = self.settings.first_missing(descriptor.required_properties()) {
            return ExecutionDecision::Skip(SkipReason::MissingProperty { key });
        }

        let repositories = descriptor.rule_repositories();
        if !repositories.is_empty() && !self.active_rules.has_any_from_repository(repositories) {
            return ExecutionDecision::Skip(SkipReason::NoActiveRule);
        }

        let (languages, file_types) = (descriptor.languages(), descriptor.file_types());
        if (!languages.is_empty() || !file_types.is_empty())
            && !self.fs.has_match(languages, file_types)
        {
            return ExecutionDecision::Skip(SkipReason::NoMatchingFile);
        }

        ExecutionDecision::Execute
    }
}
