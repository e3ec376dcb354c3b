//! # sensorgate-analysis
//!
//! Sensor execution optimizer for the sensorgate analysis pipeline.
//! Decides, before a sensor runs, whether its declared requirements can be
//! met by the current project: indexed files, active rules, configuration
//! properties and analysis mode.

pub mod context;
pub mod fs;
pub mod mode;
pub mod rules;
pub mod sensor;
pub mod settings;

pub use context::AnalysisContext;
pub use fs::{InputFile, InputFileType, ProjectFileIndex};
pub use mode::AnalysisMode;
pub use rules::{ActiveRule, ActiveRules, ActiveRulesBuilder, RuleKey, Severity};
pub use sensor::{
    ExecutionDecision, ExecutionSummary, Sensor, SensorDescriptor, SensorExecutor,
    SensorOptimizer, SkipReason,
};
pub use settings::Settings;
