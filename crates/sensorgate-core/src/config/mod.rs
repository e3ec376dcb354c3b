//! Configuration system for sensorgate.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod rule_config;
pub mod sensorgate_config;

pub use analysis_config::AnalysisConfig;
pub use rule_config::ActiveRuleConfig;
pub use sensorgate_config::{CliOverrides, SensorGateConfig};
