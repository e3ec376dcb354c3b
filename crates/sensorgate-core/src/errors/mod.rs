//! Error handling for sensorgate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod index_error;
pub mod pipeline_error;
pub mod rule_error;
pub mod sensor_error;

pub use config_error::ConfigError;
pub use error_code::SensorGateErrorCode;
pub use index_error::IndexError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use rule_error::RuleError;
pub use sensor_error::SensorError;
