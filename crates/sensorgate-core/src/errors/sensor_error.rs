//! Sensor execution errors.

use super::error_code::{self, SensorGateErrorCode};

/// Errors a sensor reports back to the executor.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("Sensor '{sensor}' failed: {message}")]
    ExecutionFailed { sensor: String, message: String },

    #[error("Sensor '{sensor}' panicked")]
    Panicked { sensor: String },
}

impl SensorError {
    /// Shorthand for [`SensorError::ExecutionFailed`].
    pub fn failed(sensor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            sensor: sensor.into(),
            message: message.into(),
        }
    }
}

impl SensorGateErrorCode for SensorError {
    fn error_code(&self) -> &'static str {
        error_code::SENSOR_ERROR
    }
}
