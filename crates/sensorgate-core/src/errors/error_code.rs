//! SensorGateErrorCode trait for structured error reporting.

/// Trait for attaching a stable error code to sensorgate errors.
/// Every error enum implements this so operators can grep and
/// aggregate failures by code rather than by message text.
pub trait SensorGateErrorCode {
    /// Returns the error code string (e.g., "DUPLICATE_KEY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const DUPLICATE_KEY: &str = "DUPLICATE_KEY";
pub const RULE_ERROR: &str = "RULE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SENSOR_ERROR: &str = "SENSOR_ERROR";
