//! Rule key and active rule errors.

use super::error_code::{self, SensorGateErrorCode};

/// Errors that can occur while building rule keys and active rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid rule key '{value}': expected 'repository:rule'")]
    InvalidRuleKey { value: String },

    #[error("Unknown severity: {value}")]
    UnknownSeverity { value: String },
}

impl SensorGateErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_ERROR
    }
}
