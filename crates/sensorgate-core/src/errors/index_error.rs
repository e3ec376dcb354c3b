//! Project file index errors.

use super::error_code::{self, SensorGateErrorCode};

/// Errors raised while populating the project file index.
///
/// A duplicate key means the discovery subsystem reported the same file
/// twice. The index rejects the second insert and keeps its state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("Duplicate input file key: {key}")]
    DuplicateKey { key: String },
}

impl SensorGateErrorCode for IndexError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateKey { .. } => error_code::DUPLICATE_KEY,
        }
    }
}
