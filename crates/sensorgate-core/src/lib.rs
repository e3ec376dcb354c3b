//! # sensorgate-core
//!
//! Shared foundation for the sensorgate sensor execution optimizer.
//! Provides error enums, layered configuration, tracing setup,
//! event dispatch, collection and interning types, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
