//! Observability for sensorgate.
//! `tracing` crate with `EnvFilter`, per-target log levels.
//!
//! Log events use the same structured field names across crates:
//! `sensor`, `skip_reason`, `elapsed_ms`, `executed`, `skipped`, `failed`.

pub mod setup;

pub use setup::init_tracing;
