//! Sensors, their declared requirements, and the optimizer deciding
//! whether a sensor can produce anything on the current project.

pub mod descriptor;
pub mod executor;
pub mod optimizer;
pub mod traits;

pub use descriptor::SensorDescriptor;
pub use executor::{ExecutionSummary, SensorExecutor, SkippedSensor};
pub use optimizer::{ExecutionDecision, SensorOptimizer, SkipReason};
pub use traits::Sensor;
