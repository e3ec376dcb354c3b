//! Sensor trait.

use sensorgate_core::errors::SensorError;

use super::descriptor::SensorDescriptor;
use crate::context::AnalysisContext;

/// A pluggable analyzer.
///
/// The optimizer only looks at [`describe`](Sensor::describe); it never
/// depends on what a sensor does in [`execute`](Sensor::execute).
pub trait Sensor: Send + Sync {
    /// Declare the preconditions under which this sensor can produce output.
    fn describe(&self) -> SensorDescriptor;

    /// Run the sensor. Only called when the optimizer allowed it.
    fn execute(&self, context: &AnalysisContext) -> Result<(), SensorError>;
}
