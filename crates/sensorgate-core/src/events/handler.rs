//! SensorEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing sensor lifecycle events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. The trait requires `Send + Sync`
/// so handlers can be shared with multi-threaded pipelines.
pub trait SensorEventHandler: Send + Sync {
    fn on_sensor_skipped(&self, _event: &SensorSkippedEvent) {}
    fn on_sensor_started(&self, _event: &SensorStartedEvent) {}
    fn on_sensor_finished(&self, _event: &SensorFinishedEvent) {}
    fn on_sensor_failed(&self, _event: &SensorFailedEvent) {}
}
