//! Event payload types for sensor lifecycle events.

/// Payload for `on_sensor_skipped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorSkippedEvent {
    pub sensor: String,
    /// Human-readable skip reason, as logged.
    pub reason: String,
}

/// Payload for `on_sensor_started`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorStartedEvent {
    pub sensor: String,
}

/// Payload for `on_sensor_finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorFinishedEvent {
    pub sensor: String,
    pub duration_ms: u64,
}

/// Payload for `on_sensor_failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorFailedEvent {
    pub sensor: String,
    pub message: String,
}
