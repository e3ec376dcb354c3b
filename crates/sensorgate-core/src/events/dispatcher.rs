//! Synchronous event dispatch, free when no handler is registered.

use std::sync::Arc;

use super::handler::SensorEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn SensorEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn SensorEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A handler that panics is logged and skipped; later handlers still
    /// receive the event.
    fn emit<F: Fn(&dyn SensorEventHandler)>(&self, f: F) {
        for (index, handler) in self.handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!(handler = index, "event handler panicked");
            }
        }
    }

    pub fn emit_sensor_skipped(&self, event: &SensorSkippedEvent) {
        self.emit(|h| h.on_sensor_skipped(event));
    }

    pub fn emit_sensor_started(&self, event: &SensorStartedEvent) {
        self.emit(|h| h.on_sensor_started(event));
    }

    pub fn emit_sensor_finished(&self, event: &SensorFinishedEvent) {
        self.emit(|h| h.on_sensor_finished(event));
    }

    pub fn emit_sensor_failed(&self, event: &SensorFailedEvent) {
        self.emit(|h| h.on_sensor_failed(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
