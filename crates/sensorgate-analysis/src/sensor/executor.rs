//! Sensor executor: asks the optimizer about every sensor, runs the ones
//! that can produce output, and reports what happened.
//!
//! A failing sensor does not abort the run. Its error is collected as a
//! non-fatal entry of the returned [`PipelineResult`].

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use sensorgate_core::errors::{PipelineResult, SensorError};
use sensorgate_core::events::{
    EventDispatcher, SensorFailedEvent, SensorFinishedEvent, SensorSkippedEvent,
    SensorStartedEvent,
};
use serde::Serialize;
use tracing::{info, warn};

use super::optimizer::{ExecutionDecision, SensorOptimizer, SkipReason};
use super::traits::Sensor;
use crate::context::AnalysisContext;

/// A sensor the optimizer filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSensor {
    pub name: String,
    pub reason: SkipReason,
}

/// What a run did, sensor by sensor, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionSummary {
    pub executed: Vec<String>,
    pub skipped: Vec<SkippedSensor>,
    pub failed: Vec<String>,
    pub elapsed_ms: u64,
}

impl ExecutionSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Drives a list of sensors through the optimizer.
#[derive(Debug, Clone)]
pub struct SensorExecutor {
    context: AnalysisContext,
    optimizer: SensorOptimizer,
    events: EventDispatcher,
}

impl SensorExecutor {
    pub fn new(context: AnalysisContext) -> Self {
        let optimizer = SensorOptimizer::from_context(&context);
        Self {
            context,
            optimizer,
            events: EventDispatcher::new(),
        }
    }

    /// Replace the event dispatcher.
    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn optimizer(&self) -> &SensorOptimizer {
        &self.optimizer
    }

    pub fn context(&self) -> &AnalysisContext {
        &self.context
    }

    /// Evaluate and run `sensors` in order.
    pub fn execute(&self, sensors: &[Box<dyn Sensor>]) -> PipelineResult<ExecutionSummary> {
        let start = Instant::now();
        let mut result = PipelineResult::new(ExecutionSummary::default());

        for (position, sensor) in sensors.iter().enumerate() {
            let descriptor = match catch_unwind(AssertUnwindSafe(|| sensor.describe())) {
                Ok(descriptor) => descriptor,
                Err(_) => {
                    // No descriptor, so no name: report the sensor by position.
                    let name = format!("#{position}");
                    let err = SensorError::Panicked {
                        sensor: name.clone(),
                    };
                    self.report_failure(&name, 0, &err);
                    result.data.failed.push(name);
                    result.add_error(err);
                    continue;
                }
            };
            let name = descriptor.name().to_string();

            match self.optimizer.evaluate(&descriptor) {
                ExecutionDecision::Skip(reason) => {
                    self.events.emit_sensor_skipped(&SensorSkippedEvent {
                        sensor: name.clone(),
                        reason: reason.to_string(),
                    });
                    result.data.skipped.push(SkippedSensor { name, reason });
                }
                ExecutionDecision::Execute => match self.run_one(sensor.as_ref(), &name) {
                    Ok(()) => result.data.executed.push(name),
                    Err(err) => {
                        result.data.failed.push(name);
                        result.add_error(err);
                    }
                },
            }
        }

        result.data.elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            executed = result.data.executed.len(),
            skipped = result.data.skipped.len(),
            failed = result.data.failed.len(),
            elapsed_ms = result.data.elapsed_ms,
            indexed_files = self.context.fs.len(),
            "sensor run complete"
        );
        result
    }

    fn run_one(&self, sensor: &dyn Sensor, name: &str) -> Result<(), SensorError> {
        self.events.emit_sensor_started(&SensorStartedEvent {
            sensor: name.to_string(),
        });
        let start = Instant::now();

        let outcome = catch_unwind(AssertUnwindSafe(|| sensor.execute(&self.context)))
            .unwrap_or_else(|_| {
                Err(SensorError::Panicked {
                    sensor: name.to_string(),
                })
            });

        let elapsed_ms = start.elapsed().as_millis() as u64;
        match outcome {
            Ok(()) => {
                self.events.emit_sensor_finished(&SensorFinishedEvent {
                    sensor: name.to_string(),
                    duration_ms: elapsed_ms,
                });
                Ok(())
            }
            Err(err) => {
                self.report_failure(name, elapsed_ms, &err);
                Err(err)
            }
        }
    }

    fn report_failure(&self, name: &str, elapsed_ms: u64, err: &SensorError) {
        warn!(sensor = name, elapsed_ms, error = %err, "sensor failed");
        self.events.emit_sensor_failed(&SensorFailedEvent {
            sensor: name.to_string(),
            message: err.to_string(),
        });
    }
}
