//! Telemetry sampling for operational conditions.
//!
//! The router observes latency requirements, system load, and edge
//! availability through the [`TelemetrySource`] trait so the decision engine
//! never depends on where those numbers come from. [`UniformTelemetry`] is a
//! stand-in for a real metrics provider.

use rand::Rng;
use std::fmt::Debug;

/// One sample of the operational conditions the decision engine consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySample {
    /// Latency requirement for the task, in milliseconds
    pub required_latency_ms: f64,
    /// Normalized system load in [0, 1]
    pub system_load: f64,
    /// Whether the edge venue is currently reachable
    pub edge_available: bool,
}

/// Source of operational telemetry, sampled once per request.
pub trait TelemetrySource: Send + Sync + Debug + 'static {
    /// Sample the current operational conditions
    fn sample(&self) -> TelemetrySample;
}

/// Uniform-random telemetry stand-in.
///
/// Latency is drawn from [0, 200) ms, load from [0, 1), and the edge venue
/// reports available with probability 0.7. Production deployments replace
/// this with a source backed by real metrics.
#[derive(Debug, Clone, Default)]
pub struct UniformTelemetry;

impl UniformTelemetry {
    /// Create a new uniform telemetry source
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySource for UniformTelemetry {
    fn sample(&self) -> TelemetrySample {
        let mut rng = rand::thread_rng();
        TelemetrySample {
            required_latency_ms: rng.gen_range(0.0..200.0),
            system_load: rng.gen::<f64>(),
            edge_available: rng.gen_bool(0.7),
        }
    }
}

/// Telemetry source that always returns the same sample.
///
/// Useful for tests and for deployments that pin operational conditions.
#[derive(Debug, Clone)]
pub struct StaticTelemetry {
    sample: TelemetrySample,
}

impl StaticTelemetry {
    /// Create a source that always returns `sample`
    pub fn new(sample: TelemetrySample) -> Self {
        Self { sample }
    }
}

impl TelemetrySource for StaticTelemetry {
    fn sample(&self) -> TelemetrySample {
        self.sample
    }
}
