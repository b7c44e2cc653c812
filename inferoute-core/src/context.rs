//! Operational context acquisition.

use crate::config::RoutingConfig;
use crate::telemetry::TelemetrySource;
use crate::types::{InferenceTask, OperationalContext, Priority};
use std::sync::Arc;

/// Derives an [`OperationalContext`] for each incoming task.
///
/// Payload-derived signals (priority, sensitive data) come from
/// case-insensitive keyword scans of the input text; environmental signals
/// come from the injected [`TelemetrySource`]. Acquisition is total: a
/// payload with no recognizable cues falls back to the safe defaults
/// (low priority, not sensitive) rather than failing.
#[derive(Debug, Clone)]
pub struct ContextProvider {
    telemetry: Arc<dyn TelemetrySource>,
    config: Arc<RoutingConfig>,
}

impl ContextProvider {
    /// Create a new context provider
    pub fn new(telemetry: Arc<dyn TelemetrySource>, config: Arc<RoutingConfig>) -> Self {
        Self { telemetry, config }
    }

    /// Build the operational context snapshot for a task
    pub fn acquire(&self, task: &InferenceTask) -> OperationalContext {
        let input = task.input.to_lowercase();
        let sample = self.telemetry.sample();

        OperationalContext {
            required_latency_ms: sample.required_latency_ms,
            edge_available: sample.edge_available,
            system_load: sample.system_load,
            priority: self.derive_priority(&input),
            location: self.config.default_location,
            sensitive_data: self.derive_sensitive(&input),
        }
    }

    /// First match wins: high cues are checked before medium ones.
    fn derive_priority(&self, input: &str) -> Priority {
        if contains_any(input, &self.config.high_priority_cues) {
            Priority::High
        } else if contains_any(input, &self.config.medium_priority_cues) {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    fn derive_sensitive(&self, input: &str) -> bool {
        contains_any(input, &self.config.sensitive_cues)
    }
}

fn contains_any(input: &str, cues: &[String]) -> bool {
    cues.iter().any(|cue| input.contains(cue.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{StaticTelemetry, TelemetrySample};
    use crate::types::Location;

    fn provider() -> ContextProvider {
        let sample = TelemetrySample {
            required_latency_ms: 50.0,
            system_load: 0.3,
            edge_available: true,
        };
        ContextProvider::new(
            Arc::new(StaticTelemetry::new(sample)),
            Arc::new(RoutingConfig::default()),
        )
    }

    #[test]
    fn test_urgent_input_is_high_priority() {
        let ctx = provider().acquire(&InferenceTask::new("this is URGENT, please"));
        assert_eq!(ctx.priority, Priority::High);
    }

    #[test]
    fn test_critical_input_is_high_priority() {
        let ctx = provider().acquire(&InferenceTask::new("critical incident in region 2"));
        assert_eq!(ctx.priority, Priority::High);
    }

    #[test]
    fn test_important_input_is_medium_priority() {
        let ctx = provider().acquire(&InferenceTask::new("an Important review"));
        assert_eq!(ctx.priority, Priority::Medium);
    }

    #[test]
    fn test_high_cue_wins_over_medium_cue() {
        let ctx = provider().acquire(&InferenceTask::new("important and urgent"));
        assert_eq!(ctx.priority, Priority::High);
    }

    #[test]
    fn test_plain_input_is_low_priority() {
        let ctx = provider().acquire(&InferenceTask::new("hello world"));
        assert_eq!(ctx.priority, Priority::Low);
        assert!(!ctx.sensitive_data);
    }

    #[test]
    fn test_empty_input_falls_back_to_defaults() {
        let ctx = provider().acquire(&InferenceTask::new(""));
        assert_eq!(ctx.priority, Priority::Low);
        assert!(!ctx.sensitive_data);
        assert_eq!(ctx.location, Location::Remote);
    }

    #[test]
    fn test_sensitive_cues_are_detected() {
        for input in [
            "my Personal data",
            "keep this private",
            "CONFIDENTIAL report",
            "a secret plan",
            "DNI 12345678",
            "passport renewal",
        ] {
            let ctx = provider().acquire(&InferenceTask::new(input));
            assert!(ctx.sensitive_data, "expected sensitive for {input:?}");
        }
    }

    #[test]
    fn test_telemetry_sample_is_carried_through() {
        let ctx = provider().acquire(&InferenceTask::new("hello"));
        assert_eq!(ctx.required_latency_ms, 50.0);
        assert_eq!(ctx.system_load, 0.3);
        assert!(ctx.edge_available);
    }
}
