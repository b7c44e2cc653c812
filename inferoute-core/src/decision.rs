//! The decision engine: scores both venues and picks one.
//!
//! `decide()` is a pure function of the operational context. All randomness
//! lives in the telemetry source; given the same context the engine returns
//! the same decision, which is what keeps the scoring law independently
//! testable.

use crate::config::RoutingConfig;
use crate::types::{OperationalContext, Priority, RoutingDecision, Venue};
use std::sync::Arc;

const LOW_LATENCY_EDGE: u32 = 30;
const LATENCY_RELAXED_CLOUD: u32 = 20;
const EDGE_AVAILABLE_EDGE: u32 = 25;
const EDGE_UNAVAILABLE_CLOUD: u32 = 40;
const HIGH_LOAD_EDGE: u32 = 20;
const LOW_LOAD_CLOUD: u32 = 15;
const HIGH_PRIORITY_CLOUD: u32 = 25;
const NORMAL_PRIORITY_EDGE: u32 = 10;
const SENSITIVE_LOCAL_EDGE: u32 = 35;

/// Converts an operational context into a routing decision.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    config: Arc<RoutingConfig>,
}

impl DecisionEngine {
    /// Create an engine over the given configuration
    pub fn new(config: Arc<RoutingConfig>) -> Self {
        Self { config }
    }

    /// Score both venues and pick one.
    ///
    /// Five factors are evaluated in fixed order; each adds to one venue's
    /// score and may append a clause to the justification. The edge venue
    /// wins only on a strictly higher score: ties go to the cloud.
    pub fn decide(&self, ctx: &OperationalContext) -> RoutingDecision {
        let mut edge_score = 0u32;
        let mut cloud_score = 0u32;
        let mut clauses: Vec<&str> = Vec::new();

        if ctx.required_latency_ms < self.config.latency_threshold_ms {
            edge_score += LOW_LATENCY_EDGE;
            clauses.push("low latency required");
        } else {
            cloud_score += LATENCY_RELAXED_CLOUD;
        }

        if ctx.edge_available {
            edge_score += EDGE_AVAILABLE_EDGE;
        } else {
            cloud_score += EDGE_UNAVAILABLE_CLOUD;
            clauses.push("edge unavailable");
        }

        if ctx.system_load > self.config.load_threshold {
            edge_score += HIGH_LOAD_EDGE;
            clauses.push("high cloud load");
        } else {
            cloud_score += LOW_LOAD_CLOUD;
        }

        if ctx.priority == Priority::High {
            cloud_score += HIGH_PRIORITY_CLOUD;
        } else {
            edge_score += NORMAL_PRIORITY_EDGE;
        }

        if ctx.sensitive_data && ctx.location == crate::types::Location::Local {
            edge_score += SENSITIVE_LOCAL_EDGE;
            clauses.push("sensitive data, local processing");
        }

        let venue = if edge_score > cloud_score {
            Venue::Edge
        } else {
            Venue::Cloud
        };

        let recommended_model = match venue {
            Venue::Edge => self.config.models.edge.clone(),
            Venue::Cloud => {
                if ctx.priority == Priority::High {
                    self.config.models.advanced.clone()
                } else {
                    self.config.models.basic.clone()
                }
            }
        };

        let reason = if clauses.is_empty() {
            format!("favorable conditions for {venue}")
        } else {
            clauses.join(", ")
        };

        let confidence = (edge_score.max(cloud_score) as f64 / 100.0).min(1.0);

        RoutingDecision {
            venue,
            recommended_model,
            reason,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    fn engine() -> DecisionEngine {
        DecisionEngine::new(Arc::new(RoutingConfig::default()))
    }

    fn ctx(
        required_latency_ms: f64,
        edge_available: bool,
        system_load: f64,
        priority: Priority,
        location: Location,
        sensitive_data: bool,
    ) -> OperationalContext {
        OperationalContext {
            required_latency_ms,
            edge_available,
            system_load,
            priority,
            location,
            sensitive_data,
        }
    }

    #[test]
    fn test_all_factors_favor_cloud() {
        // cloud = 20 + 40 + 15 + 25 = 100, edge = 10
        let decision = engine().decide(&ctx(
            150.0,
            false,
            0.5,
            Priority::High,
            Location::Remote,
            false,
        ));
        assert_eq!(decision.venue, Venue::Cloud);
        assert_eq!(decision.recommended_model, "advanced_model");
        assert_eq!(decision.confidence, 1.0);
        assert!(decision.reason.contains("edge unavailable"));
    }

    #[test]
    fn test_all_factors_favor_edge() {
        // edge = 30 + 25 + 10 = 65, cloud = 15
        let decision = engine().decide(&ctx(
            50.0,
            true,
            0.5,
            Priority::Low,
            Location::Remote,
            false,
        ));
        assert_eq!(decision.venue, Venue::Edge);
        assert_eq!(decision.recommended_model, "edge_model");
        assert_eq!(decision.confidence, 0.65);
        assert!(decision.reason.contains("low latency required"));
    }

    #[test]
    fn test_tie_goes_to_cloud() {
        // edge = 25 + 20 = 45, cloud = 20 + 25 = 45
        let decision = engine().decide(&ctx(
            150.0,
            true,
            0.9,
            Priority::High,
            Location::Remote,
            false,
        ));
        assert_eq!(decision.venue, Venue::Cloud);
    }

    #[test]
    fn test_cloud_prefers_basic_model_for_normal_priority() {
        let decision = engine().decide(&ctx(
            150.0,
            false,
            0.5,
            Priority::Low,
            Location::Remote,
            false,
        ));
        assert_eq!(decision.venue, Venue::Cloud);
        assert_eq!(decision.recommended_model, "basic_model");
    }

    #[test]
    fn test_sensitive_local_bonus_applies() {
        // Without the bonus edge would lose: edge = 25 + 10 = 35,
        // cloud = 20 + 15 = 35 (tie, cloud). With it edge = 70.
        let base = ctx(150.0, true, 0.5, Priority::Low, Location::Local, false);
        assert_eq!(engine().decide(&base).venue, Venue::Cloud);

        let sensitive = ctx(150.0, true, 0.5, Priority::Low, Location::Local, true);
        let decision = engine().decide(&sensitive);
        assert_eq!(decision.venue, Venue::Edge);
        assert!(decision.reason.contains("sensitive data, local processing"));
    }

    #[test]
    fn test_sensitive_remote_gets_no_bonus() {
        let remote = ctx(150.0, true, 0.5, Priority::Low, Location::Remote, true);
        assert_eq!(engine().decide(&remote).venue, Venue::Cloud);
    }

    #[test]
    fn test_reason_is_never_empty() {
        // No factor contributes a clause here: latency relaxed, edge up,
        // load low, priority low, nothing sensitive.
        let decision = engine().decide(&ctx(
            150.0,
            true,
            0.5,
            Priority::Low,
            Location::Remote,
            false,
        ));
        assert!(!decision.reason.is_empty());
        assert_eq!(decision.reason, "favorable conditions for cloud");
    }

    #[test]
    fn test_edge_win_always_names_a_factor() {
        // An edge win needs at least one edge-scoring factor, and every
        // edge-scoring factor except availability and priority contributes
        // a clause, so edge decisions never fall back to the default phrase.
        let decision = engine().decide(&ctx(
            50.0,
            true,
            0.5,
            Priority::Low,
            Location::Remote,
            false,
        ));
        assert_eq!(decision.venue, Venue::Edge);
        assert_eq!(decision.reason, "low latency required");
    }

    #[test]
    fn test_confidence_is_max_score_over_hundred() {
        // edge = 30 + 25 + 20 + 10 + 35 = 120, capped at 1.0
        let decision = engine().decide(&ctx(
            50.0,
            true,
            0.9,
            Priority::Low,
            Location::Local,
            true,
        ));
        assert_eq!(decision.confidence, 1.0);

        // cloud = 20 + 15 + 25 = 60 vs edge = 25
        let decision = engine().decide(&ctx(
            150.0,
            true,
            0.5,
            Priority::High,
            Location::Remote,
            false,
        ));
        assert_eq!(decision.confidence, 0.6);
    }

    #[test]
    fn test_confidence_stays_in_unit_interval() {
        let engine = engine();
        for latency in [0.0, 99.9, 100.0, 199.0] {
            for available in [true, false] {
                for load in [0.0, 0.8, 0.81, 0.99] {
                    for priority in [Priority::High, Priority::Medium, Priority::Low] {
                        for location in [Location::Local, Location::Remote] {
                            for sensitive in [true, false] {
                                let decision = engine.decide(&ctx(
                                    latency, available, load, priority, location, sensitive,
                                ));
                                assert!(decision.confidence > 0.0);
                                assert!(decision.confidence <= 1.0);
                                assert!(!decision.reason.is_empty());
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_decide_is_deterministic() {
        let engine = engine();
        let context = ctx(90.0, false, 0.85, Priority::Medium, Location::Local, true);
        let first = engine.decide(&context);
        for _ in 0..10 {
            assert_eq!(engine.decide(&context), first);
        }
    }
}
