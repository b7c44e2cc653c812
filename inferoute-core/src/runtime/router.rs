//! Router implementation.
//!
//! This module implements the request pipeline that surrounds the decision
//! engine: acquire an operational context, decide on a venue, dispatch to
//! the matching executor, apply policy rules, and assemble the response
//! envelope with audit metadata.

use crate::config::RoutingConfig;
use crate::context::ContextProvider;
use crate::decision::DecisionEngine;
use crate::error::RouteError;
use crate::executor::VenueExecutor;
use crate::layer::Layer;
use crate::policy::{PolicyEngine, PolicyRule};
use crate::telemetry::{TelemetrySource, UniformTelemetry};
use crate::types::*;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Type-erased executor that can be shared across threads
type BoxedExecutor = Arc<dyn VenueExecutor>;

/// Builder for composing a router from venue executors, layers, and rules.
///
/// Layers are applied with static dispatch while building; the finished
/// router holds each venue behind a single type erasure.
///
/// # Example
///
/// ```ignore
/// let router = Router::builder(edge, cloud)
///     .layer(LoggingLayer::new())
///     .rule(Arc::new(SecureProcessingRule::new()))
///     .finish();
/// ```
pub struct RouterBuilder<E, C> {
    edge: E,
    cloud: C,
    telemetry: Arc<dyn TelemetrySource>,
    rules: Vec<Arc<dyn PolicyRule>>,
    config: RoutingConfig,
}

impl<E: VenueExecutor, C: VenueExecutor> RouterBuilder<E, C> {
    /// Create a new builder with edge and cloud executors
    pub fn new(edge: E, cloud: C) -> Self {
        Self {
            edge,
            cloud,
            telemetry: Arc::new(UniformTelemetry::new()),
            rules: Vec::new(),
            config: RoutingConfig::default(),
        }
    }

    /// Wrap both executors with a layer
    ///
    /// This uses static dispatch - each call to `layer()` creates new
    /// concrete venue types by wrapping the previous executors.
    pub fn layer<L>(
        self,
        layer: L,
    ) -> RouterBuilder<<L as Layer<E>>::LayeredExecutor, <L as Layer<C>>::LayeredExecutor>
    where
        L: Layer<E> + Layer<C>,
    {
        RouterBuilder {
            edge: <L as Layer<E>>::layer(&layer, self.edge),
            cloud: <L as Layer<C>>::layer(&layer, self.cloud),
            telemetry: self.telemetry,
            rules: self.rules,
            config: self.config,
        }
    }

    /// Replace the telemetry source
    pub fn telemetry(mut self, telemetry: Arc<dyn TelemetrySource>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Replace the routing configuration
    pub fn config(mut self, config: RoutingConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a policy rule
    pub fn rule(mut self, rule: Arc<dyn PolicyRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Finish building and create a Router
    pub fn finish(self) -> Router {
        let config = Arc::new(self.config);

        Router {
            edge: Arc::new(self.edge),
            cloud: Arc::new(self.cloud),
            provider: ContextProvider::new(self.telemetry, config.clone()),
            engine: DecisionEngine::new(config),
            policy: PolicyEngine::new(self.rules),
        }
    }
}

/// Request pipeline over two venue executors.
///
/// This is the main entry point for submitting tasks. Each request is
/// processed independently: the router holds no mutable state, so concurrent
/// submissions need no coordination.
pub struct Router {
    edge: BoxedExecutor,
    cloud: BoxedExecutor,
    provider: ContextProvider,
    engine: DecisionEngine,
    policy: PolicyEngine,
}

impl Router {
    /// Create a new builder
    pub fn builder<E: VenueExecutor, C: VenueExecutor>(
        edge: E,
        cloud: C,
    ) -> RouterBuilder<E, C> {
        RouterBuilder::new(edge, cloud)
    }

    /// Get reference to the policy engine
    pub fn policy_engine(&self) -> &PolicyEngine {
        &self.policy
    }

    /// Submit a task for routed execution.
    ///
    /// Runs the full pipeline. Any failure during dispatch aborts the
    /// request: the error carries the correlation identifier and no partial
    /// response is returned.
    pub async fn submit(&self, task: InferenceTask) -> Result<TaskResponse, RouteError> {
        let request_id = correlation_id();
        let started = Instant::now();

        tracing::debug!(
            request_id = %request_id,
            input_len = task.input.len(),
            "routing request received"
        );

        let context = self.provider.acquire(&task);
        let decision = self.engine.decide(&context);

        tracing::debug!(
            request_id = %request_id,
            venue = %decision.venue,
            model = %decision.recommended_model,
            confidence = decision.confidence,
            reason = %decision.reason,
            "venue selected"
        );

        let executor = match decision.venue {
            Venue::Edge => &self.edge,
            Venue::Cloud => &self.cloud,
        };

        let outcome = match executor.execute(&task, &decision.recommended_model).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    venue = %decision.venue,
                    error = %e,
                    "dispatch failed"
                );
                return Err(RouteError::dispatch(request_id, e.to_string()));
            }
        };

        let outcome = self.policy.apply(outcome, &context);
        let total_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            request_id = %request_id,
            venue = %decision.venue,
            total_time_ms,
            "request complete"
        );

        let message = format!("task executed on {} venue", decision.venue);

        Ok(TaskResponse {
            result: outcome,
            metadata: ResponseMetadata {
                request_id,
                venue_used: decision.venue,
                model_used: decision.recommended_model.clone(),
                total_time_ms,
                evaluated_context: context,
                decision_info: decision,
            },
            message,
        })
    }
}

/// Correlation identifier: unix-millis timestamp plus a random suffix.
fn correlation_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("req-{}-{}", millis, &suffix[..8])
}
