//! # inferoute
//!
//! Context-aware routing of inference tasks between an edge and a cloud venue.
//!
//! inferoute snapshots the operational conditions for each request, scores
//! both venues with a fixed five-factor law, dispatches to the winner, and
//! applies post-processing policy to the result.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! inferoute = { version = "0.1", features = ["venues", "layers", "policies"] }
//! ```
//!
//! ```ignore
//! use inferoute::{InferenceTask, Router};
//! use inferoute::venue::{CloudExecutor, EdgeExecutor};
//! use inferoute::layer::LoggingLayer;
//! use inferoute::policy::{HumanReviewRule, SecureProcessingRule};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cloud = CloudExecutor::builder()
//!     .endpoint("http://cloud-inference.internal/predict")
//!     .build()?;
//!
//! let router = Router::builder(EdgeExecutor::new(), cloud)
//!     .layer(LoggingLayer::new())
//!     .rule(Arc::new(SecureProcessingRule::new()))
//!     .rule(Arc::new(HumanReviewRule::new()))
//!     .finish();
//!
//! let response = router.submit(InferenceTask::new("urgent: review this")).await?;
//! println!("{} via {}", response.result.prediction, response.metadata.venue_used);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: venues, layers, and policies
//! - `venues`: edge and cloud executor implementations
//! - `layers`: built-in layers (logging)
//! - `policies`: built-in policy rules (secure processing, human review)
//! - `full`: all features enabled

// Re-export core types and traits
pub use inferoute_core::*;

// Re-export venue executors under `venue` module
#[cfg(feature = "inferoute-venue")]
pub mod venue {
    //! Venue executor implementations.
    pub use inferoute_venue::*;
}

// Re-export layers under `layer` module
#[cfg(feature = "inferoute-layer")]
pub mod layer {
    //! Built-in middleware layers.
    pub use inferoute_layer::*;
}

// Re-export policy rules under `policy` module
#[cfg(feature = "inferoute-policy")]
pub mod policy {
    //! Built-in policy rules.
    pub use inferoute_policy::*;
}

// Convenience re-exports at root level for common types
pub use inferoute_core::{
    config::{ModelCatalog, RoutingConfig},
    error::RouteError,
    executor::VenueExecutor,
    layer::{Layer, LayeredExecutor},
    policy::{PolicyEngine, PolicyRule},
    runtime::{Router, RouterBuilder},
    telemetry::{StaticTelemetry, TelemetrySample, TelemetrySource, UniformTelemetry},
    types::{
        ExecutorInfo, InferenceOutcome, InferenceTask, Location, OperationalContext, Priority,
        ResponseMetadata, RoutingDecision, TaskResponse, Venue,
    },
    Result,
};

/// Prelude module for convenient imports
pub mod prelude {
    //! Prelude module containing the most commonly used types and traits.
    //!
    //! ```
    //! use inferoute::prelude::*;
    //! ```

    pub use crate::{
        InferenceOutcome, InferenceTask, Location, ModelCatalog, OperationalContext, PolicyRule,
        Priority, Result, RouteError, Router, RoutingConfig, RoutingDecision, StaticTelemetry,
        TaskResponse, TelemetrySample, TelemetrySource, Venue, VenueExecutor,
    };

    #[cfg(feature = "inferoute-venue")]
    pub use crate::venue::*;

    #[cfg(feature = "inferoute-layer")]
    pub use crate::layer::*;

    #[cfg(feature = "inferoute-policy")]
    pub use crate::policy::*;
}
