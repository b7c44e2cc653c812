//! # inferoute core
//!
//! Core abstractions and the routing pipeline for inferoute.
//!
//! This crate provides the decision engine that converts an operational
//! context snapshot into a venue selection, together with the traits and
//! pipeline that surround it: telemetry sampling, context acquisition,
//! venue execution, policy rules, and response assembly.

pub mod config;
pub mod context;
pub mod decision;
pub mod error;
pub mod executor;
pub mod layer;
pub mod policy;
pub mod runtime;
pub mod telemetry;
pub mod types;

// Re-exports
pub use config::{ModelCatalog, RoutingConfig};
pub use context::ContextProvider;
pub use decision::DecisionEngine;
pub use error::RouteError;
pub use executor::VenueExecutor;
pub use layer::{Layer, LayeredExecutor};
pub use policy::{PolicyEngine, PolicyRule};
pub use runtime::{Router, RouterBuilder};
pub use telemetry::{StaticTelemetry, TelemetrySample, TelemetrySource, UniformTelemetry};
pub use types::*;

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, RouteError>;
