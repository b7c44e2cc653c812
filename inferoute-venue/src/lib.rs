//! # inferoute venues
//!
//! Executor implementations for the two inference venues.

pub mod cloud;
pub mod edge;

// Re-exports
pub use cloud::{CloudBuilder, CloudExecutor};
pub use edge::EdgeExecutor;

use inferoute_core::error::RouteError;

/// Create a cloud executor from the `CLOUD_INFERENCE_URL` environment variable.
///
/// Convenience for deployments that configure the collaborator endpoint
/// through the environment. The variable must be present; a missing value is
/// a configuration error here rather than at the first call.
pub fn cloud_from_env() -> Result<CloudExecutor, RouteError> {
    let endpoint = std::env::var("CLOUD_INFERENCE_URL")
        .map_err(|_| RouteError::configuration("CLOUD_INFERENCE_URL is not set"))?;

    CloudExecutor::builder().endpoint(endpoint).build()
}
