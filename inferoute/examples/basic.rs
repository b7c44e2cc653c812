//! Basic usage example using the inferoute meta crate.
//!
//! This demonstrates:
//! 1. Building a router from edge and cloud executors
//! 2. Wrapping both venues with the logging layer
//! 3. Registering the built-in policy rules
//! 4. Submitting tasks and inspecting the audit metadata
//!
//! The cloud endpoint is taken from `CLOUD_INFERENCE_URL` when set. Without
//! it the router still runs: edge-routed tasks succeed and cloud-routed ones
//! surface the configuration error the spec of the cloud venue calls for.

use inferoute::prelude::*;
use std::result::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Create the cloud executor; the endpoint is mandatory configuration
    // checked at call time, so an unset variable only fails cloud dispatch.
    let mut cloud = inferoute::venue::CloudExecutor::builder();
    if let Ok(endpoint) = std::env::var("CLOUD_INFERENCE_URL") {
        cloud = cloud.endpoint(endpoint);
    }
    let cloud = cloud.build()?;

    // Build the router with layers and policy rules
    let router = Router::builder(inferoute::venue::EdgeExecutor::new(), cloud)
        .layer(inferoute::layer::LoggingLayer::new())
        .rule(Arc::new(inferoute::policy::SecureProcessingRule::new()))
        .rule(Arc::new(inferoute::policy::HumanReviewRule::new()))
        .finish();

    let tasks = [
        InferenceTask::new("routine sensor sweep"),
        InferenceTask::new("URGENT: plant access control is failing"),
        InferenceTask::new("confidential personnel report, please classify"),
    ];

    for task in tasks {
        println!("=== {:?} ===", task.input);
        match router.submit(task).await {
            Ok(response) => {
                println!(
                    "prediction={} venue={} model={} in {:.2}ms",
                    response.result.prediction,
                    response.metadata.venue_used,
                    response.metadata.model_used,
                    response.metadata.total_time_ms,
                );
                println!("reason: {}", response.metadata.decision_info.reason);
                if response.result.requires_human_review == Some(true) {
                    println!("flagged for human review");
                }
            }
            Err(e) => {
                eprintln!("Error: {:?}", e);
            }
        }
    }

    Ok(())
}
