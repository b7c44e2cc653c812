//! # inferoute layers
//!
//! Built-in layers for inferoute.
//!
//! Currently implemented layers:
//! - `LoggingLayer`: Logs all executor operations with timing information
//!
//! ## Usage
//!
//! ```ignore
//! use inferoute_core::Router;
//! use inferoute_layer::LoggingLayer;
//!
//! let router = Router::builder(edge, cloud)
//!     .layer(LoggingLayer::new())
//!     .finish();
//! ```

pub mod logging;

// Re-exports
pub use logging::LoggingLayer;
