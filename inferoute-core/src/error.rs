//! Error types for routing operations.

/// The main error type for routing operations.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Configuration errors, fatal to the request with no retry
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network-related errors from a venue collaborator
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic inference failure surfaced by a venue executor
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Dispatch failure, tagged with the request correlation identifier
    #[error("Dispatch failed [{request_id}]: {message}")]
    Dispatch {
        request_id: String,
        message: String,
    },

    /// Layer errors
    #[error("Layer error ({layer}): {message}")]
    Layer { layer: String, message: String },

    /// Generic errors
    #[error("Error: {0}")]
    Other(String),
}

impl RouteError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a dispatch error carrying the request correlation identifier
    pub fn dispatch(request_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Dispatch {
            request_id: request_id.into(),
            message: message.into(),
        }
    }

    /// Create a layer error
    pub fn layer(layer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Layer {
            layer: layer.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Check if this error came from the transport or the collaborator behind it.
    ///
    /// The core never retries; callers layering their own resilience outside
    /// the pipeline can use this to pick which failures are worth it.
    pub fn is_transport(&self) -> bool {
        matches!(self, RouteError::Network(_) | RouteError::Inference(_))
    }
}

impl From<String> for RouteError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RouteError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
