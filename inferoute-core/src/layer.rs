//! Layer trait and abstractions.
//!
//! Layers provide a composable way to wrap venue executors with
//! cross-cutting concerns like logging or timing without touching the
//! executor implementations themselves.

use crate::error::RouteError;
use crate::executor::VenueExecutor;
use crate::types::*;
use async_trait::async_trait;
use std::sync::Arc;

/// Layer trait for wrapping venue executors.
///
/// Each layer wraps an inner executor and returns a new executor with
/// enhanced capabilities. Composition happens with static dispatch while
/// the router is being built.
pub trait Layer<E: VenueExecutor> {
    /// The type of the layered executor
    type LayeredExecutor: VenueExecutor;

    /// Wrap the inner executor with this layer
    fn layer(&self, inner: E) -> Self::LayeredExecutor;
}

/// Helper trait for layered executors.
///
/// Provides default forwarding implementations so a layer only needs to
/// override the methods it wants to intercept.
#[async_trait]
pub trait LayeredExecutor: Sized + VenueExecutor {
    /// The inner executor type
    type Inner: VenueExecutor;

    /// Get a reference to the inner executor
    fn inner(&self) -> &Self::Inner;

    /// Default implementation for info - forwards to inner
    fn layered_info(&self) -> Arc<ExecutorInfo> {
        self.inner().info()
    }

    /// Default implementation for execute - forwards to inner
    async fn layered_execute(
        &self,
        task: &InferenceTask,
        model: &str,
    ) -> Result<InferenceOutcome, RouteError> {
        self.inner().execute(task, model).await
    }
}

/// Macro to implement VenueExecutor by forwarding to LayeredExecutor methods.
///
/// This reduces boilerplate for layered executors.
#[macro_export]
macro_rules! impl_layered_executor {
    ($type:ty) => {
        #[async_trait::async_trait]
        impl $crate::executor::VenueExecutor for $type {
            fn info(&self) -> std::sync::Arc<$crate::types::ExecutorInfo> {
                $crate::layer::LayeredExecutor::layered_info(self)
            }

            async fn execute(
                &self,
                task: &$crate::types::InferenceTask,
                model: &str,
            ) -> Result<$crate::types::InferenceOutcome, $crate::error::RouteError> {
                $crate::layer::LayeredExecutor::layered_execute(self, task, model).await
            }
        }
    };
}
