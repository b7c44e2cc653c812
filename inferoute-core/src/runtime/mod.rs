//! Request pipeline.
//!
//! The [`Router`] orchestrates one request end to end: context acquisition,
//! decision, dispatch, policy, response assembly.

mod router;

pub use router::{Router, RouterBuilder};
