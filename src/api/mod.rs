//! HTTP boundary for the triage pipeline.
//!
//! A thin axum layer: request validation, the rate-limit middleware, and
//! response assembly. All pipeline logic lives below in `state` — the
//! router is composable and carries no behavior of its own.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod types;

pub use router::api_router;
pub use types::ApiContext;
