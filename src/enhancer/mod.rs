//! AI enhancer — enriches a baseline prediction with generated guidance.
//!
//! A two-state component: Enabled issues exactly one outbound generation
//! call per request and merges the extracted JSON with the baseline;
//! Disabled (no credential, or the startup self-test failed) serves the
//! deterministic fallback record without any network I/O. Every failure
//! mode on the enabled path degrades to that same fallback — enhancement
//! never propagates an error to the caller.

pub mod client;
pub mod fallback;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod types;

pub use client::{GeminiClient, GenerateClient, MockGenerateClient};
pub use fallback::build_fallback_record;
pub use orchestrator::AiEnhancer;
pub use parser::{extract_enhancement, JsonExtraction};
pub use types::EnrichmentRecord;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("cannot reach generation endpoint at {0}")]
    Connection(String),

    #[error("generation call timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("generation endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("generation endpoint returned no content")]
    EmptyResponse,

    #[error("response body unreadable: {0}")]
    ResponseParsing(String),
}
