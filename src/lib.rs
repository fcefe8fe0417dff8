pub mod api; // HTTP boundary: router, schemas, middleware
pub mod classifier; // Classifier adapter + fallback selection
pub mod config;
pub mod enhancer; // AI enhancement: prompt, client, parsing, merge
pub mod enrichment; // Reference tables + baseline lookup
pub mod inference; // Symptom parsing, encoding, prediction
pub mod limiter; // Sliding-window admission control
pub mod registry; // Condition registry + severity tiers
pub mod state; // Service context wiring
pub mod vocabulary; // Symptom vocabulary + categories
