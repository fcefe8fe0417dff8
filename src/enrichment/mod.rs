//! Enrichment — static reference tables keyed by condition name and the
//! repository that resolves a condition into baseline guidance.

pub mod repository;
pub mod tables;

pub use repository::{BaselineInfo, EnrichmentRepository};
pub use tables::ReferenceTables;
