//! Prospect Store - Precomputed draft-prospect artifacts, loaded once
//!
//! This crate owns the read side of the ProspectTheory data pipeline: it
//! parses the JSON artifacts the modeling scripts emit (player profiles,
//! statistical and anthropometric comparisons, search index) and caches
//! each collection for the lifetime of the process. Everything else in the
//! system borrows read-only views from here.

pub mod index;
pub mod resolver;
pub mod store;
pub mod types;

pub use index::build_search_index;
pub use resolver::resolve;
pub use store::{ProspectStore, StoreError};
pub use types::{
    metric_or_zero, AnthroComp, AnthroCompEntry, Measurements, PlayerProfile, SearchIndexEntry,
    StatComp, StatCompEntry,
};

/// Default data directory when `DATA_DIR` is not set
pub const DEFAULT_DATA_DIR: &str = "data/processed";
