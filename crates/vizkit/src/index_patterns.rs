//! Client for the index pattern field lookup API.
//!
//! Both lookups are read-only GETs under `{base_path}/api/index_patterns/`.
//! Nothing is cached: every call builds its requests from scratch.

mod builder;
pub use builder::Builder;

mod client;
pub use client::IndexPatternsApiClient;

mod options;
pub use options::{FieldsForTimePattern, FieldsForWildcard};

mod query;
pub use query::Query;

/// The error code the service uses for a pattern that matches no indices.
pub const NO_MATCHING_INDICES: &str = "no_matching_indices";
