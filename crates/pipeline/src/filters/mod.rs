//! Filter implementations for the catalog pipeline.
//!
//! This module contains the per-field predicate kinds that can be
//! composed into a FilterPipeline.

pub mod bucket;
pub mod date_bound;
pub mod equals;
pub mod membership;
pub mod predicate;
pub mod text_query;
pub mod threshold;

// Re-export for convenience
pub use bucket::BucketFilter;
pub use date_bound::DateBoundFilter;
pub use equals::EqualsFilter;
pub use membership::MembershipFilter;
pub use predicate::PredicateFilter;
pub use text_query::TextQueryFilter;
pub use threshold::{Bound, ThresholdFilter};
