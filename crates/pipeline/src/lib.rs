//! Generic filter-and-sort engine for catalog records.
//!
//! This crate provides:
//! - Filter trait and per-field implementations (text query, equality,
//!   thresholds, buckets, date bounds, membership, named predicates)
//! - FilterPipeline for composing filters into a conjunction
//! - Comparator for stable, multi-key ordering
//! - BucketSet for labeled numeric ranges
//! - Deadline status classification
//!
//! ## Architecture
//! Every listing page processes its catalog in two stages:
//! 1. A FilterPipeline keeps the records satisfying every active criterion
//! 2. A Comparator orders the survivors for the chosen sort mode
//!
//! Neither stage ever reorders records it does not need to, so equal keys
//! keep catalog order.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::filters::*;
//! use pipeline::{Comparator, Direction, FilterPipeline};
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(TextQueryFilter::new("query", "london").field(|p: &Property| p.city.as_str()))
//!     .add_filter(ThresholdFilter::at_most("budget", 250, |p: &Property| p.price_per_week));
//!
//! let order = Comparator::new()
//!     .then_by_float("rating", |p: &Property| p.rating, Direction::Descending);
//!
//! let results = pipeline.apply_sorted(&catalog.accommodation, &order);
//! ```

pub mod buckets;
pub mod comparator;
pub mod deadline;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use buckets::BucketSet;
pub use comparator::{Comparator, Direction};
pub use deadline::{classify, classify_at, DeadlineInfo, DeadlineStatus, StatusCounts, DUE_SOON_WINDOW_DAYS};
pub use error::{PipelineError, Result};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
