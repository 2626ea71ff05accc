//! Error types for the pipeline crate.
//!
//! Filters and comparators are total, so the only failures this crate
//! reports are configuration mistakes caught while building a bucket set.

use thiserror::Error;

/// Errors raised while assembling pipeline configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// A bucket set needs at least one bounded bucket before the overflow one
    #[error("Bucket set '{name}' has no bounded buckets")]
    EmptyBuckets { name: String },

    /// Upper bounds must be strictly increasing so ranges never overlap
    #[error("Bucket set '{name}': bound {bound} does not exceed previous bound {previous}")]
    UnorderedBounds {
        name: String,
        previous: f64,
        bound: f64,
    },

    /// NaN or infinite bounds cannot delimit a range
    #[error("Bucket set '{name}': bound {bound} is not finite")]
    NonFiniteBound { name: String, bound: f64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PipelineError>;
