//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! per-field predicates to be applied to catalog records.

/// Core trait for filtering catalog records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared behind an `Arc`
/// - `matches` is a pure function of the record and the filter's own
///   configuration; it must never fail for a well-formed record
pub trait Filter<R>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether a single record satisfies this filter.
    fn matches(&self, record: &R) -> bool;

    /// Apply this filter to a set of records, keeping their relative order.
    fn apply<'a>(&self, mut records: Vec<&'a R>) -> Vec<&'a R> {
        records.retain(|record| self.matches(record));
        records
    }
}
