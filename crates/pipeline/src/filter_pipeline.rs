//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! per-field filters together using the builder pattern.

use crate::comparator::Comparator;
use crate::traits::Filter;
use tracing;

/// Chains multiple filters together into a conjunction.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextQueryFilter::new("query", &criteria.query).field(|p: &Property| &p.city))
///     .add_filter_if_some(criteria.room_type, |room| {
///         EqualsFilter::new("room_type", room, |p: &Property| p.room_type)
///     })
///     .add_filter(ThresholdFilter::at_most("budget", 150, |p: &Property| p.price_per_week));
///
/// let filtered = pipeline.apply(&catalog.accommodation);
/// ```
pub struct FilterPipeline<R> {
    filters: Vec<Box<dyn Filter<R>>>,
}

impl<R: 'static> FilterPipeline<R> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter<R> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a filter only when the criterion is constrained.
    ///
    /// A `None` criterion means "Any": no filter is added, which makes an
    /// unconstrained field an identity on the result.
    pub fn add_filter_if_some<T, F>(self, criterion: Option<T>, build: impl FnOnce(T) -> F) -> Self
    where
        F: Filter<R> + 'static,
    {
        match criterion {
            Some(value) => self.add_filter(build(value)),
            None => self,
        }
    }

    /// Number of active filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the active filters, in evaluation order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Check a single record against every filter.
    pub fn matches(&self, record: &R) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with every record, in catalog order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain the records the filter accepts
    ///    c. Log output count
    /// 3. Return the surviving records
    ///
    /// The result is always a subsequence of `records`.
    pub fn apply<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        let mut current: Vec<&'a R> = records.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Apply all filters, then order the survivors with `comparator`.
    pub fn apply_sorted<'a>(&self, records: &'a [R], comparator: &Comparator<R>) -> Vec<&'a R> {
        let mut results = self.apply(records);
        comparator.sort(&mut results);
        results
    }
}

impl<R: 'static> Default for FilterPipeline<R> {
    fn default() -> Self {
        Self::new()
    }
}
