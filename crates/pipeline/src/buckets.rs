//! Labeled numeric ranges for coarse filtering.
//!
//! A bucket set is an ordered list of inclusive upper bounds, each with a
//! label, followed by an overflow label for everything above the last bound:
//!
//! ```text
//! (-inf, 2] -> "0-2 km"   (2, 5] -> "2-5 km"   (5, 10] -> "5-10 km"   (10, inf) -> "10+ km"
//! ```
//!
//! Ranges are contiguous and non-overlapping by construction.

use crate::error::{PipelineError, Result};

/// Ordered, validated set of labeled ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSet<L> {
    name: &'static str,
    bounded: Vec<(f64, L)>,
    overflow: L,
}

impl<L: Copy> BucketSet<L> {
    /// Build a bucket set from `(inclusive_upper_bound, label)` pairs.
    ///
    /// # Errors
    /// * `EmptyBuckets` if no bounded bucket is given
    /// * `NonFiniteBound` if a bound is NaN or infinite
    /// * `UnorderedBounds` if bounds are not strictly increasing
    pub fn new(name: &'static str, bounded: Vec<(f64, L)>, overflow: L) -> Result<Self> {
        if bounded.is_empty() {
            return Err(PipelineError::EmptyBuckets {
                name: name.to_string(),
            });
        }

        let mut previous: Option<f64> = None;
        for &(bound, _) in &bounded {
            if !bound.is_finite() {
                return Err(PipelineError::NonFiniteBound {
                    name: name.to_string(),
                    bound,
                });
            }
            if let Some(prev) = previous {
                if bound <= prev {
                    return Err(PipelineError::UnorderedBounds {
                        name: name.to_string(),
                        previous: prev,
                        bound,
                    });
                }
            }
            previous = Some(bound);
        }

        Ok(Self {
            name,
            bounded,
            overflow,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Classify a value into its bucket label.
    ///
    /// The first bucket whose upper bound is `>= value` wins; anything above
    /// the last bound lands in the overflow bucket.
    pub fn label(&self, value: f64) -> L {
        self.bounded
            .iter()
            .find(|(bound, _)| value <= *bound)
            .map(|(_, label)| *label)
            .unwrap_or(self.overflow)
    }

    /// All labels in range order, overflow last.
    pub fn labels(&self) -> Vec<L> {
        self.bounded
            .iter()
            .map(|(_, label)| *label)
            .chain(std::iter::once(self.overflow))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance() -> BucketSet<&'static str> {
        BucketSet::new(
            "distance",
            vec![(2.0, "0-2 km"), (5.0, "2-5 km"), (10.0, "5-10 km")],
            "10+ km",
        )
        .unwrap()
    }

    #[test]
    fn test_upper_bounds_are_inclusive() {
        let buckets = distance();
        assert_eq!(buckets.label(0.6), "0-2 km");
        assert_eq!(buckets.label(2.0), "0-2 km");
        assert_eq!(buckets.label(2.01), "2-5 km");
        assert_eq!(buckets.label(5.0), "2-5 km");
        assert_eq!(buckets.label(10.0), "5-10 km");
    }

    #[test]
    fn test_values_above_last_bound_overflow() {
        let buckets = distance();
        assert_eq!(buckets.label(10.5), "10+ km");
        assert_eq!(buckets.label(500.0), "10+ km");
    }

    #[test]
    fn test_labels_in_order() {
        assert_eq!(distance().labels(), vec!["0-2 km", "2-5 km", "5-10 km", "10+ km"]);
    }

    #[test]
    fn test_rejects_malformed_bounds() {
        let empty = BucketSet::<&str>::new("empty", vec![], "all");
        assert!(matches!(empty, Err(PipelineError::EmptyBuckets { .. })));

        let unordered = BucketSet::new("months", vec![(6.0, "a"), (3.0, "b")], "c");
        assert!(matches!(unordered, Err(PipelineError::UnorderedBounds { .. })));

        let duplicate = BucketSet::new("months", vec![(3.0, "a"), (3.0, "b")], "c");
        assert!(matches!(duplicate, Err(PipelineError::UnorderedBounds { .. })));

        let nan = BucketSet::new("months", vec![(f64::NAN, "a")], "b");
        assert!(matches!(nan, Err(PipelineError::NonFiniteBound { .. })));
    }
}
