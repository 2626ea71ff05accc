//! Filter to keep records falling into a selected bucket.

use crate::buckets::BucketSet;
use crate::traits::Filter;
use std::sync::Arc;

/// Keeps records whose numeric field classifies into the selected bucket.
///
/// ## Algorithm
/// 1. Read the numeric field
/// 2. Classify it with the shared BucketSet
/// 3. Compare the resulting label with the selection
pub struct BucketFilter<R, L> {
    name: &'static str,
    buckets: Arc<BucketSet<L>>,
    selected: L,
    accessor: fn(&R) -> f64,
}

impl<R, L> BucketFilter<R, L> {
    /// Create a new BucketFilter.
    ///
    /// # Arguments
    /// * `name` - Filter name for logging
    /// * `buckets` - Shared, already validated bucket set
    /// * `selected` - The bucket label the user picked
    /// * `accessor` - Reads the numeric field from a record
    pub fn new(
        name: &'static str,
        buckets: Arc<BucketSet<L>>,
        selected: L,
        accessor: fn(&R) -> f64,
    ) -> Self {
        Self {
            name,
            buckets,
            selected,
            accessor,
        }
    }
}

impl<R, L> Filter<R> for BucketFilter<R, L>
where
    L: Copy + PartialEq + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        self.buckets.label((self.accessor)(record)) == self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Course {
        months: u32,
    }

    #[test]
    fn test_bucket_filter() {
        let buckets = Arc::new(
            BucketSet::new(
                "duration",
                vec![(3.0, "0-3 months"), (6.0, "3-6 months"), (12.0, "6-12 months")],
                "12+ months",
            )
            .unwrap(),
        );
        let filter = BucketFilter::new("duration", buckets, "6-12 months", |c: &Course| {
            c.months as f64
        });

        assert!(filter.matches(&Course { months: 9 }));
        assert!(filter.matches(&Course { months: 12 }));
        assert!(!filter.matches(&Course { months: 6 }));
        assert!(!filter.matches(&Course { months: 18 }));
    }
}
