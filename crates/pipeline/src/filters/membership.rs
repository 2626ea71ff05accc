//! Filter on membership in a collection field.
//!
//! Used for "intake must be one of the offered intakes" and
//! "lender must serve the selected country" style criteria.

use crate::traits::Filter;

/// Keeps records whose collection field contains the selected value.
///
/// A record may also declare itself valid for any value in this
/// dimension (e.g. a deadline that applies to every study level); such
/// records always match.
pub struct MembershipFilter<R, T> {
    name: &'static str,
    wanted: T,
    accessor: fn(&R) -> &[T],
    applies_to_all: Option<fn(&R) -> bool>,
}

impl<R, T> MembershipFilter<R, T> {
    /// Create a new MembershipFilter.
    ///
    /// # Arguments
    /// * `name` - Filter name for logging
    /// * `wanted` - The selected value
    /// * `accessor` - Reads the collection field from a record
    pub fn new(name: &'static str, wanted: T, accessor: fn(&R) -> &[T]) -> Self {
        Self {
            name,
            wanted,
            accessor,
            applies_to_all: None,
        }
    }

    /// Treat records for which `predicate` holds as matching any value.
    pub fn or_applies_to_all(mut self, predicate: fn(&R) -> bool) -> Self {
        self.applies_to_all = Some(predicate);
        self
    }
}

impl<R, T> Filter<R> for MembershipFilter<R, T>
where
    T: PartialEq + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        if let Some(applies_to_all) = self.applies_to_all {
            if applies_to_all(record) {
                return true;
            }
        }
        (self.accessor)(record).contains(&self.wanted)
    }
}
