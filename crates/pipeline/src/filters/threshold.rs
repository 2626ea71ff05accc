//! Filter to enforce a numeric bound.
//!
//! Budget-style criteria cap a field from above (price ≤ budget);
//! capacity-style criteria require a floor (loan ceiling ≥ amount needed).

use crate::traits::Filter;

/// Which side of the bound a record must fall on. Both are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `value <= bound`
    AtMost,
    /// `value >= bound`
    AtLeast,
}

/// Removes records whose numeric field falls outside an inclusive bound.
pub struct ThresholdFilter<R, T> {
    name: &'static str,
    bound: T,
    kind: Bound,
    accessor: fn(&R) -> T,
}

impl<R, T> ThresholdFilter<R, T> {
    /// Keep records with `accessor(record) <= bound`.
    pub fn at_most(name: &'static str, bound: T, accessor: fn(&R) -> T) -> Self {
        Self {
            name,
            bound,
            kind: Bound::AtMost,
            accessor,
        }
    }

    /// Keep records with `accessor(record) >= bound`.
    pub fn at_least(name: &'static str, bound: T, accessor: fn(&R) -> T) -> Self {
        Self {
            name,
            bound,
            kind: Bound::AtLeast,
            accessor,
        }
    }

    pub fn kind(&self) -> Bound {
        self.kind
    }
}

impl<R, T> Filter<R> for ThresholdFilter<R, T>
where
    T: PartialOrd + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        let value = (self.accessor)(record);
        match self.kind {
            Bound::AtMost => value <= self.bound,
            Bound::AtLeast => value >= self.bound,
        }
    }
}
