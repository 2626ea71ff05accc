//! Exact-match filter for categorical fields.

use crate::traits::Filter;

/// Keeps records whose categorical field equals the selected value.
///
/// "Any" is expressed by not adding the filter at all
/// (see `FilterPipeline::add_filter_if_some`).
pub struct EqualsFilter<R, T> {
    name: &'static str,
    expected: T,
    accessor: fn(&R) -> T,
}

impl<R, T> EqualsFilter<R, T> {
    /// Create a new EqualsFilter.
    ///
    /// # Arguments
    /// * `name` - Filter name for logging
    /// * `expected` - The selected value
    /// * `accessor` - Reads the categorical field from a record
    pub fn new(name: &'static str, expected: T, accessor: fn(&R) -> T) -> Self {
        Self {
            name,
            expected,
            accessor,
        }
    }
}

impl<R, T> Filter<R> for EqualsFilter<R, T>
where
    T: PartialEq + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        (self.accessor)(record) == self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Mode {
        Online,
        Hybrid,
    }

    struct Course {
        mode: Mode,
    }

    #[test]
    fn test_equals_filter() {
        let filter = EqualsFilter::new("mode", Mode::Online, |c: &Course| c.mode);

        assert!(filter.matches(&Course { mode: Mode::Online }));
        assert!(!filter.matches(&Course { mode: Mode::Hybrid }));
    }
}
