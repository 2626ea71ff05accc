//! Escape hatch for page-specific rules.
//!
//! Some criteria don't fit a field/operator shape: "only universities
//! ranked in the selected table", or "no co-applicant means secured loans
//! only". These are expressed as a named closure.

use crate::traits::Filter;

/// A filter backed by an arbitrary predicate.
pub struct PredicateFilter<R> {
    name: &'static str,
    predicate: Box<dyn Fn(&R) -> bool + Send + Sync>,
}

impl<R> PredicateFilter<R> {
    pub fn new(name: &'static str, predicate: impl Fn(&R) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
        }
    }
}

impl<R> Filter<R> for PredicateFilter<R> {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        (self.predicate)(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_filter_captures_state() {
        let year = 2025;
        let filter = PredicateFilter::new("ranked", move |ranked_years: &Vec<u16>| {
            ranked_years.contains(&year)
        });

        assert!(filter.matches(&vec![2024, 2025]));
        assert!(!filter.matches(&vec![2026]));
        assert_eq!(filter.name(), "ranked");
    }
}
