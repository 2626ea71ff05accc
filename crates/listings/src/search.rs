//! The seam every listing page implements.
//!
//! A listing search owns a shared handle to the catalogs plus whatever
//! page configuration it needs (bucket sets, comparators). Searching is a
//! pure function of the criteria: it never mutates the catalog and always
//! returns a subsequence of it, reordered only by the page's comparator.

use crate::format::EmptyState;
use catalog::{vocabulary, Country, Intake};

/// A page-specific search over one catalog.
///
/// `Send + Sync` so a built storefront can be shared behind an `Arc`.
pub trait ListingSearch: Send + Sync {
    /// The record type this page lists.
    type Record;
    /// Immutable criteria value; `Default` is the page's initial state.
    type Criteria: Default;

    /// Page name (for logging/debugging)
    fn page(&self) -> &'static str;

    /// Every record of the page's catalog, in catalog order.
    fn records(&self) -> &[Self::Record];

    /// Filter and order the catalog.
    fn search(&self, criteria: &Self::Criteria) -> Vec<&Self::Record>;

    /// What to show when `search` returns nothing.
    fn empty_state(&self) -> EmptyState;
}

vocabulary! {
    /// Ordering offered by the scholarship and programme pages.
    pub enum MatchSort as "sort" {
        BestMatch => "Best match" | "best",
        AToZ => "A-Z" | "az" | "name",
    }
}

/// Country selector shared by the scholarship, loan, and taught-programme pages.
pub const STUDY_COUNTRIES: &[Country] = &[
    Country::Uk,
    Country::Usa,
    Country::Canada,
    Country::Australia,
    Country::Germany,
    Country::Ireland,
];

/// Intake selector shared by the taught-programme pages.
pub const TAUGHT_INTAKES: &[Intake] = &[Intake::Jan, Intake::May, Intake::Sep];

/// Log the outcome of one search at `info`.
pub(crate) fn log_search(page: &'static str, total: usize, shown: usize) {
    tracing::info!(page, total, shown, "Search complete");
}

/// 0 when a best-match preference holds, 1 when it doesn't.
pub(crate) fn preference(holds: bool) -> u8 {
    u8::from(!holds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parses_from_label_or_alias() {
        assert_eq!("Best match".parse::<MatchSort>().unwrap(), MatchSort::BestMatch);
        assert_eq!("a-z".parse::<MatchSort>().unwrap(), MatchSort::AToZ);
        assert_eq!("name".parse::<MatchSort>().unwrap(), MatchSort::AToZ);
        assert!("Soonest".parse::<MatchSort>().is_err());
    }

    #[test]
    fn test_preference_weights() {
        assert_eq!(preference(true), 0);
        assert_eq!(preference(false), 1);
    }
}
