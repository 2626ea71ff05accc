//! Scholarship search.

use crate::format::EmptyState;
use crate::search::{log_search, ListingSearch, MatchSort, STUDY_COUNTRIES};
use catalog::{Catalogs, Country, DeadlineWindow, DegreeLevel, FundingType, Scholarship};
use pipeline::filters::{EqualsFilter, TextQueryFilter};
use pipeline::{Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No matches found",
    hint: "Try removing filters or changing keywords.",
};

pub const COUNTRIES: &[Country] = STUDY_COUNTRIES;

#[derive(Debug, Clone, PartialEq)]
pub struct ScholarshipCriteria {
    pub query: String,
    pub country: Option<Country>,
    pub level: Option<DegreeLevel>,
    pub funding: Option<FundingType>,
    pub deadline: Option<DeadlineWindow>,
    pub sort: MatchSort,
}

impl Default for ScholarshipCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            country: None,
            level: None,
            funding: None,
            deadline: None,
            sort: MatchSort::BestMatch,
        }
    }
}

pub struct ScholarshipSearch {
    catalogs: Arc<Catalogs>,
    best_match: Comparator<Scholarship>,
    alphabetical: Comparator<Scholarship>,
}

impl ScholarshipSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        // Open windows first, then by name
        let best_match = Comparator::new()
            .then_by(
                "open_window",
                |s: &Scholarship| s.deadline_window != DeadlineWindow::Open,
                Direction::Ascending,
            )
            .then_by_text("name", |s: &Scholarship| s.name.as_str(), Direction::Ascending);
        let alphabetical = Comparator::new().then_by_text(
            "name",
            |s: &Scholarship| s.name.as_str(),
            Direction::Ascending,
        );

        Self {
            catalogs,
            best_match,
            alphabetical,
        }
    }

    fn comparator(&self, sort: MatchSort) -> &Comparator<Scholarship> {
        match sort {
            MatchSort::BestMatch => &self.best_match,
            MatchSort::AToZ => &self.alphabetical,
        }
    }

    fn pipeline(&self, criteria: &ScholarshipCriteria) -> FilterPipeline<Scholarship> {
        FilterPipeline::new()
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|s: &Scholarship| s.name.as_str())
                    .field(|s: &Scholarship| s.provider.as_str())
                    .collection(|s: &Scholarship| s.tags.as_slice()),
            )
            .add_filter_if_some(criteria.country, |country| {
                EqualsFilter::new("country", country, |s: &Scholarship| s.country)
            })
            .add_filter_if_some(criteria.level, |level| {
                EqualsFilter::new("level", level, |s: &Scholarship| s.level)
            })
            .add_filter_if_some(criteria.funding, |funding| {
                EqualsFilter::new("funding", funding, |s: &Scholarship| s.funding)
            })
            .add_filter_if_some(criteria.deadline, |window| {
                EqualsFilter::new("deadline", window, |s: &Scholarship| s.deadline_window)
            })
    }
}

impl ListingSearch for ScholarshipSearch {
    type Record = Scholarship;
    type Criteria = ScholarshipCriteria;

    fn page(&self) -> &'static str {
        "scholarships"
    }

    fn records(&self) -> &[Scholarship] {
        &self.catalogs.scholarships
    }

    fn search(&self, criteria: &ScholarshipCriteria) -> Vec<&Scholarship> {
        let results = self
            .pipeline(criteria)
            .apply_sorted(self.records(), self.comparator(criteria.sort));
        log_search(self.page(), self.records().len(), results.len());
        results
    }

    fn empty_state(&self) -> EmptyState {
        EMPTY_STATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> ScholarshipSearch {
        ScholarshipSearch::new(Arc::new(Catalogs::builtin().unwrap()))
    }

    fn ids<'a>(results: &[&'a Scholarship]) -> Vec<&'a str> {
        results.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_best_match_puts_open_windows_first() {
        let page = search();
        let results = page.search(&ScholarshipCriteria::default());
        // Open: Global Merit, Research Pathway; then High Achiever, Need-Based, STEM
        assert_eq!(ids(&results), vec!["s1", "s4", "s5", "s3", "s2"]);
    }

    #[test]
    fn test_alphabetical() {
        let criteria = ScholarshipCriteria {
            sort: MatchSort::AToZ,
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["s1", "s5", "s3", "s4", "s2"]);
    }

    #[test]
    fn test_query_searches_tags() {
        let criteria = ScholarshipCriteria {
            query: "merit".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["s1", "s5", "s2"]);
    }

    #[test]
    fn test_categorical_filters() {
        let criteria = ScholarshipCriteria {
            level: Some(DegreeLevel::Undergraduate),
            funding: Some(FundingType::Partial),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["s2"]);

        let criteria = ScholarshipCriteria {
            funding: Some(FundingType::Full),
            ..Default::default()
        };
        assert!(search().search(&criteria).is_empty());
    }
}
