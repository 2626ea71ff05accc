//! Foundation programme search.

use crate::format::EmptyState;
use crate::search::{log_search, preference, ListingSearch, MatchSort, STUDY_COUNTRIES, TAUGHT_INTAKES};
use catalog::{
    Catalogs, Country, FoundationDuration, FoundationProgram, FoundationStream, Intake, TuitionBand,
};
use pipeline::filters::{EqualsFilter, MembershipFilter, TextQueryFilter};
use pipeline::{Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No matches found",
    hint: "Try changing country, intake, or stream.",
};

pub const COUNTRIES: &[Country] = STUDY_COUNTRIES;
pub const INTAKES: &[Intake] = TAUGHT_INTAKES;
pub const BUDGETS: &[TuitionBand] = &[
    TuitionBand::Under15k,
    TuitionBand::From15kTo25k,
    TuitionBand::Over25k,
];

#[derive(Debug, Clone, PartialEq)]
pub struct FoundationCriteria {
    pub query: String,
    pub country: Option<Country>,
    pub intake: Option<Intake>,
    pub stream: Option<FoundationStream>,
    pub duration: Option<FoundationDuration>,
    pub budget: Option<TuitionBand>,
    pub sort: MatchSort,
}

impl Default for FoundationCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            country: None,
            intake: None,
            stream: None,
            duration: None,
            budget: None,
            sort: MatchSort::BestMatch,
        }
    }
}

/// UK programmes with a September intake rank first.
fn best_match_score(program: &FoundationProgram) -> u8 {
    preference(program.country == Country::Uk) + preference(program.intakes.contains(&Intake::Sep))
}

fn title(program: &FoundationProgram) -> &str {
    &program.title
}

pub struct FoundationSearch {
    catalogs: Arc<Catalogs>,
    best_match: Comparator<FoundationProgram>,
    alphabetical: Comparator<FoundationProgram>,
}

impl FoundationSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self {
            catalogs,
            best_match: Comparator::new()
                .then_by("best_match", best_match_score, Direction::Ascending)
                .then_by_text("title", title, Direction::Ascending),
            alphabetical: Comparator::new().then_by_text("title", title, Direction::Ascending),
        }
    }

    fn pipeline(&self, criteria: &FoundationCriteria) -> FilterPipeline<FoundationProgram> {
        FilterPipeline::new()
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|p: &FoundationProgram| p.title.as_str())
                    .field(|p: &FoundationProgram| p.provider.as_str())
                    .field(|p: &FoundationProgram| p.city.as_str())
                    .field(|p: &FoundationProgram| p.stream.label()),
            )
            .add_filter_if_some(criteria.country, |country| {
                EqualsFilter::new("country", country, |p: &FoundationProgram| p.country)
            })
            .add_filter_if_some(criteria.intake, |intake| {
                MembershipFilter::new("intake", intake, |p: &FoundationProgram| p.intakes.as_slice())
            })
            .add_filter_if_some(criteria.stream, |stream| {
                EqualsFilter::new("stream", stream, |p: &FoundationProgram| p.stream)
            })
            .add_filter_if_some(criteria.duration, |duration| {
                EqualsFilter::new("duration", duration, |p: &FoundationProgram| p.duration)
            })
            .add_filter_if_some(criteria.budget, |budget| {
                EqualsFilter::new("budget", budget, |p: &FoundationProgram| p.budget)
            })
    }
}

impl ListingSearch for FoundationSearch {
    type Record = FoundationProgram;
    type Criteria = FoundationCriteria;

    fn page(&self) -> &'static str {
        "foundation"
    }

    fn records(&self) -> &[FoundationProgram] {
        &self.catalogs.foundation
    }

    fn search(&self, criteria: &FoundationCriteria) -> Vec<&FoundationProgram> {
        let order = match criteria.sort {
            MatchSort::BestMatch => &self.best_match,
            MatchSort::AToZ => &self.alphabetical,
        };
        let results = self.pipeline(criteria).apply_sorted(self.records(), order);
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

    fn search() -> FoundationSearch {
        FoundationSearch::new(Arc::new(Catalogs::builtin().unwrap()))
    }

    fn ids<'a>(results: &[&'a FoundationProgram]) -> Vec<&'a str> {
        results.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_best_match_prefers_uk_september() {
        let page = search();
        let results = page.search(&FoundationCriteria::default());
        // f1, f2 score 0 (by title); f3, f4 score 1 (by title)
        assert_eq!(ids(&results), vec!["f2", "f1", "f3", "f4"]);
    }

    #[test]
    fn test_alphabetical() {
        let criteria = FoundationCriteria {
            sort: MatchSort::AToZ,
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["f3", "f2", "f1", "f4"]);
    }

    #[test]
    fn test_intake_membership_and_stream_query() {
        let criteria = FoundationCriteria {
            intake: Some(Intake::May),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["f4"]);

        let criteria = FoundationCriteria {
            query: "computer science".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["f3"]);
    }

    #[test]
    fn test_budget_band() {
        let criteria = FoundationCriteria {
            budget: Some(TuitionBand::Over25k),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["f4"]);

        let criteria = FoundationCriteria {
            budget: Some(TuitionBand::Under15k),
            ..Default::default()
        };
        assert!(search().search(&criteria).is_empty());
    }
}
