//! Postgraduate (taught master's) programme search.

use crate::format::EmptyState;
use crate::search::{log_search, preference, ListingSearch, MatchSort, STUDY_COUNTRIES, TAUGHT_INTAKES};
use catalog::{
    Catalogs, Country, Intake, MastersDegree, PostgraduateDuration, PostgraduateProgram,
    PostgraduateStream, TuitionBand,
};
use pipeline::filters::{EqualsFilter, MembershipFilter, TextQueryFilter};
use pipeline::{Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No matches found",
    hint: "Try changing country, degree, or stream.",
};

pub const COUNTRIES: &[Country] = STUDY_COUNTRIES;
pub const INTAKES: &[Intake] = TAUGHT_INTAKES;
pub const BUDGETS: &[TuitionBand] = &[
    TuitionBand::Under15k,
    TuitionBand::From15kTo25k,
    TuitionBand::From25kTo40k,
    TuitionBand::Over40k,
];

#[derive(Debug, Clone, PartialEq)]
pub struct PostgraduateCriteria {
    pub query: String,
    pub country: Option<Country>,
    pub intake: Option<Intake>,
    pub degree: Option<MastersDegree>,
    pub stream: Option<PostgraduateStream>,
    pub duration: Option<PostgraduateDuration>,
    pub budget: Option<TuitionBand>,
    pub sort: MatchSort,
}

impl Default for PostgraduateCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            country: None,
            intake: None,
            degree: None,
            stream: None,
            duration: None,
            budget: None,
            sort: MatchSort::BestMatch,
        }
    }
}

/// One-year UK programmes with a September intake rank first.
fn best_match_score(program: &PostgraduateProgram) -> u8 {
    preference(program.country == Country::Uk)
        + preference(program.duration == PostgraduateDuration::OneYear)
        + preference(program.intakes.contains(&Intake::Sep))
}

fn program_name(program: &PostgraduateProgram) -> &str {
    &program.program
}

pub struct PostgraduateSearch {
    catalogs: Arc<Catalogs>,
    best_match: Comparator<PostgraduateProgram>,
    alphabetical: Comparator<PostgraduateProgram>,
}

impl PostgraduateSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self {
            catalogs,
            best_match: Comparator::new()
                .then_by("best_match", best_match_score, Direction::Ascending)
                .then_by_text("program", program_name, Direction::Ascending),
            alphabetical: Comparator::new().then_by_text("program", program_name, Direction::Ascending),
        }
    }

    fn pipeline(&self, criteria: &PostgraduateCriteria) -> FilterPipeline<PostgraduateProgram> {
        FilterPipeline::new()
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|p: &PostgraduateProgram| p.university.as_str())
                    .field(|p: &PostgraduateProgram| p.program.as_str())
                    .field(|p: &PostgraduateProgram| p.city.as_str())
                    .field(|p: &PostgraduateProgram| p.stream.label())
                    .field(|p: &PostgraduateProgram| p.degree.label()),
            )
            .add_filter_if_some(criteria.country, |country| {
                EqualsFilter::new("country", country, |p: &PostgraduateProgram| p.country)
            })
            .add_filter_if_some(criteria.intake, |intake| {
                MembershipFilter::new("intake", intake, |p: &PostgraduateProgram| {
                    p.intakes.as_slice()
                })
            })
            .add_filter_if_some(criteria.degree, |degree| {
                EqualsFilter::new("degree", degree, |p: &PostgraduateProgram| p.degree)
            })
            .add_filter_if_some(criteria.stream, |stream| {
                EqualsFilter::new("stream", stream, |p: &PostgraduateProgram| p.stream)
            })
            .add_filter_if_some(criteria.duration, |duration| {
                EqualsFilter::new("duration", duration, |p: &PostgraduateProgram| p.duration)
            })
            .add_filter_if_some(criteria.budget, |budget| {
                EqualsFilter::new("budget", budget, |p: &PostgraduateProgram| p.tuition)
            })
    }
}

impl ListingSearch for PostgraduateSearch {
    type Record = PostgraduateProgram;
    type Criteria = PostgraduateCriteria;

    fn page(&self) -> &'static str {
        "postgraduate"
    }

    fn records(&self) -> &[PostgraduateProgram] {
        &self.catalogs.postgraduate
    }

    fn search(&self, criteria: &PostgraduateCriteria) -> Vec<&PostgraduateProgram> {
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

    fn search() -> PostgraduateSearch {
        PostgraduateSearch::new(Arc::new(Catalogs::builtin().unwrap()))
    }

    fn ids<'a>(results: &[&'a PostgraduateProgram]) -> Vec<&'a str> {
        results.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_best_match_weights_country_duration_intake() {
        let page = search();
        let results = page.search(&PostgraduateCriteria::default());
        assert_eq!(ids(&results), vec!["pg1", "pg2", "pg3", "pg4", "pg5"]);
    }

    #[test]
    fn test_alphabetical() {
        let criteria = PostgraduateCriteria {
            sort: MatchSort::AToZ,
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["pg4", "pg1", "pg2", "pg3", "pg5"]);
    }

    #[test]
    fn test_query_matches_degree_label() {
        let criteria = PostgraduateCriteria {
            query: "ma".to_string(),
            degree: Some(MastersDegree::Ma),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["pg4"]);
    }

    #[test]
    fn test_duration_and_budget() {
        let criteria = PostgraduateCriteria {
            duration: Some(PostgraduateDuration::TwoYears),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["pg4", "pg5"]);

        let criteria = PostgraduateCriteria {
            budget: Some(TuitionBand::Under15k),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["pg5"]);
    }

    #[test]
    fn test_intake_may() {
        let criteria = PostgraduateCriteria {
            intake: Some(Intake::May),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["pg4"]);
    }
}
