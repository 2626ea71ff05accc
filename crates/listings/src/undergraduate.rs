//! Undergraduate programme search.

use crate::format::EmptyState;
use crate::search::{log_search, preference, ListingSearch, MatchSort, STUDY_COUNTRIES, TAUGHT_INTAKES};
use catalog::{
    Catalogs, Country, Intake, TuitionBand, UndergraduateDuration, UndergraduateProgram,
    UndergraduateStream,
};
use pipeline::filters::{EqualsFilter, MembershipFilter, TextQueryFilter};
use pipeline::{Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No matches found",
    hint: "Try changing country, stream, or budget.",
};

pub const COUNTRIES: &[Country] = STUDY_COUNTRIES;
/// Selectable intakes; some programmes also list Feb or Jul.
pub const INTAKES: &[Intake] = TAUGHT_INTAKES;
pub const BUDGETS: &[TuitionBand] = &[
    TuitionBand::Under15k,
    TuitionBand::From15kTo25k,
    TuitionBand::From25kTo40k,
    TuitionBand::Over40k,
];

#[derive(Debug, Clone, PartialEq)]
pub struct UndergraduateCriteria {
    pub query: String,
    pub country: Option<Country>,
    pub intake: Option<Intake>,
    pub stream: Option<UndergraduateStream>,
    pub duration: Option<UndergraduateDuration>,
    pub budget: Option<TuitionBand>,
    pub sort: MatchSort,
}

impl Default for UndergraduateCriteria {
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

fn best_match_score(program: &UndergraduateProgram) -> u8 {
    preference(program.country == Country::Uk) + preference(program.intakes.contains(&Intake::Sep))
}

fn program_name(program: &UndergraduateProgram) -> &str {
    &program.program
}

pub struct UndergraduateSearch {
    catalogs: Arc<Catalogs>,
    best_match: Comparator<UndergraduateProgram>,
    alphabetical: Comparator<UndergraduateProgram>,
}

impl UndergraduateSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self {
            catalogs,
            best_match: Comparator::new()
                .then_by("best_match", best_match_score, Direction::Ascending)
                .then_by_text("program", program_name, Direction::Ascending),
            alphabetical: Comparator::new().then_by_text("program", program_name, Direction::Ascending),
        }
    }

    fn pipeline(&self, criteria: &UndergraduateCriteria) -> FilterPipeline<UndergraduateProgram> {
        FilterPipeline::new()
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|p: &UndergraduateProgram| p.university.as_str())
                    .field(|p: &UndergraduateProgram| p.program.as_str())
                    .field(|p: &UndergraduateProgram| p.city.as_str())
                    .field(|p: &UndergraduateProgram| p.stream.label()),
            )
            .add_filter_if_some(criteria.country, |country| {
                EqualsFilter::new("country", country, |p: &UndergraduateProgram| p.country)
            })
            .add_filter_if_some(criteria.intake, |intake| {
                MembershipFilter::new("intake", intake, |p: &UndergraduateProgram| {
                    p.intakes.as_slice()
                })
            })
            .add_filter_if_some(criteria.stream, |stream| {
                EqualsFilter::new("stream", stream, |p: &UndergraduateProgram| p.stream)
            })
            .add_filter_if_some(criteria.budget, |budget| {
                EqualsFilter::new("budget", budget, |p: &UndergraduateProgram| p.tuition)
            })
            .add_filter_if_some(criteria.duration, |duration| {
                EqualsFilter::new("duration", duration, |p: &UndergraduateProgram| p.duration)
            })
    }
}

impl ListingSearch for UndergraduateSearch {
    type Record = UndergraduateProgram;
    type Criteria = UndergraduateCriteria;

    fn page(&self) -> &'static str {
        "undergraduate"
    }

    fn records(&self) -> &[UndergraduateProgram] {
        &self.catalogs.undergraduate
    }

    fn search(&self, criteria: &UndergraduateCriteria) -> Vec<&UndergraduateProgram> {
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

    fn search() -> UndergraduateSearch {
        UndergraduateSearch::new(Arc::new(Catalogs::builtin().unwrap()))
    }

    fn ids<'a>(results: &[&'a UndergraduateProgram]) -> Vec<&'a str> {
        results.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_best_match() {
        let page = search();
        let results = page.search(&UndergraduateCriteria::default());
        // UK with a September intake first, then the rest by programme name
        assert_eq!(ids(&results), vec!["ug1", "ug2", "ug4", "ug3", "ug5"]);
    }

    #[test]
    fn test_alphabetical() {
        let criteria = UndergraduateCriteria {
            sort: MatchSort::AToZ,
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["ug4", "ug3", "ug1", "ug2", "ug5"]);
    }

    #[test]
    fn test_off_menu_intakes_still_match_sep() {
        let criteria = UndergraduateCriteria {
            country: Some(Country::Australia),
            intake: Some(Intake::Sep),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["ug3"]);

        let criteria = UndergraduateCriteria {
            intake: Some(Intake::Jan),
            ..Default::default()
        };
        assert!(search().search(&criteria).is_empty());
    }

    #[test]
    fn test_duration_and_budget() {
        let criteria = UndergraduateCriteria {
            duration: Some(UndergraduateDuration::FourYears),
            budget: Some(TuitionBand::Over40k),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["ug5"]);
    }
}
