//! PhD and research programme search.
//!
//! ## Sort modes
//! - Best match: funded positions, nearer deadline windows, and rolling
//!   intakes first; ties broken by title
//! - Soonest: deadline window only, catalog order within a window
//! - A-Z: title

use crate::format::EmptyState;
use crate::search::{log_search, preference, ListingSearch};
use catalog::{
    vocabulary, AttendanceMode, Catalogs, Country, DeadlineWindow, Intake, PhdFunding, PhdProgram,
    ResearchField,
};
use pipeline::filters::{EqualsFilter, MembershipFilter, TextQueryFilter};
use pipeline::{Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No matches found",
    hint: "Try changing country, field, or funding.",
};

pub const COUNTRIES: &[Country] = &[
    Country::Uk,
    Country::Usa,
    Country::Canada,
    Country::Australia,
    Country::Germany,
    Country::Ireland,
    Country::Netherlands,
];
pub const INTAKES: &[Intake] = &[Intake::Rolling, Intake::Jan, Intake::May, Intake::Sep];

vocabulary! {
    pub enum PhdSort as "sort" {
        BestMatch => "Best match" | "best",
        Soonest => "Soonest",
        AToZ => "A-Z" | "az" | "name",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhdCriteria {
    pub query: String,
    pub country: Option<Country>,
    pub intake: Option<Intake>,
    pub field: Option<ResearchField>,
    pub funding: Option<PhdFunding>,
    pub mode: Option<AttendanceMode>,
    pub deadline: Option<DeadlineWindow>,
    pub sort: PhdSort,
}

impl Default for PhdCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            country: None,
            intake: None,
            field: None,
            funding: None,
            mode: None,
            deadline: None,
            sort: PhdSort::BestMatch,
        }
    }
}

/// Nearer windows weigh less.
fn window_weight(program: &PhdProgram) -> u8 {
    match program.deadline_window {
        DeadlineWindow::Next30Days => 0,
        DeadlineWindow::Next90Days => 1,
        DeadlineWindow::Open => 2,
    }
}

fn best_match_score(program: &PhdProgram) -> u8 {
    preference(program.funding == PhdFunding::Funded)
        + window_weight(program)
        + preference(program.intakes.contains(&Intake::Rolling))
}

fn title(program: &PhdProgram) -> &str {
    &program.title
}

pub struct PhdSearch {
    catalogs: Arc<Catalogs>,
    best_match: Comparator<PhdProgram>,
    soonest: Comparator<PhdProgram>,
    alphabetical: Comparator<PhdProgram>,
}

impl PhdSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self {
            catalogs,
            best_match: Comparator::new()
                .then_by("best_match", best_match_score, Direction::Ascending)
                .then_by_text("title", title, Direction::Ascending),
            soonest: Comparator::new().then_by("window", window_weight, Direction::Ascending),
            alphabetical: Comparator::new().then_by_text("title", title, Direction::Ascending),
        }
    }

    fn comparator(&self, sort: PhdSort) -> &Comparator<PhdProgram> {
        match sort {
            PhdSort::BestMatch => &self.best_match,
            PhdSort::Soonest => &self.soonest,
            PhdSort::AToZ => &self.alphabetical,
        }
    }

    fn pipeline(&self, criteria: &PhdCriteria) -> FilterPipeline<PhdProgram> {
        FilterPipeline::new()
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|p: &PhdProgram| p.university.as_str())
                    .field(|p: &PhdProgram| p.title.as_str())
                    .field(|p: &PhdProgram| p.city.as_str())
                    .field(|p: &PhdProgram| p.field.label()),
            )
            .add_filter_if_some(criteria.country, |country| {
                EqualsFilter::new("country", country, |p: &PhdProgram| p.country)
            })
            .add_filter_if_some(criteria.intake, |intake| {
                MembershipFilter::new("intake", intake, |p: &PhdProgram| p.intakes.as_slice())
            })
            .add_filter_if_some(criteria.field, |field| {
                EqualsFilter::new("field", field, |p: &PhdProgram| p.field)
            })
            .add_filter_if_some(criteria.funding, |funding| {
                EqualsFilter::new("funding", funding, |p: &PhdProgram| p.funding)
            })
            .add_filter_if_some(criteria.mode, |mode| {
                EqualsFilter::new("mode", mode, |p: &PhdProgram| p.mode)
            })
            .add_filter_if_some(criteria.deadline, |window| {
                EqualsFilter::new("deadline", window, |p: &PhdProgram| p.deadline_window)
            })
    }
}

impl ListingSearch for PhdSearch {
    type Record = PhdProgram;
    type Criteria = PhdCriteria;

    fn page(&self) -> &'static str {
        "phd"
    }

    fn records(&self) -> &[PhdProgram] {
        &self.catalogs.phd
    }

    fn search(&self, criteria: &PhdCriteria) -> Vec<&PhdProgram> {
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

    fn search() -> PhdSearch {
        PhdSearch::new(Arc::new(Catalogs::builtin().unwrap()))
    }

    fn ids<'a>(results: &[&'a PhdProgram]) -> Vec<&'a str> {
        results.iter().map(|p| p.id.as_str()).collect()
    }

    fn sorted(sort: PhdSort) -> Vec<String> {
        let criteria = PhdCriteria {
            sort,
            ..Default::default()
        };
        search()
            .search(&criteria)
            .iter()
            .map(|p| p.id.clone())
            .collect()
    }

    #[test]
    fn test_best_match() {
        // phd2, phd3, phd5 score 2; phd1, phd4 score 3
        assert_eq!(sorted(PhdSort::BestMatch), vec!["phd3", "phd5", "phd2", "phd1", "phd4"]);
    }

    #[test]
    fn test_soonest_keeps_catalog_order_within_window() {
        assert_eq!(sorted(PhdSort::Soonest), vec!["phd1", "phd3", "phd2", "phd4", "phd5"]);
    }

    #[test]
    fn test_alphabetical() {
        assert_eq!(sorted(PhdSort::AToZ), vec!["phd1", "phd3", "phd5", "phd2", "phd4"]);
    }

    #[test]
    fn test_rolling_intake_and_funding() {
        let criteria = PhdCriteria {
            intake: Some(Intake::Rolling),
            funding: Some(PhdFunding::Funded),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["phd5", "phd2"]);
    }

    #[test]
    fn test_netherlands_and_part_time() {
        let criteria = PhdCriteria {
            country: Some(Country::Netherlands),
            ..Default::default()
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["phd5"]);

        let criteria = PhdCriteria {
            mode: Some(AttendanceMode::PartTime),
            ..Default::default()
        };
        let search = search();
        assert!(search.search(&criteria).is_empty());
        assert_eq!(search.empty_state().hint, "Try changing country, field, or funding.");
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!("soonest".parse::<PhdSort>().unwrap(), PhdSort::Soonest);
        assert_eq!(PhdSort::AToZ.to_string(), "A-Z");
    }
}
