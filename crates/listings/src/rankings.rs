//! University rankings table.
//!
//! The ranking table and year are part of the criteria, so the rank
//! ordering is built per search. A university with no entry for the
//! selected table and year sorts as [`UNRANKED`].

use crate::format::EmptyState;
use crate::search::{log_search, ListingSearch};
use catalog::{vocabulary, Catalogs, Country, RankingSystem, RankingYear, University};
use pipeline::filters::{EqualsFilter, PredicateFilter, TextQueryFilter};
use pipeline::{Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No results found.",
    hint: "Try another search or filters.",
};

pub const YEARS: &[RankingYear] = &[2024, 2025, 2026];

/// Sort position of a university missing from the selected table.
pub const UNRANKED: u32 = 999_999;

vocabulary! {
    pub enum RankingSort as "sort" {
        RankAscending => "Rank ↑" | "rank-asc" | "rank",
        RankDescending => "Rank ↓" | "rank-desc",
        NameAToZ => "Name A-Z" | "name" | "az",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingCriteria {
    pub system: RankingSystem,
    pub year: RankingYear,
    pub country: Option<Country>,
    pub query: String,
    pub sort: RankingSort,
    /// Hide universities without a rank in the selected table and year.
    pub only_ranked: bool,
}

impl Default for RankingCriteria {
    fn default() -> Self {
        Self {
            system: RankingSystem::Qs,
            year: 2026,
            country: None,
            query: String::new(),
            sort: RankingSort::RankAscending,
            only_ranked: true,
        }
    }
}

fn name(university: &University) -> &str {
    &university.name
}

pub struct RankingSearch {
    catalogs: Arc<Catalogs>,
}

impl RankingSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self { catalogs }
    }

    /// Countries present in the table, sorted by label.
    pub fn countries(&self) -> Vec<Country> {
        let mut countries: Vec<Country> = self.records().iter().map(|u| u.country).collect();
        countries.sort_by_key(|c| c.label());
        countries.dedup();
        countries
    }

    fn comparator(criteria: &RankingCriteria) -> Comparator<University> {
        let (system, year) = (criteria.system, criteria.year);
        let position = move |u: &University| u.rank(system, year).unwrap_or(UNRANKED);
        match criteria.sort {
            RankingSort::RankAscending => Comparator::new().then_by("rank", position, Direction::Ascending),
            RankingSort::RankDescending => Comparator::new().then_by("rank", position, Direction::Descending),
            RankingSort::NameAToZ => Comparator::new().then_by_text("name", name, Direction::Ascending),
        }
    }

    fn pipeline(criteria: &RankingCriteria) -> FilterPipeline<University> {
        let (system, year) = (criteria.system, criteria.year);
        FilterPipeline::new()
            .add_filter_if_some(criteria.country, |country| {
                EqualsFilter::new("country", country, |u: &University| u.country)
            })
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|u: &University| u.name.as_str())
                    .field(|u: &University| u.country.label())
                    .field(University::city_or_empty)
                    .collection(|u: &University| u.tags.as_slice()),
            )
            .add_filter_if_some(criteria.only_ranked.then_some(()), |()| {
                PredicateFilter::new("ranked", move |u: &University| u.rank(system, year).is_some())
            })
    }
}

impl ListingSearch for RankingSearch {
    type Record = University;
    type Criteria = RankingCriteria;

    fn page(&self) -> &'static str {
        "rankings"
    }

    fn records(&self) -> &[University] {
        &self.catalogs.universities
    }

    fn search(&self, criteria: &RankingCriteria) -> Vec<&University> {
        let results = Self::pipeline(criteria).apply_sorted(self.records(), &Self::comparator(criteria));
        log_search(self.page(), self.records().len(), results.len());
        results
    }

    fn empty_state(&self) -> EmptyState {
        EMPTY_STATE
    }
}
