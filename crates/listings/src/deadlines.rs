//! Deadline tracker.
//!
//! Unlike the other pages, results depend on the calendar: the status
//! filter and every row's countdown are computed against
//! [`DeadlineCriteria::today`]. The summary counts always cover the whole
//! catalog, whatever the active filters.

use crate::format::EmptyState;
use crate::search::{log_search, ListingSearch};
use catalog::{vocabulary, Catalogs, Country, DeadlineCategory, DeadlineItem, DegreeLevel};
use chrono::{Local, NaiveDate};
use pipeline::filters::{EqualsFilter, MembershipFilter, PredicateFilter, TextQueryFilter};
use pipeline::{classify, Comparator, DeadlineInfo, DeadlineStatus, Direction, FilterPipeline, StatusCounts};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No deadlines found",
    hint: "Try removing filters or changing keywords.",
};

vocabulary! {
    pub enum DeadlineSort as "sort" {
        Soonest => "Soonest",
        Latest => "Latest",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineCriteria {
    pub query: String,
    pub country: Option<Country>,
    /// Items with no level apply to every level and always match.
    pub level: Option<DegreeLevel>,
    pub category: Option<DeadlineCategory>,
    pub status: Option<DeadlineStatus>,
    pub sort: DeadlineSort,
    /// Calendar day statuses are computed against.
    pub today: NaiveDate,
}

impl Default for DeadlineCriteria {
    fn default() -> Self {
        Self::as_of(Local::now().date_naive())
    }
}

impl DeadlineCriteria {
    /// Initial page state on a given day.
    pub fn as_of(today: NaiveDate) -> Self {
        Self {
            query: String::new(),
            country: None,
            level: None,
            category: None,
            status: None,
            sort: DeadlineSort::Soonest,
            today,
        }
    }
}

pub struct DeadlineSearch {
    catalogs: Arc<Catalogs>,
    soonest: Comparator<DeadlineItem>,
    latest: Comparator<DeadlineItem>,
}

impl DeadlineSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self {
            catalogs,
            soonest: Comparator::new().then_by("date", |d: &DeadlineItem| d.date, Direction::Ascending),
            latest: Comparator::new().then_by("date", |d: &DeadlineItem| d.date, Direction::Descending),
        }
    }

    /// Countries present in the catalog, sorted by label.
    pub fn countries(&self) -> Vec<Country> {
        let mut countries: Vec<Country> = self.records().iter().map(|d| d.country).collect();
        countries.sort_by_key(|c| c.label());
        countries.dedup();
        countries
    }

    /// Per-status totals across the whole catalog.
    pub fn counts(&self, today: NaiveDate) -> StatusCounts {
        StatusCounts::tally(self.records().iter().map(|d| d.date), today)
    }

    fn pipeline(&self, criteria: &DeadlineCriteria) -> FilterPipeline<DeadlineItem> {
        let today = criteria.today;
        FilterPipeline::new()
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|d: &DeadlineItem| d.title.as_str())
                    .field(|d: &DeadlineItem| d.provider.as_str())
                    .collection(|d: &DeadlineItem| d.tags.as_slice()),
            )
            .add_filter_if_some(criteria.country, |country| {
                EqualsFilter::new("country", country, |d: &DeadlineItem| d.country)
            })
            .add_filter_if_some(criteria.level, |level| {
                MembershipFilter::new("level", level, DeadlineItem::level_slice)
                    .or_applies_to_all(DeadlineItem::applies_to_all_levels)
            })
            .add_filter_if_some(criteria.category, |category| {
                EqualsFilter::new("category", category, |d: &DeadlineItem| d.category)
            })
            .add_filter_if_some(criteria.status, |status| {
                PredicateFilter::new("status", move |d: &DeadlineItem| {
                    classify(d.date, today).status == status
                })
            })
    }
}

/// Status and countdown of one item.
pub fn status_of(item: &DeadlineItem, today: NaiveDate) -> DeadlineInfo {
    classify(item.date, today)
}

impl ListingSearch for DeadlineSearch {
    type Record = DeadlineItem;
    type Criteria = DeadlineCriteria;

    fn page(&self) -> &'static str {
        "deadlines"
    }

    fn records(&self) -> &[DeadlineItem] {
        &self.catalogs.deadlines
    }

    fn search(&self, criteria: &DeadlineCriteria) -> Vec<&DeadlineItem> {
        let order = match criteria.sort {
            DeadlineSort::Soonest => &self.soonest,
            DeadlineSort::Latest => &self.latest,
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

    fn search() -> DeadlineSearch {
        DeadlineSearch::new(Arc::new(Catalogs::builtin().unwrap()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()
    }

    fn ids<'a>(results: &[&'a DeadlineItem]) -> Vec<&'a str> {
        results.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_soonest_and_latest() {
        let search = search();
        let criteria = DeadlineCriteria::as_of(today());
        assert_eq!(ids(&search.search(&criteria)), vec!["d2", "d5", "d1", "d4", "d3", "d6"]);

        let criteria = DeadlineCriteria {
            sort: DeadlineSort::Latest,
            ..criteria
        };
        assert_eq!(ids(&search.search(&criteria)), vec!["d6", "d3", "d4", "d1", "d5", "d2"]);
    }

    #[test]
    fn test_level_includes_items_for_every_level() {
        let criteria = DeadlineCriteria {
            level: Some(DegreeLevel::Undergraduate),
            ..DeadlineCriteria::as_of(today())
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["d2", "d5", "d4", "d3"]);
    }

    #[test]
    fn test_status_filter_uses_today() {
        let criteria = DeadlineCriteria {
            status: Some(DeadlineStatus::DueSoon),
            ..DeadlineCriteria::as_of(today())
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["d1", "d4"]);

        // A day later the loan window has closed
        let tomorrow = today().succ_opt().unwrap();
        let criteria = DeadlineCriteria {
            status: Some(DeadlineStatus::Closed),
            ..DeadlineCriteria::as_of(tomorrow)
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["d2", "d5"]);
    }

    #[test]
    fn test_counts_ignore_filters() {
        let counts = search().counts(today());
        assert_eq!(
            counts,
            StatusCounts {
                open: 2,
                due_soon: 2,
                closing_today: 1,
                closed: 1,
            }
        );
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_row_status() {
        let search = search();
        let merit = &search.records()[0];
        let info = status_of(merit, today());
        assert_eq!(info.status, DeadlineStatus::DueSoon);
        assert_eq!(info.day_text(), "8 day(s) left");
    }

    #[test]
    fn test_query_and_countries() {
        let criteria = DeadlineCriteria {
            query: "merit".to_string(),
            ..DeadlineCriteria::as_of(today())
        };
        assert_eq!(ids(&search().search(&criteria)), vec!["d1", "d3"]);

        assert_eq!(
            search().countries(),
            vec![Country::Canada, Country::Germany, Country::India, Country::Uk, Country::Usa]
        );
    }
}
