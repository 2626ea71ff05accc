//! Student accommodation search.
//!
//! ## Filters
//! - Query: city, nearby university, or property name
//! - Room type, distance band, move-in date ("available by")
//! - Weekly budget (inclusive, clamped to the slider range)
//!
//! ## Order
//! Verified listings first, then higher rating, then cheaper rent.

use crate::format::EmptyState;
use crate::search::{log_search, ListingSearch};
use crate::slider::ACCOMMODATION_BUDGET;
use catalog::{Catalogs, DistanceBand, Property, RoomType};
use chrono::NaiveDate;
use pipeline::filters::{BucketFilter, DateBoundFilter, EqualsFilter, TextQueryFilter, ThresholdFilter};
use pipeline::{BucketSet, Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No matches found",
    hint: "Try changing city/university, increasing budget, or removing filters.",
};

/// Accommodation search criteria. `Default` is the page's initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationCriteria {
    pub query: String,
    pub room_type: Option<RoomType>,
    pub distance: Option<DistanceBand>,
    /// Keep properties available on or before this date.
    pub move_in_by: Option<NaiveDate>,
    /// Maximum weekly rent in pounds.
    pub budget: u32,
}

impl Default for AccommodationCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            room_type: None,
            distance: None,
            move_in_by: None,
            budget: ACCOMMODATION_BUDGET.default,
        }
    }
}

/// Distance bands: `0-2 km`, `2-5 km`, `5-10 km`, `10+ km` (upper bounds inclusive).
pub fn distance_buckets() -> pipeline::Result<BucketSet<DistanceBand>> {
    BucketSet::new(
        "distance",
        vec![
            (2.0, DistanceBand::UpTo2Km),
            (5.0, DistanceBand::From2To5Km),
            (10.0, DistanceBand::From5To10Km),
        ],
        DistanceBand::Over10Km,
    )
}

pub struct AccommodationSearch {
    catalogs: Arc<Catalogs>,
    distance: Arc<BucketSet<DistanceBand>>,
    order: Comparator<Property>,
}

impl AccommodationSearch {
    /// Build the search, validating the distance bands.
    pub fn new(catalogs: Arc<Catalogs>) -> pipeline::Result<Self> {
        let order = Comparator::new()
            .then_by("verified", |p: &Property| p.verified, Direction::Descending)
            .then_by_float("rating", |p: &Property| p.rating, Direction::Descending)
            .then_by("price", |p: &Property| p.price_per_week, Direction::Ascending);

        Ok(Self {
            catalogs,
            distance: Arc::new(distance_buckets()?),
            order,
        })
    }

    /// Distance band label shown on a property card.
    pub fn distance_band(&self, property: &Property) -> DistanceBand {
        self.distance.label(property.distance_km)
    }

    fn pipeline(&self, criteria: &AccommodationCriteria) -> FilterPipeline<Property> {
        FilterPipeline::new()
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|p: &Property| p.city.as_str())
                    .field(|p: &Property| p.university_nearby.as_str())
                    .field(|p: &Property| p.name.as_str()),
            )
            .add_filter_if_some(criteria.room_type, |room_type| {
                EqualsFilter::new("room_type", room_type, |p: &Property| p.room_type)
            })
            .add_filter(ThresholdFilter::at_most(
                "budget",
                ACCOMMODATION_BUDGET.clamp(criteria.budget),
                |p: &Property| p.price_per_week,
            ))
            .add_filter_if_some(criteria.distance, |band| {
                BucketFilter::new("distance", self.distance.clone(), band, |p: &Property| {
                    p.distance_km
                })
            })
            .add_filter_if_some(criteria.move_in_by, |latest| {
                DateBoundFilter::on_or_before("move_in", latest, |p: &Property| p.move_in)
            })
    }
}

impl ListingSearch for AccommodationSearch {
    type Record = Property;
    type Criteria = AccommodationCriteria;

    fn page(&self) -> &'static str {
        "accommodation"
    }

    fn records(&self) -> &[Property] {
        &self.catalogs.accommodation
    }

    fn search(&self, criteria: &AccommodationCriteria) -> Vec<&Property> {
        let results = self.pipeline(criteria).apply_sorted(self.records(), &self.order);
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

    fn search() -> AccommodationSearch {
        AccommodationSearch::new(Arc::new(Catalogs::builtin().unwrap())).unwrap()
    }

    fn ids<'a>(results: &[&'a Property]) -> Vec<&'a str> {
        results.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state_order() {
        let search = search();
        let results = search.search(&AccommodationCriteria::default());

        // p1 at £285 is over the £250 starting budget
        assert_eq!(ids(&results), vec!["p4", "p2", "p5", "p3"]);
    }

    #[test]
    fn test_query_any_casing() {
        let search = search();
        for query in ["london", "LONDON", " London "] {
            let criteria = AccommodationCriteria {
                query: query.to_string(),
                budget: 400,
                ..Default::default()
            };
            assert_eq!(ids(&search.search(&criteria)), vec!["p1", "p5"]);
        }
    }

    #[test]
    fn test_query_matches_university_and_name() {
        let search = search();
        let by_university = AccommodationCriteria {
            query: "king's".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&search.search(&by_university)), vec!["p5"]);

        let by_name = AccommodationCriteria {
            query: "rivergate".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&search.search(&by_name)), vec!["p2"]);
    }

    #[test]
    fn test_private_under_150_is_empty_on_builtin_data() {
        let search = search();
        let criteria = AccommodationCriteria {
            room_type: Some(RoomType::Private),
            budget: 150,
            ..Default::default()
        };
        let results = search.search(&criteria);
        assert!(results.is_empty());
        assert_eq!(search.empty_state().title, "No matches found");
    }

    #[test]
    fn test_distance_and_move_in() {
        let search = search();
        let criteria = AccommodationCriteria {
            distance: Some(DistanceBand::From2To5Km),
            move_in_by: NaiveDate::from_ymd_opt(2026, 2, 28),
            budget: 400,
            ..Default::default()
        };
        assert_eq!(ids(&search.search(&criteria)), vec!["p2", "p3"]);

        assert_eq!(search.distance_band(&search.records()[3]), DistanceBand::UpTo2Km);
    }

    #[test]
    fn test_budget_is_clamped() {
        let search = search();
        let criteria = AccommodationCriteria {
            budget: 10,
            ..Default::default()
        };
        assert!(search.search(&criteria).is_empty());

        let criteria = AccommodationCriteria {
            budget: 10_000,
            ..Default::default()
        };
        assert_eq!(search.search(&criteria).len(), 5);
    }
}
