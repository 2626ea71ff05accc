//! Integration tests for the pipeline.
//!
//! These tests verify that filters, buckets and comparators work together
//! on a small but realistic catalog.

use chrono::{Duration, NaiveDate};
use pipeline::filters::*;
use pipeline::{classify, BucketSet, Comparator, DeadlineStatus, Direction, FilterPipeline};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    Near,
    Mid,
    Far,
    VeryFar,
}

#[derive(Debug, Clone)]
struct Stay {
    id: &'static str,
    name: String,
    city: String,
    private: bool,
    weekly: u32,
    km: f64,
    available: NaiveDate,
    verified: bool,
    rating: f64,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn stay(
    id: &'static str,
    name: &str,
    city: &str,
    private: bool,
    weekly: u32,
    km: f64,
    available: NaiveDate,
    verified: bool,
    rating: f64,
) -> Stay {
    Stay {
        id,
        name: name.to_string(),
        city: city.to_string(),
        private,
        weekly,
        km,
        available,
        verified,
        rating,
    }
}

fn create_test_catalog() -> Vec<Stay> {
    vec![
        stay("s1", "Campus View", "London", false, 285, 1.2, date(2026, 3, 1), true, 4.7),
        stay("s2", "Rivergate", "Manchester", true, 190, 2.8, date(2026, 2, 15), true, 4.4),
        stay("s3", "CityShare", "Birmingham", false, 135, 3.4, date(2026, 2, 20), false, 4.1),
        stay("s4", "Hall Life", "Leeds", false, 160, 0.6, date(2026, 9, 1), true, 4.5),
        stay("s5", "Metro Rooms", "London", true, 230, 4.9, date(2026, 3, 10), true, 4.3),
    ]
}

fn distance_buckets() -> Arc<BucketSet<Distance>> {
    Arc::new(
        BucketSet::new(
            "distance",
            vec![(2.0, Distance::Near), (5.0, Distance::Mid), (10.0, Distance::Far)],
            Distance::VeryFar,
        )
        .unwrap(),
    )
}

fn recommended() -> Comparator<Stay> {
    Comparator::new()
        .then_by("verified", |s: &Stay| s.verified, Direction::Descending)
        .then_by_float("rating", |s: &Stay| s.rating, Direction::Descending)
        .then_by("price", |s: &Stay| s.weekly, Direction::Ascending)
}

fn full_pipeline(query: &str, budget: u32) -> FilterPipeline<Stay> {
    FilterPipeline::new()
        .add_filter(
            TextQueryFilter::new("query", query)
                .field(|s: &Stay| s.city.as_str())
                .field(|s: &Stay| s.name.as_str()),
        )
        .add_filter(ThresholdFilter::at_most("budget", budget, |s: &Stay| s.weekly))
        .add_filter(BucketFilter::new(
            "distance",
            distance_buckets(),
            Distance::Mid,
            |s: &Stay| s.km,
        ))
}

fn ids(records: &[&Stay]) -> Vec<&'static str> {
    records.iter().map(|s| s.id).collect()
}

#[test]
fn test_result_is_subsequence_of_catalog() {
    let catalog = create_test_catalog();
    let filtered = full_pipeline("", 400).apply(&catalog);

    let positions: Vec<usize> = filtered
        .iter()
        .map(|r| catalog.iter().position(|s| s.id == r.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
    assert_eq!(ids(&filtered), vec!["s2", "s3", "s5"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = create_test_catalog();
    let pipeline = full_pipeline("london", 300);

    let once: Vec<Stay> = pipeline.apply(&catalog).into_iter().cloned().collect();
    let twice = pipeline.apply(&once);
    assert_eq!(ids(&twice), once.iter().map(|s| s.id).collect::<Vec<_>>());
}

#[test]
fn test_unconstrained_criteria_are_identity() {
    let catalog = create_test_catalog();
    let pipeline = FilterPipeline::new()
        .add_filter(TextQueryFilter::new("query", "  ").field(|s: &Stay| s.city.as_str()))
        .add_filter_if_some(None::<bool>, |private| {
            EqualsFilter::new("private", private, |s: &Stay| s.private)
        });

    assert_eq!(pipeline.apply(&catalog).len(), catalog.len());
}

#[test]
fn test_budget_is_inclusive() {
    let catalog = create_test_catalog();
    let pipeline =
        FilterPipeline::new().add_filter(ThresholdFilter::at_most("budget", 190, |s: &Stay| s.weekly));

    let filtered = pipeline.apply(&catalog);
    assert!(filtered.iter().any(|s| s.id == "s2"));
    assert!(filtered.iter().all(|s| s.weekly <= 190));
}

#[test]
fn test_sort_is_stable_and_keyed() {
    let catalog = create_test_catalog();
    let results = FilterPipeline::new().apply_sorted(&catalog, &recommended());
    assert_eq!(ids(&results), vec!["s1", "s4", "s2", "s5", "s3"]);

    // Equal on every key: catalog order survives
    let twins = vec![
        stay("t1", "A", "Leeds", true, 100, 1.0, date(2026, 1, 1), true, 4.0),
        stay("t2", "B", "Leeds", true, 100, 1.0, date(2026, 1, 1), true, 4.0),
        stay("t3", "C", "Leeds", true, 100, 1.0, date(2026, 1, 1), true, 4.0),
    ];
    let results = FilterPipeline::new().apply_sorted(&twins, &recommended());
    assert_eq!(ids(&results), vec!["t1", "t2", "t3"]);
}

#[test]
fn test_date_bound_and_membership_compose() {
    struct Program {
        id: &'static str,
        intakes: Vec<&'static str>,
        start: NaiveDate,
    }
    let programs = vec![
        Program { id: "p1", intakes: vec!["Jan", "Sep"], start: date(2026, 1, 20) },
        Program { id: "p2", intakes: vec!["Sep"], start: date(2026, 9, 20) },
        Program { id: "p3", intakes: vec!["Jan"], start: date(2026, 1, 25) },
    ];

    let pipeline = FilterPipeline::new()
        .add_filter(MembershipFilter::new("intake", "Jan", |p: &Program| p.intakes.as_slice()))
        .add_filter(DateBoundFilter::on_or_before("start", date(2026, 1, 24), |p: &Program| p.start));

    let filtered = pipeline.apply(&programs);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "p1");
}

#[test]
fn test_deadline_window_edges() {
    let today = date(2026, 2, 20);

    assert_eq!(classify(today + Duration::days(14), today).status, DeadlineStatus::DueSoon);
    assert_eq!(classify(today + Duration::days(15), today).status, DeadlineStatus::Open);
    assert_eq!(classify(today, today).status, DeadlineStatus::ClosingToday);
    assert_eq!(classify(today - Duration::days(1), today).status, DeadlineStatus::Closed);
}

#[test]
fn test_deadline_statuses_on_fixed_day() {
    let today = date(2026, 2, 20);
    let cases = [
        (date(2026, 2, 28), DeadlineStatus::DueSoon, 8),
        (date(2026, 1, 31), DeadlineStatus::Closed, -20),
        (date(2026, 3, 15), DeadlineStatus::Open, 23),
        (date(2026, 3, 5), DeadlineStatus::DueSoon, 13),
        (date(2026, 2, 20), DeadlineStatus::ClosingToday, 0),
        (date(2026, 4, 1), DeadlineStatus::Open, 40),
    ];

    for (target, status, days) in cases {
        let info = classify(target, today);
        assert_eq!(info.status, status, "status for {target}");
        assert_eq!(info.days, days, "days for {target}");
    }
}
