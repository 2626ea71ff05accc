//! Course search.
//!
//! Same shape as the accommodation page: free-text query, categorical
//! level and mode, a bucketed duration, a "starts by" date bound, and an
//! inclusive fee budget.

use crate::format::EmptyState;
use crate::search::{log_search, ListingSearch};
use crate::slider::COURSE_BUDGET;
use catalog::{Catalogs, Course, CourseLength, CourseLevel, StudyMode};
use chrono::NaiveDate;
use pipeline::filters::{BucketFilter, DateBoundFilter, EqualsFilter, TextQueryFilter, ThresholdFilter};
use pipeline::{BucketSet, Comparator, Direction, FilterPipeline};
use std::sync::Arc;

pub const EMPTY_STATE: EmptyState = EmptyState {
    title: "No matches found",
    hint: "Try changing search, increasing budget, or removing filters.",
};

#[derive(Debug, Clone, PartialEq)]
pub struct CourseCriteria {
    pub query: String,
    pub level: Option<CourseLevel>,
    pub mode: Option<StudyMode>,
    pub duration: Option<CourseLength>,
    /// Keep courses starting on or before this date.
    pub start_by: Option<NaiveDate>,
    /// Maximum total fee in pounds.
    pub budget: u32,
}

impl Default for CourseCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            level: None,
            mode: None,
            duration: None,
            start_by: None,
            budget: COURSE_BUDGET.default,
        }
    }
}

/// Duration bands in months: `0-3`, `3-6`, `6-12`, `12+`.
pub fn duration_buckets() -> pipeline::Result<BucketSet<CourseLength>> {
    BucketSet::new(
        "duration",
        vec![
            (3.0, CourseLength::UpTo3Months),
            (6.0, CourseLength::From3To6Months),
            (12.0, CourseLength::From6To12Months),
        ],
        CourseLength::Over12Months,
    )
}

pub struct CourseSearch {
    catalogs: Arc<Catalogs>,
    duration: Arc<BucketSet<CourseLength>>,
    order: Comparator<Course>,
}

impl CourseSearch {
    pub fn new(catalogs: Arc<Catalogs>) -> pipeline::Result<Self> {
        let order = Comparator::new()
            .then_by("verified", |c: &Course| c.verified, Direction::Descending)
            .then_by_float("rating", |c: &Course| c.rating, Direction::Descending)
            .then_by("fee", |c: &Course| c.fee_gbp, Direction::Ascending);

        Ok(Self {
            catalogs,
            duration: Arc::new(duration_buckets()?),
            order,
        })
    }

    pub fn duration_band(&self, course: &Course) -> CourseLength {
        self.duration.label(f64::from(course.duration_months))
    }

    fn pipeline(&self, criteria: &CourseCriteria) -> FilterPipeline<Course> {
        FilterPipeline::new()
            .add_filter(
                TextQueryFilter::new("query", &criteria.query)
                    .field(|c: &Course| c.city.as_str())
                    .field(|c: &Course| c.university.as_str())
                    .field(|c: &Course| c.title.as_str()),
            )
            .add_filter_if_some(criteria.level, |level| {
                EqualsFilter::new("level", level, |c: &Course| c.level)
            })
            .add_filter_if_some(criteria.mode, |mode| {
                EqualsFilter::new("mode", mode, |c: &Course| c.mode)
            })
            .add_filter(ThresholdFilter::at_most(
                "budget",
                COURSE_BUDGET.clamp(criteria.budget),
                |c: &Course| c.fee_gbp,
            ))
            .add_filter_if_some(criteria.duration, |band| {
                BucketFilter::new("duration", self.duration.clone(), band, |c: &Course| {
                    f64::from(c.duration_months)
                })
            })
            .add_filter_if_some(criteria.start_by, |latest| {
                DateBoundFilter::on_or_before("start_by", latest, |c: &Course| c.start_date)
            })
    }
}

impl ListingSearch for CourseSearch {
    type Record = Course;
    type Criteria = CourseCriteria;

    fn page(&self) -> &'static str {
        "courses"
    }

    fn records(&self) -> &[Course] {
        &self.catalogs.courses
    }

    fn search(&self, criteria: &CourseCriteria) -> Vec<&Course> {
        let results = self.pipeline(criteria).apply_sorted(self.records(), &self.order);
        log_search(self.page(), self.records().len(), results.len());
        results
    }

    fn empty_state(&self) -> EmptyState {
        EMPTY_STATE
    }
}
