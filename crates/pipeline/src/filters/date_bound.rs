//! "By this date" filter for temporal fields.

use crate::traits::Filter;
use chrono::NaiveDate;

/// Keeps records whose date falls on or before the bound.
///
/// Dates are compared as calendar dates, so no time-of-day or timezone
/// can shift the result.
pub struct DateBoundFilter<R> {
    name: &'static str,
    latest: NaiveDate,
    accessor: fn(&R) -> NaiveDate,
}

impl<R> DateBoundFilter<R> {
    /// Create a new DateBoundFilter.
    ///
    /// # Arguments
    /// * `name` - Filter name for logging
    /// * `latest` - Last acceptable date (inclusive)
    /// * `accessor` - Reads the date field from a record
    pub fn on_or_before(name: &'static str, latest: NaiveDate, accessor: fn(&R) -> NaiveDate) -> Self {
        Self {
            name,
            latest,
            accessor,
        }
    }
}

impl<R> Filter<R> for DateBoundFilter<R> {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        (self.accessor)(record) <= self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Room {
        move_in: NaiveDate,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_on_or_before() {
        let filter = DateBoundFilter::on_or_before("move_in", date(2026, 3, 1), |r: &Room| r.move_in);

        assert!(filter.matches(&Room { move_in: date(2026, 2, 15) }));
        assert!(filter.matches(&Room { move_in: date(2026, 3, 1) }));
        assert!(!filter.matches(&Room { move_in: date(2026, 3, 2) }));
    }
}
