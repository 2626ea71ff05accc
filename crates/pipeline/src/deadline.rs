//! Deadline status classification.
//!
//! Maps a target date to one of four statuses relative to "today":
//!
//! | days until target | status        |
//! |-------------------|---------------|
//! | `< 0`             | Closed        |
//! | `0`               | Closing today |
//! | `1..=14`          | Due soon      |
//! | `> 14`            | Open          |
//!
//! Both sides are calendar days, so two timestamps on the same day always
//! produce a difference of zero regardless of time-of-day.

use chrono::{DateTime, NaiveDate, TimeZone};
use std::fmt;

/// Last day count (inclusive) that still counts as "Due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 14;

/// The closed set of deadline statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeadlineStatus {
    Open,
    DueSoon,
    ClosingToday,
    Closed,
}

impl DeadlineStatus {
    pub const ALL: [DeadlineStatus; 4] = [
        DeadlineStatus::Open,
        DeadlineStatus::DueSoon,
        DeadlineStatus::ClosingToday,
        DeadlineStatus::Closed,
    ];

    /// Display string shown to users.
    pub fn label(self) -> &'static str {
        match self {
            DeadlineStatus::Open => "Open",
            DeadlineStatus::DueSoon => "Due soon",
            DeadlineStatus::ClosingToday => "Closing today",
            DeadlineStatus::Closed => "Closed",
        }
    }

    /// Parse a display string (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status of a single deadline plus the signed day difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineInfo {
    pub status: DeadlineStatus,
    /// `target - today` in whole days; negative once closed.
    pub days: i64,
}

impl DeadlineInfo {
    /// Days past the deadline, if it has closed.
    pub fn days_overdue(&self) -> Option<u64> {
        (self.days < 0).then(|| self.days.unsigned_abs())
    }

    /// Days left before the deadline, if still open.
    pub fn days_remaining(&self) -> Option<u64> {
        (self.days >= 0).then(|| self.days.unsigned_abs())
    }

    /// Short human-readable countdown.
    pub fn day_text(&self) -> String {
        match self.status {
            DeadlineStatus::Closed => format!("{} day(s) ago", self.days.unsigned_abs()),
            DeadlineStatus::ClosingToday => "Today".to_string(),
            DeadlineStatus::DueSoon | DeadlineStatus::Open => format!("{} day(s) left", self.days),
        }
    }
}

/// Classify `target` relative to `today`.
pub fn classify(target: NaiveDate, today: NaiveDate) -> DeadlineInfo {
    let days = target.signed_duration_since(today).num_days();
    let status = match days {
        d if d < 0 => DeadlineStatus::Closed,
        0 => DeadlineStatus::ClosingToday,
        d if d <= DUE_SOON_WINDOW_DAYS => DeadlineStatus::DueSoon,
        _ => DeadlineStatus::Open,
    };
    DeadlineInfo { status, days }
}

/// Classify `target` relative to a timestamp, truncated to its calendar day.
pub fn classify_at<Tz: TimeZone>(target: NaiveDate, now: &DateTime<Tz>) -> DeadlineInfo {
    classify(target, now.date_naive())
}

/// Per-status totals for a whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub open: usize,
    pub due_soon: usize,
    pub closing_today: usize,
    pub closed: usize,
}

impl StatusCounts {
    /// Tally the status of every date against `today`.
    pub fn tally(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> Self {
        let mut counts = Self::default();
        for date in dates {
            match classify(date, today).status {
                DeadlineStatus::Open => counts.open += 1,
                DeadlineStatus::DueSoon => counts.due_soon += 1,
                DeadlineStatus::ClosingToday => counts.closing_today += 1,
                DeadlineStatus::Closed => counts.closed += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.open + self.due_soon + self.closing_today + self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_boundaries() {
        let today = date(2026, 2, 20);

        let info = classify(today + Duration::days(14), today);
        assert_eq!(info.status, DeadlineStatus::DueSoon);
        assert_eq!(info.days, 14);

        let info = classify(today + Duration::days(15), today);
        assert_eq!(info.status, DeadlineStatus::Open);

        let info = classify(today, today);
        assert_eq!(info.status, DeadlineStatus::ClosingToday);
        assert_eq!(info.days, 0);

        let info = classify(today - Duration::days(1), today);
        assert_eq!(info.status, DeadlineStatus::Closed);
        assert_eq!(info.days_overdue(), Some(1));
    }

    #[test]
    fn test_fixed_date_scenario() {
        let today = date(2026, 2, 20);

        let soon = classify(date(2026, 2, 28), today);
        assert_eq!(soon.status, DeadlineStatus::DueSoon);
        assert_eq!(soon.days, 8);
        assert_eq!(soon.day_text(), "8 day(s) left");

        let closed = classify(date(2026, 1, 31), today);
        assert_eq!(closed.status, DeadlineStatus::Closed);
        assert_eq!(closed.days, -20);
        assert_eq!(closed.days_overdue(), Some(20));
        assert_eq!(closed.days_remaining(), None);
        assert_eq!(closed.day_text(), "20 day(s) ago");
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let early = tz.with_ymd_and_hms(2026, 2, 20, 0, 0, 1).unwrap();
        let late = tz.with_ymd_and_hms(2026, 2, 20, 23, 59, 59).unwrap();

        assert_eq!(classify_at(date(2026, 2, 20), &early).days, 0);
        assert_eq!(classify_at(date(2026, 2, 20), &late).days, 0);
        assert_eq!(classify_at(date(2026, 2, 21), &late).status, DeadlineStatus::DueSoon);

        // Any clock works, the calendar day is what matters
        let _ = classify_at(date(2030, 1, 1), &Utc::now());
    }

    #[test]
    fn test_status_labels_round_trip() {
        for status in DeadlineStatus::ALL {
            assert_eq!(DeadlineStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(DeadlineStatus::from_label("due SOON"), Some(DeadlineStatus::DueSoon));
        assert_eq!(DeadlineStatus::from_label("All"), None);
    }

    #[test]
    fn test_status_counts() {
        let today = date(2026, 2, 20);
        let counts = StatusCounts::tally(
            vec![date(2026, 2, 28), date(2026, 1, 31), date(2026, 2, 20), date(2026, 4, 1)],
            today,
        );

        assert_eq!(counts.open, 1);
        assert_eq!(counts.due_soon, 1);
        assert_eq!(counts.closing_today, 1);
        assert_eq!(counts.closed, 1);
        assert_eq!(counts.total(), 4);
    }
}
