//! Multi-key, stable ordering for filtered results.
//!
//! A Comparator is an ordered list of tie-break keys. The first key that
//! distinguishes two records decides their order; when every key ties, the
//! records keep their input order (the underlying sort is stable).

use std::cmp::Ordering;

/// Sort direction for a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

type KeyFn<R> = Box<dyn Fn(&R, &R) -> Ordering + Send + Sync>;

struct SortKey<R> {
    name: &'static str,
    compare: KeyFn<R>,
}

/// Ordered list of (key, direction) tie-breaks.
///
/// ## Usage
/// ```ignore
/// // verified first, then rating, then cheaper
/// let order = Comparator::new()
///     .then_by("verified", |p: &Property| p.verified, Direction::Descending)
///     .then_by_float("rating", |p: &Property| p.rating, Direction::Descending)
///     .then_by("price", |p: &Property| p.price_per_week, Direction::Ascending);
/// ```
pub struct Comparator<R> {
    keys: Vec<SortKey<R>>,
}

impl<R: 'static> Comparator<R> {
    /// A comparator with no keys keeps input order.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Add a tie-break on any totally ordered key.
    pub fn then_by<K, F>(mut self, name: &'static str, key: F, direction: Direction) -> Self
    where
        K: Ord + 'static,
        F: Fn(&R) -> K + Send + Sync + 'static,
    {
        self.keys.push(SortKey {
            name,
            compare: Box::new(move |a: &R, b: &R| direction.apply(key(a).cmp(&key(b)))),
        });
        self
    }

    /// Add a tie-break on a floating point key (ratings, APRs).
    ///
    /// Uses `f64::total_cmp`, so the order is total even for NaN.
    pub fn then_by_float<F>(mut self, name: &'static str, key: F, direction: Direction) -> Self
    where
        F: Fn(&R) -> f64 + Send + Sync + 'static,
    {
        self.keys.push(SortKey {
            name,
            compare: Box::new(move |a: &R, b: &R| direction.apply(key(a).total_cmp(&key(b)))),
        });
        self
    }

    /// Add an alphabetical tie-break.
    ///
    /// Letters compare case-insensitively first; the exact text breaks
    /// any remaining tie so "a" and "A" still have a fixed order.
    ///
    /// The order is by Unicode code point, not locale collation: uppercase
    /// wins a case-only tie ("Alpha" before "alpha") and accented letters
    /// sort after "z" rather than beside their base letter.
    pub fn then_by_text(mut self, name: &'static str, key: fn(&R) -> &str, direction: Direction) -> Self {
        self.keys.push(SortKey {
            name,
            compare: Box::new(move |a: &R, b: &R| direction.apply(compare_text(key(a), key(b)))),
        });
        self
    }

    /// Names of the keys, in priority order.
    pub fn key_names(&self) -> Vec<&'static str> {
        self.keys.iter().map(|k| k.name).collect()
    }

    /// Compare two records key by key.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        self.keys
            .iter()
            .map(|key| (key.compare)(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable in-place sort of filtered results.
    pub fn sort(&self, records: &mut [&R]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl<R: 'static> Default for Comparator<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased code point order, then exact code point order.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
