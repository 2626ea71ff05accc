//! Display formatting shared by every listing page.

use serde::Serialize;
use std::fmt;

/// Whole pounds with thousands separators: `gbp(12500) == "£12,500"`.
pub fn gbp(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('£');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Weekly rent: `per_week(285) == "£285/wk"`.
pub fn per_week(amount: u32) -> String {
    format!("{}/wk", gbp(amount))
}

/// `1 option`, `3 options`.
pub fn plural(noun: &str, count: usize) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// "First N items, +M more" truncation for badges and chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview<'a> {
    pub shown: Vec<&'a str>,
    pub hidden: usize,
}

impl<'a> Preview<'a> {
    /// Number of perks, tags, or highlights shown per card.
    pub const DEFAULT_LIMIT: usize = 3;
    /// Number of countries shown per loan offer.
    pub const COUNTRY_LIMIT: usize = 4;

    pub fn new<I>(items: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut shown = Vec::new();
        let mut hidden = 0;
        for item in items {
            if shown.len() < limit {
                shown.push(item);
            } else {
                hidden += 1;
            }
        }
        Self { shown, hidden }
    }

    /// Preview of a string collection with the default limit.
    pub fn of(items: &'a [String]) -> Self {
        Self::new(items.iter().map(String::as_str), Self::DEFAULT_LIMIT)
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shown.join(", "))?;
        if self.hidden > 0 {
            write!(f, " +{} more", self.hidden)?;
        }
        Ok(())
    }
}

/// What a page shows when nothing survives the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbp_thousands_separators() {
        assert_eq!(gbp(0), "£0");
        assert_eq!(gbp(950), "£950");
        assert_eq!(gbp(1200), "£1,200");
        assert_eq!(gbp(12500), "£12,500");
        assert_eq!(gbp(120000), "£120,000");
        assert_eq!(gbp(1234567), "£1,234,567");
    }

    #[test]
    fn test_per_week() {
        assert_eq!(per_week(285), "£285/wk");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural("option", 1), "1 option");
        assert_eq!(plural("option", 0), "0 options");
        assert_eq!(plural("result", 4), "4 results");
    }

    #[test]
    fn test_preview_truncates() {
        let countries = ["UK", "USA", "Canada", "Australia", "Germany", "Ireland"];
        let preview = Preview::new(countries, Preview::COUNTRY_LIMIT);
        assert_eq!(preview.shown, vec!["UK", "USA", "Canada", "Australia"]);
        assert_eq!(preview.hidden, 2);
        assert_eq!(preview.to_string(), "UK, USA, Canada, Australia +2 more");

        let perks = vec!["Wi-Fi".to_string(), "Gym".to_string()];
        assert_eq!(Preview::of(&perks).to_string(), "Wi-Fi, Gym");
    }
}
