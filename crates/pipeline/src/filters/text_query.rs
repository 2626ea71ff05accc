//! Free-text search across several record fields.
//!
//! A record matches when *any* of its searchable fields contains the query
//! as a case-insensitive substring.

use crate::traits::Filter;

/// Case-insensitive substring search over designated text fields.
///
/// ## Algorithm
/// 1. Trim and lowercase the query once, at construction
/// 2. An empty query matches every record
/// 3. Otherwise lowercase each searchable field and test `contains`
///
/// Collection fields (tags, perks) are searched element by element.
pub struct TextQueryFilter<R> {
    name: &'static str,
    needle: String,
    fields: Vec<fn(&R) -> &str>,
    collections: Vec<fn(&R) -> &[String]>,
}

impl<R> TextQueryFilter<R> {
    /// Create a new TextQueryFilter with no searchable fields yet.
    ///
    /// # Arguments
    /// * `name` - Filter name for logging
    /// * `query` - Raw user input; surrounding whitespace is ignored
    pub fn new(name: &'static str, query: &str) -> Self {
        Self {
            name,
            needle: query.trim().to_lowercase(),
            fields: Vec::new(),
            collections: Vec::new(),
        }
    }

    /// Search one more text field.
    pub fn field(mut self, accessor: fn(&R) -> &str) -> Self {
        self.fields.push(accessor);
        self
    }

    /// Search every element of a collection field.
    pub fn collection(mut self, accessor: fn(&R) -> &[String]) -> Self {
        self.collections.push(accessor);
        self
    }

    /// True when the query is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    fn hit(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}

impl<R> Filter<R> for TextQueryFilter<R> {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        if self.is_blank() {
            return true;
        }
        self.fields.iter().any(|field| self.hit(field(record)))
            || self
                .collections
                .iter()
                .any(|collection| collection(record).iter().any(|item| self.hit(item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Listing {
        name: String,
        city: String,
        tags: Vec<String>,
    }

    fn listing(name: &str, city: &str, tags: &[&str]) -> Listing {
        Listing {
            name: name.to_string(),
            city: city.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn filter(query: &str) -> TextQueryFilter<Listing> {
        TextQueryFilter::new("query", query)
            .field(|l: &Listing| l.name.as_str())
            .field(|l: &Listing| l.city.as_str())
            .collection(|l: &Listing| l.tags.as_slice())
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let record = listing("Hall", "Leeds", &[]);
        assert!(filter("").matches(&record));
        assert!(filter("   \t").matches(&record));
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let record = listing("Campus View Studios", "London", &[]);
        assert!(filter("london").matches(&record));
        assert!(filter("  LONDON ").matches(&record));
        assert!(filter("view").matches(&record));
        assert!(!filter("manchester").matches(&record));
    }

    #[test]
    fn test_query_searches_collection_elements() {
        let record = listing("Merit Award", "Oxford", &["STEM", "Merit"]);
        assert!(filter("stem").matches(&record));
        assert!(!filter("visa").matches(&record));
    }
}
