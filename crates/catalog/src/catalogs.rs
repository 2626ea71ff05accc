//! Catalog loading and validation.
//!
//! This module builds [`Catalogs`] either from the embedded built-in
//! dataset or from a JSON document on disk:
//! - Parse the document with serde (missing sections become empty)
//! - Validate identities and value ranges
//! - Log per-catalog record counts

use crate::error::{CatalogError, Result};
use crate::types::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_JSON: &str = include_str!("../data/builtin.json");

/// Anything stored in a catalog has a stable string identity.
pub trait Record {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_record!(
    Property,
    Course,
    Scholarship,
    LoanOffer,
    FoundationProgram,
    PhdProgram,
    PostgraduateProgram,
    UndergraduateProgram,
    DeadlineItem,
    University,
);

/// Every listing catalog, loaded once and shared read-only.
///
/// Vectors keep catalog order, which is the tie-break order of last resort
/// for every sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalogs {
    pub accommodation: Vec<Property>,
    pub courses: Vec<Course>,
    pub scholarships: Vec<Scholarship>,
    pub loans: Vec<LoanOffer>,
    pub foundation: Vec<FoundationProgram>,
    pub phd: Vec<PhdProgram>,
    pub postgraduate: Vec<PostgraduateProgram>,
    pub undergraduate: Vec<UndergraduateProgram>,
    pub deadlines: Vec<DeadlineItem>,
    pub universities: Vec<University>,
}

/// Record counts per catalog, in display order.
pub type CatalogCounts = Vec<(&'static str, usize)>;

impl Catalogs {
    /// The built-in listing data shipped with the site.
    pub fn builtin() -> Result<Self> {
        tracing::debug!("Loading built-in catalogs");
        Self::from_json_str(BUILTIN_JSON)
    }

    /// Load and validate a catalog document from a JSON file.
    ///
    /// Steps:
    /// 1. Read the whole file
    /// 2. Deserialize it (missing sections default to empty)
    /// 3. Validate identities and value ranges
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading catalogs from {:?}", path);

        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalogs = Self::from_json_str(&text)?;

        tracing::info!("Loaded {} records from {:?}", catalogs.total(), path);
        Ok(catalogs)
    }

    /// Parse and validate a catalog document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let catalogs: Catalogs = serde_json::from_str(text)?;
        catalogs.validate()?;
        for (name, count) in catalogs.counts() {
            tracing::debug!("{} catalog: {} records", name, count);
        }
        Ok(catalogs)
    }

    /// Serialize every catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check catalog invariants.
    ///
    /// Verifies:
    /// 1. Every id is non-empty and unique within its catalog
    /// 2. Ratings lie in 0 to 5
    /// 3. Ranking positions are at least 1
    /// 4. APRs and distances are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        check_ids("accommodation", &self.accommodation)?;
        check_ids("courses", &self.courses)?;
        check_ids("scholarships", &self.scholarships)?;
        check_ids("loans", &self.loans)?;
        check_ids("foundation", &self.foundation)?;
        check_ids("phd", &self.phd)?;
        check_ids("postgraduate", &self.postgraduate)?;
        check_ids("undergraduate", &self.undergraduate)?;
        check_ids("deadlines", &self.deadlines)?;
        check_ids("universities", &self.universities)?;

        for property in &self.accommodation {
            check_rating(&property.id, property.rating)?;
            check_non_negative("distance_km", &property.id, property.distance_km)?;
        }
        for course in &self.courses {
            check_rating(&course.id, course.rating)?;
        }
        for offer in &self.loans {
            check_non_negative("apr_from", &offer.id, offer.apr_from)?;
        }
        for university in &self.universities {
            for (system, years) in &university.ranks {
                for (year, rank) in years {
                    if *rank == 0 {
                        return Err(CatalogError::Validation(format!(
                            "{}: {} {} rank must be at least 1",
                            university.id, system, year
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Record counts per catalog.
    pub fn counts(&self) -> CatalogCounts {
        vec![
            ("accommodation", self.accommodation.len()),
            ("courses", self.courses.len()),
            ("scholarships", self.scholarships.len()),
            ("loans", self.loans.len()),
            ("foundation", self.foundation.len()),
            ("phd", self.phd.len()),
            ("postgraduate", self.postgraduate.len()),
            ("undergraduate", self.undergraduate.len()),
            ("deadlines", self.deadlines.len()),
            ("universities", self.universities.len()),
        ]
    }

    pub fn total(&self) -> usize {
        self.counts().iter().map(|(_, count)| count).sum()
    }
}

fn check_ids<R: Record>(catalog: &'static str, records: &[R]) -> Result<()> {
    let mut seen = HashSet::new();
    for (position, record) in records.iter().enumerate() {
        let id = record.id();
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId { catalog, position });
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                catalog,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_rating(id: &str, rating: f64) -> Result<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(CatalogError::InvalidValue {
            field: "rating",
            value: format!("{rating} ({id})"),
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, id: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::InvalidValue {
            field,
            value: format!("{value} ({id})"),
        });
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| CatalogError::InvalidDate {
        value: value.to_string(),
    })
}
