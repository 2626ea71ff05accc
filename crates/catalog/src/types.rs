//! Record shapes for every listing catalog.
//!
//! Records are plain data: created once when a catalog is loaded and never
//! mutated afterwards. Each shape carries a stable string id, descriptive
//! text used by free-text search, categorical fields drawn from the closed
//! vocabularies in [`crate::vocab`], and collection fields displayed as
//! "first few, +N more".

use crate::vocab::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Publication year of a ranking table.
pub type RankingYear = u16;

// =============================================================================
// Accommodation & courses
// =============================================================================

/// A student room or residence near a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub city: String,
    pub university_nearby: String,
    pub room_type: RoomType,
    /// Weekly rent in whole pounds.
    pub price_per_week: u32,
    pub distance_km: f64,
    /// Earliest move-in date.
    pub move_in: NaiveDate,
    pub verified: bool,
    /// Average review score, 0 to 5.
    pub rating: f64,
    #[serde(default)]
    pub perks: Vec<String>,
}

/// A taught course or short programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub city: String,
    pub university: String,
    pub level: CourseLevel,
    pub mode: StudyMode,
    /// Total fee in whole pounds.
    pub fee_gbp: u32,
    pub duration_months: u32,
    pub start_date: NaiveDate,
    pub verified: bool,
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

// =============================================================================
// Funding
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub country: Country,
    pub level: DegreeLevel,
    pub funding: FundingType,
    /// Free-form amount ("Up to £10,000"); not used for filtering.
    pub amount_text: String,
    pub deadline_text: String,
    pub deadline_window: DeadlineWindow,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub note: String,
}

/// An education loan product from a lending partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub id: String,
    pub lender: String,
    pub loan_type: LoanType,
    /// Largest amount the lender will finance, in pounds.
    pub max_amount_gbp: u32,
    /// Indicative starting APR, in percent.
    pub apr_from: f64,
    /// Longest repayment tenure offered.
    pub tenure_years: u32,
    pub processing_fee: String,
    pub moratorium: String,
    /// Study destinations the lender serves.
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

// =============================================================================
// Programmes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationProgram {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub country: Country,
    pub city: String,
    pub stream: FoundationStream,
    #[serde(default)]
    pub intakes: Vec<Intake>,
    pub duration: FoundationDuration,
    pub budget: TuitionBand,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhdProgram {
    pub id: String,
    pub university: String,
    pub title: String,
    pub country: Country,
    pub city: String,
    pub field: ResearchField,
    #[serde(default)]
    pub intakes: Vec<Intake>,
    pub funding: PhdFunding,
    pub mode: AttendanceMode,
    pub deadline_window: DeadlineWindow,
    pub deadline_text: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgraduateProgram {
    pub id: String,
    pub university: String,
    pub program: String,
    pub degree: MastersDegree,
    pub country: Country,
    pub city: String,
    pub stream: PostgraduateStream,
    #[serde(default)]
    pub intakes: Vec<Intake>,
    pub duration: PostgraduateDuration,
    pub tuition: TuitionBand,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndergraduateProgram {
    pub id: String,
    pub university: String,
    pub program: String,
    pub country: Country,
    pub city: String,
    pub stream: UndergraduateStream,
    #[serde(default)]
    pub intakes: Vec<Intake>,
    pub duration: UndergraduateDuration,
    pub tuition: TuitionBand,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

// =============================================================================
// Deadlines & rankings
// =============================================================================

/// A dated application, funding, or visa deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineItem {
    pub id: String,
    pub title: String,
    pub category: DeadlineCategory,
    pub country: Country,
    /// `None` means the deadline applies to every study level.
    #[serde(default)]
    pub level: Option<DegreeLevel>,
    pub date: NaiveDate,
    pub provider: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl DeadlineItem {
    /// True when the item is not tied to a single study level.
    pub fn applies_to_all_levels(&self) -> bool {
        self.level.is_none()
    }

    /// Level as a zero-or-one element slice, for membership filtering.
    pub fn level_slice(&self) -> &[DegreeLevel] {
        self.level.as_slice()
    }
}

/// A university with its positions in the published ranking tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub country: Country,
    #[serde(default)]
    pub city: Option<String>,
    /// Rank per table and year; absent entries mean "not ranked".
    #[serde(default)]
    pub ranks: BTreeMap<RankingSystem, BTreeMap<RankingYear, u32>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlight: String,
}

impl University {
    /// Position in one ranking table for one year, if listed.
    pub fn rank(&self, system: RankingSystem, year: RankingYear) -> Option<u32> {
        self.ranks.get(&system).and_then(|years| years.get(&year)).copied()
    }

    pub fn city_or_empty(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn university() -> University {
        let mut qs = BTreeMap::new();
        qs.insert(2025, 3);
        let mut ranks = BTreeMap::new();
        ranks.insert(RankingSystem::Qs, qs);
        University {
            id: "u1".to_string(),
            name: "University of Oxford".to_string(),
            country: Country::Uk,
            city: None,
            ranks,
            tags: vec![],
            highlight: String::new(),
        }
    }

    #[test]
    fn test_rank_lookup() {
        let uni = university();
        assert_eq!(uni.rank(RankingSystem::Qs, 2025), Some(3));
        assert_eq!(uni.rank(RankingSystem::Qs, 2026), None);
        assert_eq!(uni.rank(RankingSystem::The, 2025), None);
        assert_eq!(uni.city_or_empty(), "");
    }

    #[test]
    fn test_ranks_round_trip_through_json() {
        let uni = university();
        let json = serde_json::to_string(&uni).unwrap();
        assert!(json.contains("\"QS\":{\"2025\":3}"));
        let back: University = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uni);
    }

    #[test]
    fn test_deadline_level_defaults_to_any() {
        let json = r#"{
            "id": "d1",
            "title": "Visa window",
            "category": "Visa",
            "country": "Canada",
            "date": "2026-03-05",
            "provider": "Visa Guidance"
        }"#;
        let item: DeadlineItem = serde_json::from_str(json).unwrap();
        assert!(item.applies_to_all_levels());
        assert!(item.level_slice().is_empty());
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
    }
}
