//! # Storefront
//!
//! One place that owns the catalogs and every listing page built over
//! them. Built once at start-up; bucket configurations are validated here,
//! so a `Storefront` that exists can always search.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use catalog::Catalogs;

use crate::accommodation::AccommodationSearch;
use crate::courses::CourseSearch;
use crate::deadlines::DeadlineSearch;
use crate::foundation::FoundationSearch;
use crate::loans::LoanSearch;
use crate::phd::PhdSearch;
use crate::postgraduate::PostgraduateSearch;
use crate::rankings::RankingSearch;
use crate::scholarships::ScholarshipSearch;
use crate::undergraduate::UndergraduateSearch;

/// Every listing page over one shared set of catalogs.
pub struct Storefront {
    catalogs: Arc<Catalogs>,
    pub accommodation: AccommodationSearch,
    pub courses: CourseSearch,
    pub scholarships: ScholarshipSearch,
    pub loans: LoanSearch,
    pub foundation: FoundationSearch,
    pub phd: PhdSearch,
    pub postgraduate: PostgraduateSearch,
    pub undergraduate: UndergraduateSearch,
    pub deadlines: DeadlineSearch,
    pub rankings: RankingSearch,
}

impl Storefront {
    /// Build every page over `catalogs`.
    pub fn new(catalogs: Arc<Catalogs>) -> Result<Self> {
        let accommodation = AccommodationSearch::new(catalogs.clone())
            .context("Failed to configure accommodation distance bands")?;
        let courses = CourseSearch::new(catalogs.clone())
            .context("Failed to configure course duration bands")?;

        let storefront = Self {
            accommodation,
            courses,
            scholarships: ScholarshipSearch::new(catalogs.clone()),
            loans: LoanSearch::new(catalogs.clone()),
            foundation: FoundationSearch::new(catalogs.clone()),
            phd: PhdSearch::new(catalogs.clone()),
            postgraduate: PostgraduateSearch::new(catalogs.clone()),
            undergraduate: UndergraduateSearch::new(catalogs.clone()),
            deadlines: DeadlineSearch::new(catalogs.clone()),
            rankings: RankingSearch::new(catalogs.clone()),
            catalogs,
        };

        info!(records = storefront.catalogs.total(), "Storefront ready");
        Ok(storefront)
    }

    /// Storefront over the built-in datasets.
    pub fn builtin() -> Result<Self> {
        let catalogs = Catalogs::builtin().context("Failed to parse built-in catalogs")?;
        Self::new(Arc::new(catalogs))
    }

    /// Storefront over a JSON catalog file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let catalogs = Catalogs::load_from_file(path)
            .with_context(|| format!("Failed to load catalog file {}", path.display()))?;
        info!(path = %path.display(), elapsed = ?start.elapsed(), "Catalog file loaded");
        Self::new(Arc::new(catalogs))
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }
}
