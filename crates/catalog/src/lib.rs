//! # Catalog Crate
//!
//! This crate defines and loads the in-memory listing catalogs.
//!
//! ## Main Components
//!
//! - **vocab**: Closed vocabularies (room types, countries, intakes, ...)
//! - **types**: Record shapes (Property, Course, Scholarship, ...)
//! - **catalogs**: The `Catalogs` bundle, JSON loading, and validation
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalogs;
//! use std::path::Path;
//!
//! // Built-in listing data
//! let catalogs = Catalogs::builtin()?;
//!
//! // Or a custom document of the same shape
//! let catalogs = Catalogs::load_from_file(Path::new("catalog.json"))?;
//!
//! println!("{} properties", catalogs.accommodation.len());
//! ```

// Public modules
pub mod catalogs;
pub mod error;
pub mod types;
pub mod vocab;

// Re-export commonly used types for convenience
pub use catalogs::{parse_date, CatalogCounts, Catalogs, Record};
pub use error::{CatalogError, Result};
pub use types::{
    Course, DeadlineItem, FoundationProgram, LoanOffer, PhdProgram, PostgraduateProgram, Property,
    RankingYear, Scholarship, UndergraduateProgram, University,
};
pub use vocab::*;
