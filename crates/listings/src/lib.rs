//! # Listings Crate
//!
//! One search configuration per listing page of the storefront, built on
//! the generic `pipeline` engine over the `catalog` datasets.
//!
//! ## Pages
//!
//! | module          | catalog          | sort modes                     |
//! |-----------------|------------------|--------------------------------|
//! | `accommodation` | properties       | Recommended                    |
//! | `courses`       | courses          | Recommended                    |
//! | `scholarships`  | scholarships     | Best match, A-Z                |
//! | `loans`         | loan offers      | Lowest APR                     |
//! | `foundation`    | foundation       | Best match, A-Z                |
//! | `phd`           | PhD programmes   | Best match, Soonest, A-Z       |
//! | `postgraduate`  | master's         | Best match, A-Z                |
//! | `undergraduate` | bachelor's       | Best match, A-Z                |
//! | `deadlines`     | deadlines        | Soonest, Latest                |
//! | `rankings`      | universities     | Rank ↑, Rank ↓, Name A-Z       |
//!
//! Each page exposes an immutable `*Criteria` value whose `Default` is the
//! page's initial state, and a `*Search` implementing [`ListingSearch`].
//!
//! ## Example Usage
//!
//! ```ignore
//! use listings::{Storefront, ListingSearch};
//! use listings::accommodation::AccommodationCriteria;
//!
//! let storefront = Storefront::builtin()?;
//! let criteria = AccommodationCriteria {
//!     query: "london".to_string(),
//!     ..Default::default()
//! };
//! for property in storefront.accommodation.search(&criteria) {
//!     println!("{} {}", property.name, listings::format::per_week(property.price_per_week));
//! }
//! ```

pub mod accommodation;
pub mod courses;
pub mod deadlines;
pub mod enquiry;
pub mod format;
pub mod foundation;
pub mod loans;
pub mod phd;
pub mod postgraduate;
pub mod rankings;
pub mod scholarships;
pub mod search;
pub mod slider;
pub mod storefront;
pub mod undergraduate;

// Re-export commonly used types
pub use enquiry::{EnquiryForm, EnquirySink, FormErrors, UiOnlySink};
pub use format::{EmptyState, Preview};
pub use search::{ListingSearch, MatchSort};
pub use slider::Slider;
pub use storefront::Storefront;
