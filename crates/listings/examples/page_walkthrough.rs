//! Example: Walk through a few storefront pages
//!
//! Run with: cargo run --package listings --example page_walkthrough
//!
//! This example shows how to:
//! 1. Build the storefront over the built-in catalogs
//! 2. Search accommodation with a query and budget
//! 3. Classify deadlines against a fixed day
//! 4. Read a rankings table for one system and year

use chrono::NaiveDate;
use listings::accommodation::AccommodationCriteria;
use listings::deadlines::{status_of, DeadlineCriteria};
use listings::format::per_week;
use listings::rankings::RankingCriteria;
use listings::{ListingSearch, Storefront};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== Storefront Walkthrough ===\n");

    let start = Instant::now();
    let storefront = Storefront::builtin()?;
    println!("Built storefront in {:?}\n", start.elapsed());

    // Accommodation near London within £400 a week
    let criteria = AccommodationCriteria {
        query: "london".to_string(),
        budget: 400,
        ..Default::default()
    };
    let start = Instant::now();
    let rooms = storefront.accommodation.search(&criteria);
    println!("Accommodation matching \"london\" ({:?}):", start.elapsed());
    for property in &rooms {
        println!(
            "  {} · {} · {}",
            property.name,
            property.room_type,
            per_week(property.price_per_week)
        );
    }

    // Deadlines as seen on a fixed day
    let today = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap_or_default();
    let counts = storefront.deadlines.counts(today);
    println!(
        "\nDeadlines on {today}: {} open, {} due soon, {} closing today, {} closed",
        counts.open, counts.due_soon, counts.closing_today, counts.closed
    );
    for item in storefront.deadlines.search(&DeadlineCriteria::as_of(today)) {
        let info = status_of(item, today);
        println!("  [{}] {} ({})", info.status, item.title, info.day_text());
    }

    // Default rankings table
    let criteria = RankingCriteria::default();
    println!("\n{} {} rankings:", criteria.system, criteria.year);
    for university in storefront.rankings.search(&criteria).iter().take(5) {
        if let Some(rank) = university.rank(criteria.system, criteria.year) {
            println!("  #{rank} {}", university.name);
        }
    }

    Ok(())
}
