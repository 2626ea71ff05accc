//! Example: Load and validate a catalog document
//!
//! Run with: cargo run --package catalog --example load_catalog [path/to/catalog.json]
//!
//! Without an argument the built-in listing data is used.

use catalog::Catalogs;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = std::env::args().nth(1);

    let start = Instant::now();
    let catalogs = match &path {
        Some(path) => {
            println!("Loading catalog from {path}...\n");
            Catalogs::load_from_file(Path::new(path)).expect("Failed to load catalog")
        }
        None => {
            println!("Loading built-in catalog...\n");
            Catalogs::builtin().expect("Failed to load built-in catalog")
        }
    };
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    for (name, count) in catalogs.counts() {
        println!("{name:>14}: {count}");
    }
    println!("{:>14}: {}", "total", catalogs.total());
}
