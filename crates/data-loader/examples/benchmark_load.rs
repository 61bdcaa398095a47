use data_loader::{Catalog, LoadOptions};
use std::time::Instant;

fn main() {
    let options = LoadOptions::new("data/movies.dat");

    println!("Loading movie catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load(&options).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let with_genres = catalog
        .records()
        .iter()
        .filter(|r| r.genres.is_some())
        .count();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!("With genres: {}", with_genres);
    println!("\nPerformance: {:.0} movies/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
}
