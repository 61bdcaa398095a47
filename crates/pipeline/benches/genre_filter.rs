//! Benchmarks for the genre filter
//!
//! Run with: cargo bench --package pipeline

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{Catalog, CatalogRecord};
use pipeline::filter_by_genre;

const GENRES: [&str; 6] = [
    "Action|Adventure",
    "Comedy|Romance",
    "Drama",
    "Animation|Children's|Comedy",
    "Horror|Sci-Fi",
    "Documentary",
];

/// Synthetic catalog the size of MovieLens 1M
fn build_catalog() -> Catalog {
    Catalog::from_records((1..=3883u32).map(|id| {
        CatalogRecord::new(
            id,
            format!("Movie {id}"),
            Some(GENRES[id as usize % GENRES.len()]),
        )
    }))
    .expect("ids are unique")
}

fn bench_common_genre(c: &mut Criterion) {
    let catalog = build_catalog();

    c.bench_function("filter_by_genre_common", |b| {
        b.iter(|| {
            let selected = filter_by_genre(&catalog, black_box("comedy"), black_box(8));
            black_box(selected.len())
        })
    });
}

fn bench_no_match(c: &mut Criterion) {
    let catalog = build_catalog();

    // Worst case: scans the whole table
    c.bench_function("filter_by_genre_no_match", |b| {
        b.iter(|| {
            let selected = filter_by_genre(&catalog, black_box("western"), black_box(8));
            black_box(selected.len())
        })
    });
}

criterion_group!(benches, bench_common_genre, bench_no_match);
criterion_main!(benches);
