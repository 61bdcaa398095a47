//! Resolve posters for a list of movies.
//!
//! Lookups run one after another in input order, each awaited before the
//! next is issued. A movie whose poster cannot be resolved (after the
//! missing-poster policy) is dropped without surfacing an error.

use data_loader::{Catalog, CatalogRecord};
use poster_client::{MissingPosterPolicy, PosterLookup};
use tracing::debug;

use crate::genre_filter::filter_by_genre;
use crate::types::{BatchOutcome, DisplayItem, ShowcaseMovie};

/// Resolve each record's poster and keep the displayable ones
///
/// The title is the one returned by the lookup, or the catalog title when
/// the lookup returned none.
pub async fn resolve_display_items<L>(
    lookup: &L,
    records: &[&CatalogRecord],
    policy: &MissingPosterPolicy,
) -> Vec<DisplayItem>
where
    L: PosterLookup + ?Sized,
{
    resolve_batch(lookup, records, policy).await.items
}

/// Same as [`resolve_display_items`], also counting failed lookups
pub async fn resolve_batch<L>(
    lookup: &L,
    records: &[&CatalogRecord],
    policy: &MissingPosterPolicy,
) -> BatchOutcome
where
    L: PosterLookup + ?Sized,
{
    let mut outcome = BatchOutcome {
        items: Vec::with_capacity(records.len()),
        requested: records.len(),
        failed_lookups: 0,
    };
    for record in records {
        let result = lookup.resolve(record.id).await;
        if result.is_unavailable() {
            outcome.failed_lookups += 1;
        }
        let Some(poster) = policy.apply(result.image_url) else {
            debug!(movie_id = record.id, "No poster, dropping movie");
            continue;
        };
        let title = result.title.unwrap_or_else(|| record.title.clone());
        outcome.items.extend(DisplayItem::new(title, poster));
    }
    outcome
}

/// Genre filter followed by poster resolution
pub async fn search_genre<L>(
    catalog: &Catalog,
    lookup: &L,
    genre: &str,
    limit: usize,
    policy: &MissingPosterPolicy,
) -> Vec<DisplayItem>
where
    L: PosterLookup + ?Sized,
{
    search_genre_batch(catalog, lookup, genre, limit, policy).await.items
}

/// Genre search that reports how the lookups went
pub async fn search_genre_batch<L>(
    catalog: &Catalog,
    lookup: &L,
    genre: &str,
    limit: usize,
    policy: &MissingPosterPolicy,
) -> BatchOutcome
where
    L: PosterLookup + ?Sized,
{
    let selected = filter_by_genre(catalog, genre, limit);
    let outcome = resolve_batch(lookup, &selected, policy).await;
    debug!(
        "Genre '{}': {} matched, {} with posters, {} failed",
        genre,
        outcome.requested,
        outcome.items.len(),
        outcome.failed_lookups
    );
    outcome
}

/// Resolve the fixed showcase list
///
/// Titles come from the list itself; only the poster is looked up.
pub async fn resolve_showcase<L>(
    lookup: &L,
    movies: &[ShowcaseMovie],
    policy: &MissingPosterPolicy,
) -> Vec<DisplayItem>
where
    L: PosterLookup + ?Sized,
{
    let mut items = Vec::with_capacity(movies.len());
    for movie in movies {
        let result = lookup.resolve(movie.id).await;
        match policy.apply(result.image_url) {
            Some(poster) => items.extend(DisplayItem::new(movie.title.clone(), poster)),
            None => debug!(movie_id = movie.id, "No poster, dropping showcase movie"),
        }
    }
    items
}
