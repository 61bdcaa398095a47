//! Genre filtering and poster resolution for the movie front-ends.
//!
//! This crate provides:
//! - `filter_by_genre` / `GenreQuery` for selecting catalog rows
//! - `resolve_display_items` for turning rows into renderable items, and
//!   `resolve_batch` when the caller also needs the failed-lookup count
//! - `search_genre` and `resolve_showcase`, the two front-end flows
//!
//! ## Architecture
//! A request is processed in stages:
//! 1. The genre filter selects up to `limit` catalog rows, in table order
//! 2. Each selected row is resolved through a [`PosterLookup`], one at a time
//! 3. The front-end's [`MissingPosterPolicy`] decides what happens to rows
//!    without a poster
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::search_genre;
//! use poster_client::{MissingPosterPolicy, TmdbClient, TmdbConfig};
//!
//! let client = TmdbClient::new(TmdbConfig::new(api_key))?;
//! let items = search_genre(&catalog, &client, "comedy", 8, &MissingPosterPolicy::Drop).await;
//! ```
//!
//! [`PosterLookup`]: poster_client::PosterLookup
//! [`MissingPosterPolicy`]: poster_client::MissingPosterPolicy

pub mod batch;
pub mod genre_filter;
pub mod types;

// Re-export main types
pub use batch::{
    resolve_batch, resolve_display_items, resolve_showcase, search_genre, search_genre_batch,
};
pub use genre_filter::{GenreQuery, filter_by_genre};
pub use types::{BatchOutcome, DisplayItem, ShowcaseMovie, default_showcase};
