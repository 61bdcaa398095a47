//! Poster resolution against the TMDB metadata API.
//!
//! This crate provides a Rust client for the movie details endpoint and
//! turns its answers into display-ready poster results. It handles:
//! - Building the request (`GET /movie/{id}?api_key=..&language=..`)
//! - Extracting `poster_path` and `title` from the JSON body
//! - Joining the poster path onto the image host
//! - Recovering from failures with absence markers
//!
//! The [`PosterLookup`] trait is the seam the rest of the workspace talks to,
//! so tests and front-ends can swap in their own resolver.

use async_trait::async_trait;

mod client;
mod error;
mod types;

pub use client::{
    DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_LANGUAGE, TmdbClient, TmdbConfig,
};
pub use error::{PosterClientError, Result};
pub use types::{
    MissingPosterPolicy, MovieMetadata, PLACEHOLDER_POSTER_URL, PosterResult, TITLE_NOT_AVAILABLE,
    poster_url,
};

/// Resolves a movie id to a display-ready poster.
///
/// Implementations never fail: a lookup that goes wrong yields
/// [`PosterResult::unavailable`].
#[async_trait]
pub trait PosterLookup: Send + Sync {
    async fn resolve(&self, movie_id: u32) -> PosterResult;
}
