use std::net::SocketAddr;

use pipeline::{GenreQuery, ShowcaseMovie, default_showcase};
use poster_client::MissingPosterPolicy;

use crate::cache::QueryCache;

/// Settings for the two front-ends.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Rows per genre query when the request names no limit
    pub default_limit: usize,
    /// Upper bound on a requested limit
    pub max_limit: usize,
    /// Genre search drops movies without a poster
    pub genre_policy: MissingPosterPolicy,
    /// Showcase shows a placeholder instead
    pub showcase_policy: MissingPosterPolicy,
    pub showcase: Vec<ShowcaseMovie>,
    /// Memoize genre results for the life of the process
    pub cache_results: bool,
    /// Most distinct genre queries the result cache holds
    pub cache_capacity: usize,
}

impl ServerConfig {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            default_limit: GenreQuery::DEFAULT_LIMIT,
            max_limit: 50,
            genre_policy: MissingPosterPolicy::Drop,
            showcase_policy: MissingPosterPolicy::placeholder(),
            showcase: default_showcase(),
            cache_results: true,
            cache_capacity: QueryCache::DEFAULT_MAX_ENTRIES,
        }
    }

    /// The limit to use for a request, clamped to `max_limit`
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8501)))
    }
}
