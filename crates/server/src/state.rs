use std::sync::Arc;

use data_loader::Catalog;
use pipeline::{DisplayItem, resolve_showcase, search_genre_batch};
use poster_client::PosterLookup;
use tracing::{debug, info};

use crate::cache::QueryCache;
use crate::config::ServerConfig;

/// Shared, read-only state handed to every request.
///
/// The catalog is fully loaded before the state is built.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub posters: Arc<dyn PosterLookup>,
    pub config: Arc<ServerConfig>,
    pub results: Arc<QueryCache>,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        posters: Arc<dyn PosterLookup>,
        config: ServerConfig,
    ) -> Self {
        Self {
            catalog,
            posters,
            results: Arc::new(QueryCache::new(config.cache_capacity)),
            config: Arc::new(config),
        }
    }

    /// Genre search with the genre front-end's policy, memoized if enabled
    ///
    /// Only complete results for genres that matched at least one catalog row
    /// are memoized, so a failed lookup is retried by the next request.
    pub async fn search(&self, genre: &str, limit: usize) -> Arc<Vec<DisplayItem>> {
        if self.config.cache_results {
            if let Some(items) = self.results.get(genre, limit).await {
                debug!("Cache hit for genre '{}' (limit {})", genre, limit);
                return items;
            }
        }

        let outcome = search_genre_batch(
            &self.catalog,
            self.posters.as_ref(),
            genre,
            limit,
            &self.config.genre_policy,
        )
        .await;
        info!(
            "Genre '{}' resolved {} movies with posters ({} lookups failed)",
            genre,
            outcome.items.len(),
            outcome.failed_lookups
        );

        let cacheable = outcome.requested > 0 && outcome.is_complete();
        let items = Arc::new(outcome.items);
        if self.config.cache_results && cacheable {
            self.results.insert(genre, limit, items.clone()).await;
        }
        items
    }

    /// The fixed showcase list with the showcase policy
    pub async fn showcase(&self) -> Vec<DisplayItem> {
        resolve_showcase(
            self.posters.as_ref(),
            &self.config.showcase,
            &self.config.showcase_policy,
        )
        .await
    }
}
