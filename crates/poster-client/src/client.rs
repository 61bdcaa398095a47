use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::PosterLookup;
use crate::error::{PosterClientError, Result};
use crate::types::{MovieMetadata, PosterResult};

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Connection settings for the TMDB API.
///
/// The API key has no default; it must come from the caller's configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub image_base_url: String,
    pub language: String,
    /// Request timeout; `None` keeps reqwest's default
    pub timeout: Option<Duration>,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the TMDB movie details endpoint.
pub struct TmdbClient {
    client: Client,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Build a client with its own reqwest `Client`
    pub fn new(config: TmdbConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(builder.build()?, config)
    }

    /// Build a client around an existing reqwest `Client`
    pub fn with_client(client: Client, config: TmdbConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(PosterClientError::InvalidConfig(
                "TMDB API key is empty".to_string(),
            ));
        }
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    /// Get movie details
    ///
    /// GET /movie/{movie_id}
    ///
    /// Unlike [`PosterLookup::resolve`], this keeps "no poster" and "lookup
    /// failed" apart: the first is `Ok` with `poster_path == None`.
    pub async fn fetch_movie(&self, movie_id: u32) -> Result<MovieMetadata> {
        let url = self.url(&format!("/movie/{}", movie_id));
        debug!(movie_id, "Fetching movie metadata");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PosterClientError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PosterLookup for TmdbClient {
    async fn resolve(&self, movie_id: u32) -> PosterResult {
        match self.fetch_movie(movie_id).await {
            Ok(metadata) => PosterResult::from_metadata(metadata, &self.config.image_base_url),
            Err(e) => {
                warn!(movie_id, error = %e, "Poster lookup failed");
                PosterResult::unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        let result = TmdbClient::new(TmdbConfig::new("  "));
        assert!(matches!(result, Err(PosterClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_url_building() {
        let client = TmdbClient::new(
            TmdbConfig::new("key").with_api_base_url("http://127.0.0.1:9999/3/"),
        )
        .unwrap();

        assert_eq!(client.url("/movie/603"), "http://127.0.0.1:9999/3/movie/603");
    }

    #[test]
    fn test_config_defaults() {
        let config = TmdbConfig::new("key");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.image_base_url, DEFAULT_IMAGE_BASE_URL);
        assert_eq!(config.language, "en-US");
        assert!(config.timeout.is_none());
    }
}
