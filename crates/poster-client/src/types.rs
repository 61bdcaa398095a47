//! Poster lookup results and the policy applied when a poster is missing.

use serde::{Deserialize, Serialize};

/// Title shown when the metadata service knows the movie but not its title
pub const TITLE_NOT_AVAILABLE: &str = "Title not available";

/// Fallback image used by the showcase page
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/150";

/// The two fields we read from `GET /movie/{id}`; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovieMetadata {
    pub poster_path: Option<String>,
    pub title: Option<String>,
}

/// Display-ready outcome of one poster lookup.
///
/// `image_url == None` is a filtering signal, not an error: the movie is
/// left out of the rendered list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PosterResult {
    pub image_url: Option<String>,
    pub title: Option<String>,
}

impl PosterResult {
    /// Result of a failed lookup: nothing to show at all
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// True for the result of a failed lookup
    ///
    /// A successful lookup always carries a title (possibly the
    /// [`TITLE_NOT_AVAILABLE`] sentinel), even when the poster is missing.
    pub fn is_unavailable(&self) -> bool {
        self.image_url.is_none() && self.title.is_none()
    }

    pub fn from_metadata(metadata: MovieMetadata, image_base_url: &str) -> Self {
        let image_url = metadata
            .poster_path
            .as_deref()
            .and_then(|path| poster_url(image_base_url, path));
        let title = metadata
            .title
            .unwrap_or_else(|| TITLE_NOT_AVAILABLE.to_string());

        Self {
            image_url,
            title: Some(title),
        }
    }
}

/// Join the image host and a TMDB poster path (`"/abc.jpg"`)
///
/// Returns `None` for an empty path.
pub fn poster_url(image_base_url: &str, poster_path: &str) -> Option<String> {
    let path = poster_path.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(format!("{}/{}", image_base_url.trim_end_matches('/'), path))
}

/// What a front-end does with a movie that has no poster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MissingPosterPolicy {
    /// Leave the movie out
    #[default]
    Drop,
    /// Show it with this image instead
    Placeholder(String),
}

impl MissingPosterPolicy {
    pub fn placeholder() -> Self {
        MissingPosterPolicy::Placeholder(PLACEHOLDER_POSTER_URL.to_string())
    }

    /// Final image URL for a lookup, `None` meaning "do not display"
    pub fn apply(&self, image_url: Option<String>) -> Option<String> {
        match (image_url, self) {
            (Some(url), _) if !url.is_empty() => Some(url),
            (_, MissingPosterPolicy::Drop) => None,
            (_, MissingPosterPolicy::Placeholder(url)) => Some(url.clone()),
        }
    }
}
