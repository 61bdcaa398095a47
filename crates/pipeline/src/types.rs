//! Display types produced by the pipeline.

use data_loader::MovieId;
use serde::{Deserialize, Serialize};

/// A movie ready to render: a title and a poster URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub title: String,
    pub poster: String,
}

impl DisplayItem {
    /// `None` unless `poster` is a non-empty URL
    pub fn new(title: impl Into<String>, poster: impl Into<String>) -> Option<Self> {
        let poster = poster.into();
        if poster.is_empty() {
            return None;
        }
        Some(Self {
            title: title.into(),
            poster,
        })
    }
}

/// What one batch of lookups produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Displayable movies, in input order
    pub items: Vec<DisplayItem>,
    /// Rows the batch was asked to resolve
    pub requested: usize,
    /// Lookups that failed outright, as opposed to finding no poster
    pub failed_lookups: usize,
}

impl BatchOutcome {
    /// True when every lookup in the batch got an answer
    pub fn is_complete(&self) -> bool {
        self.failed_lookups == 0
    }
}

/// An entry of the fixed showcase list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseMovie {
    pub id: MovieId,
    pub title: String,
}

impl ShowcaseMovie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// The three movies the showcase page shows (TMDB ids)
pub fn default_showcase() -> Vec<ShowcaseMovie> {
    vec![
        ShowcaseMovie::new(27205, "Inception"),
        ShowcaseMovie::new(603, "The Matrix"),
        ShowcaseMovie::new(157336, "Interstellar"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_item_requires_poster() {
        assert!(DisplayItem::new("X", "").is_none());

        let item = DisplayItem::new("X", "https://img/p.jpg").unwrap();
        assert_eq!(item.title, "X");
        assert_eq!(item.poster, "https://img/p.jpg");
    }

    #[test]
    fn test_default_showcase() {
        let ids: Vec<MovieId> = default_showcase().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![27205, 603, 157336]);
    }
}
