use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use pipeline::DisplayItem;
use serde::Deserialize;

use crate::render;
use crate::state::AppState;

/// Query string of the genre endpoints
#[derive(Debug, Default, Deserialize)]
pub struct GenreParams {
    pub genre: Option<String>,
    pub limit: Option<usize>,
}

impl GenreParams {
    /// The trimmed genre, `None` when absent or blank
    fn genre(&self) -> Option<&str> {
        self.genre.as_deref().map(str::trim).filter(|g| !g.is_empty())
    }
}

/// Genre search page: `GET /?genre=action&limit=8`
pub async fn genre_page(
    State(state): State<AppState>,
    Query(params): Query<GenreParams>,
) -> Html<String> {
    let Some(genre) = params.genre() else {
        return Html(render::genre_page(None, &[]));
    };
    let limit = state.config.effective_limit(params.limit);
    let items = state.search(genre, limit).await;
    Html(render::genre_page(Some(genre), &items))
}

/// Genre search as JSON: `GET /api/movies?genre=action`
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<GenreParams>,
) -> Json<Vec<DisplayItem>> {
    let Some(genre) = params.genre() else {
        return Json(Vec::new());
    };
    let limit = state.config.effective_limit(params.limit);
    let items = state.search(genre, limit).await;
    Json((*items).clone())
}

/// Showcase page: `GET /showcase`
pub async fn showcase_page(State(state): State<AppState>) -> Html<String> {
    let items = state.showcase().await;
    Html(render::showcase_page(&items))
}

/// Showcase as JSON: `GET /api/showcase`
pub async fn list_showcase(State(state): State<AppState>) -> Json<Vec<DisplayItem>> {
    Json(state.showcase().await)
}
