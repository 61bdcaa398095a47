use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Genre search front-end
pub fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::genre_page))
        .route("/api/movies", get(handlers::list_movies))
}

/// Fixed-list showcase front-end
pub fn showcase_routes() -> Router<AppState> {
    Router::new()
        .route("/showcase", get(handlers::showcase_page))
        .route("/api/showcase", get(handlers::list_showcase))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(genre_routes())
        .merge(showcase_routes())
        .with_state(state)
}
