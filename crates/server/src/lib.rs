//! Web front-ends for browsing movie posters.
//!
//! Two front-ends share one router:
//! - **Genre search** (`/`, `/api/movies`): type a genre, see up to N posters;
//!   movies without a poster are left out.
//! - **Showcase** (`/showcase`, `/api/showcase`): a fixed list of movies;
//!   a missing poster is replaced by a placeholder image.

pub mod cache;
pub mod config;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

pub use cache::QueryCache;
pub use config::ServerConfig;
pub use router::create_router;
pub use state::AppState;

/// Serve the front-ends on an already bound listener
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = create_router(state);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Bind `state.config.bind_addr` and serve until the process stops
pub async fn run_server(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "Serving {} movies on http://{}",
        state.catalog.len(),
        listener.local_addr()?
    );
    serve(listener, state).await
}
