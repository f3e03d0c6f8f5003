use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc};

use crate::{api, config, config::SpotifyCredentials, error, gemini::GeminiClient};

/// Everything the request handlers need, passed explicitly instead of living
/// in module-level singletons.
pub struct AppContext {
    pub credentials: SpotifyCredentials,
    pub gemini: GeminiClient,
    /// Root directory of the cache store.
    pub cache_dir: PathBuf,
}

pub async fn start_api_server(context: Arc<AppContext>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/api/playlists/{user_id}", get(api::user_playlists))
        .route(
            "/api/playlists/{user_id}/{playlist_id}",
            get(api::playlist_genres),
        )
        .route("/api/aura", post(api::generate_aura))
        .route("/api/aura/{share_id}", get(api::shared_aura))
        .layer(Extension(context));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
