use std::sync::Arc;

use axum::{Extension, extract::Path, response::Json};
use serde_json::{Value, json};

use crate::{error::ApiError, management, server::AppContext, spotify};

/// `GET /api/playlists/{user_id}` - the user's public playlists.
///
/// Exchanges the refresh token, fetches the first page of playlists and
/// returns them under `data`. An unknown username is a 404.
pub async fn user_playlists(
    Path(user_id): Path<String>,
    Extension(context): Extension<Arc<AppContext>>,
) -> Result<Json<Value>, ApiError> {
    let token = spotify::auth::request_access_token(&context.credentials).await?;
    let playlists = spotify::playlists::get_user_playlists(&token.access_token, &user_id).await?;

    Ok(Json(json!({ "data": playlists })))
}

/// `GET /api/playlists/{user_id}/{playlist_id}` - sampled genres, cached.
pub async fn playlist_genres(
    Path((user_id, playlist_id)): Path<(String, String)>,
    Extension(context): Extension<Arc<AppContext>>,
) -> Result<Json<Value>, ApiError> {
    let genres = management::playlist_genres(
        &context.credentials,
        &context.cache_dir,
        &user_id,
        &playlist_id,
    )
    .await?;

    Ok(Json(json!({ "data": genres })))
}
