use std::sync::Arc;

use axum::{Extension, extract::Path, response::Json};
use serde_json::{Value, json};

use crate::{error::ApiError, management, server::AppContext, types::AuraRequest, utils};

/// `POST /api/aura` - cached-or-generated aura for a playlist.
///
/// A cached record for `{user_id}:{playlist_id}:aura` is returned as-is.
/// On a miss the posted genres drive one generation; posting an empty genre
/// list (the share page does this) never generates, it only reads, and an
/// uncached key is then a 404. The response carries the encoded share id
/// alongside the record.
pub async fn generate_aura(
    Extension(context): Extension<Arc<AppContext>>,
    Json(request): Json<AuraRequest>,
) -> Result<Json<Value>, ApiError> {
    let record = if request.genres.is_empty() {
        management::cached_aura(&context.cache_dir, &request.user_id, &request.playlist_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "no cached aura for {}:{}",
                    request.user_id, request.playlist_id
                ))
            })?
    } else {
        management::playlist_aura(
            &context.gemini,
            &context.cache_dir,
            &request.user_id,
            &request.playlist_id,
            &request.genres,
        )
        .await?
    };

    Ok(Json(json!({
        "data": record,
        "share_id": utils::encode_share_id(&request.user_id, &request.playlist_id),
    })))
}

/// `GET /api/aura/{share_id}` - cached aura behind a share link.
///
/// Decodes the identifier back into its composite key and reads the cache.
/// Malformed identifiers and uncached keys are both 404; this endpoint never
/// triggers generation.
pub async fn shared_aura(
    Path(share_id): Path<String>,
    Extension(context): Extension<Arc<AppContext>>,
) -> Result<Json<Value>, ApiError> {
    let (user_id, playlist_id) = utils::decode_share_id(&share_id)
        .ok_or_else(|| ApiError::NotFound(format!("malformed share id: {}", share_id)))?;

    let record = management::cached_aura(&context.cache_dir, &user_id, &playlist_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("no cached aura for {}:{}", user_id, playlist_id))
        })?;

    Ok(Json(json!({ "data": record })))
}
