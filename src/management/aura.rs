use std::path::Path;

use crate::{error::ApiError, gemini::GeminiClient, management::CacheManager, types::AuraRecord};

fn aura_key(user_id: &str, playlist_id: &str) -> String {
    format!("{}:{}:aura", user_id, playlist_id)
}

/// Returns the aura record for a playlist, generating it on first use.
///
/// A cache hit short-circuits regeneration entirely: the stored record comes
/// back unchanged, no model call, no merge. On a miss the genre list goes to
/// the generative model and the parsed record is cached before returning.
///
/// A parse failure (`ApiError::Parse`) deliberately writes nothing, so a bad
/// model reply never poisons the key; the next request computes again.
///
/// # Arguments
///
/// * `gemini` - Generative model client configuration
/// * `cache_dir` - Root of the cache store, usually [`CacheManager::default_dir`]
/// * `user_id` / `playlist_id` - Parts of the composite cache key
/// * `genres` - Sampled genre list to describe
pub async fn playlist_aura(
    gemini: &GeminiClient,
    cache_dir: &Path,
    user_id: &str,
    playlist_id: &str,
    genres: &[String],
) -> Result<AuraRecord, ApiError> {
    let cache = CacheManager::in_dir(aura_key(user_id, playlist_id), cache_dir.to_path_buf());
    if let Some(record) = cache.read::<AuraRecord>().await? {
        return Ok(record);
    }

    let record = gemini.generate_aura(genres).await?;

    cache.write(&record).await?;
    Ok(record)
}

/// Reads the cached aura for a playlist without ever generating one.
///
/// Backs the share view: a decoded share id must only surface what already
/// exists. Returns `Ok(None)` when the key has never been computed.
pub async fn cached_aura(
    cache_dir: &Path,
    user_id: &str,
    playlist_id: &str,
) -> Result<Option<AuraRecord>, ApiError> {
    CacheManager::in_dir(aura_key(user_id, playlist_id), cache_dir.to_path_buf())
        .read::<AuraRecord>()
        .await
}
