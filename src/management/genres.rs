use std::path::Path;

use crate::{
    config::SpotifyCredentials, error::ApiError, management::CacheManager, spotify, utils,
};

/// Returns the sampled genre list for a playlist, computing it on first use.
///
/// The cache check precedes everything: on a hit the stored list comes back
/// with zero Spotify calls and no token exchange. On a miss the flow is
///
/// 1. exchange the refresh token for an access token (once for the flow)
/// 2. collect the artist ids across the playlist's tracks, first-seen order,
///    duplicates removed
/// 3. fetch the artists' genre arrays, flatten, dedup again
/// 4. take a uniform random sample capped at [`utils::GENRE_SAMPLE_CAP`]
/// 5. write the sample to the cache and return it
///
/// The result is always a duplicate-free subset of the union of the
/// playlist's artists' genres. A playlist without tracks yields an empty
/// list, which is cached like any other value.
///
/// # Arguments
///
/// * `credentials` - Spotify application credentials for the token exchange
/// * `cache_dir` - Root of the cache store, usually [`CacheManager::default_dir`]
/// * `user_id` - Spotify username owning the playlist
/// * `playlist_id` - Identifier of the chosen playlist
///
/// # Errors
///
/// Propagates `ApiError::TokenExpired` from the token exchange, `NotFound` /
/// `Upstream` from the Spotify calls, and `Cache` from the store.
pub async fn playlist_genres(
    credentials: &SpotifyCredentials,
    cache_dir: &Path,
    user_id: &str,
    playlist_id: &str,
) -> Result<Vec<String>, ApiError> {
    let cache = CacheManager::in_dir(
        format!("{}:{}", user_id, playlist_id),
        cache_dir.to_path_buf(),
    );
    if let Some(genres) = cache.read::<Vec<String>>().await? {
        return Ok(genres);
    }

    let token = spotify::auth::request_access_token(credentials).await?;

    let artist_ids = utils::dedup_preserving_order(
        spotify::playlists::get_playlist_artist_ids(&token.access_token, playlist_id).await?,
    );

    let artists = spotify::artists::get_several_artists(&token.access_token, &artist_ids).await?;

    let all_genres = utils::dedup_preserving_order(
        artists
            .into_iter()
            .flat_map(|artist| artist.genres)
            .collect(),
    );

    let sampled = utils::sample_genres(all_genres, utils::GENRE_SAMPLE_CAP);

    cache.write(&sampled).await?;
    Ok(sampled)
}
