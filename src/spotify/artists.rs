use reqwest::Client;

use crate::{
    config,
    error::ApiError,
    types::{Artist, GetSeveralArtistsResponse},
};

/// Maximum number of ids the batch artists endpoint accepts per request.
pub const ARTIST_BATCH_LIMIT: usize = 50;

/// Batch-fetches artist records for their genre arrays.
///
/// Splits the id list into chunks of [`ARTIST_BATCH_LIMIT`] and issues one
/// GET per chunk, concatenating the results in request order. An empty id
/// list makes no requests and returns an empty vector, so an empty playlist
/// flows through without a single Spotify call.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_ids` - Deduplicated artist ids from the playlist's tracks
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Artist>)` - Artist records; `genres` defaults to empty when the
///   API omits it
/// - `Err(ApiError)` - Network or API error
///
/// # Example
///
/// ```
/// let artists = get_several_artists(&token.access_token, &artist_ids).await?;
/// let genre_count: usize = artists.iter().map(|a| a.genres.len()).sum();
/// ```
pub async fn get_several_artists(
    token: &str,
    artist_ids: &[String],
) -> Result<Vec<Artist>, ApiError> {
    let mut artists: Vec<Artist> = Vec::with_capacity(artist_ids.len());

    for chunk in artist_ids.chunks(ARTIST_BATCH_LIMIT) {
        let api_url = format!("{uri}/artists", uri = &config::spotify_apiurl());

        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[("ids", chunk.join(","))])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<GetSeveralArtistsResponse>().await?;
        artists.extend(res.artists);
    }

    Ok(artists)
}
