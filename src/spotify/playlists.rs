use reqwest::Client;

use crate::{
    config,
    error::ApiError,
    types::{GetUserPlaylistsResponse, Playlist, PlaylistTracksResponse},
};

/// How many tracks the genre flow inspects per playlist.
const PLAYLIST_TRACK_LIMIT: u32 = 30;

/// Retrieves a user's public playlists from the Spotify Web API.
///
/// Fetches only the first page of results; the playlist picker in the
/// presentation layer ignores pagination beyond that.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `user_id` - The Spotify username typed in by the user
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Playlist>)` - The user's playlists as `{id, name}` pairs
/// - `Err(ApiError::NotFound)` - No Spotify user with that id
/// - `Err(ApiError::Upstream)` - Any other network or API error
///
/// # Example
///
/// ```
/// let playlists = get_user_playlists(&token.access_token, "fadhluu").await?;
/// for playlist in playlists {
///     println!("{} ({})", playlist.name, playlist.id);
/// }
/// ```
pub async fn get_user_playlists(token: &str, user_id: &str) -> Result<Vec<Playlist>, ApiError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<GetUserPlaylistsResponse>().await?;
    Ok(res.items)
}

/// Collects the artist ids appearing in a playlist's tracks.
///
/// Asks the API for nothing beyond `items(track(artists(id)))` to keep the
/// response small. Local or removed tracks (null `track`) and artists without
/// ids are skipped. The returned list may contain duplicates; the genre
/// aggregator deduplicates.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Identifier of the chosen playlist
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<String>)` - Artist ids in track order, possibly empty
/// - `Err(ApiError)` - Network or API error
pub async fn get_playlist_artist_ids(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<String>, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[
            ("fields", "items(track(artists(id)))".to_string()),
            ("limit", PLAYLIST_TRACK_LIMIT.to_string()),
        ])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<PlaylistTracksResponse>().await?;

    let artist_ids = res
        .items
        .into_iter()
        .filter_map(|item| item.track)
        .flat_map(|track| track.artists)
        .filter_map(|artist| artist.id)
        .collect();

    Ok(artist_ids)
}
