use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, config::SpotifyCredentials, error::ApiError, types::Token};

/// Exchanges the configured refresh token for a short-lived access token.
///
/// Sends the OAuth 2.0 refresh-token grant to the Spotify token endpoint,
/// authenticating the application with HTTP Basic auth (client id and secret).
/// The resulting bearer token covers one request flow; callers discard it
/// afterwards, so there is no cross-request token reuse or caching.
///
/// # Arguments
///
/// * `credentials` - Client id, client secret and long-lived refresh token,
///   usually built via [`SpotifyCredentials::from_env`]
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh access token with its expiration metadata
/// - `Err(ApiError::TokenExpired)` - Network failure, non-2xx response, or a
///   response body without an `access_token` field
///
/// # Error Conditions
///
/// Any failure here is fatal for the flow and is not retried: an unusable
/// refresh token cannot recover without operator intervention.
///
/// # Example
///
/// ```
/// let credentials = SpotifyCredentials::from_env();
/// let token = request_access_token(&credentials).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_access_token(credentials: &SpotifyCredentials) -> Result<Token, ApiError> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::TokenExpired(e.to_string()))?
        .error_for_status()
        .map_err(|e| ApiError::TokenExpired(e.to_string()))?;

    let json: Value = res
        .json()
        .await
        .map_err(|e| ApiError::TokenExpired(e.to_string()))?;

    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| ApiError::TokenExpired("token endpoint returned no access_token".into()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
