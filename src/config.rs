//! Configuration management for the Spotify Playlist Aura service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, generative model settings,
//! server settings, and other runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory (fallback)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spaura/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values. When no file
/// exists in the data directory, a `.env` in the working directory is used
/// as a fallback so local development keeps working.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spaura/.env`
/// - macOS: `~/Library/Application Support/spaura/.env`
/// - Windows: `%LOCALAPPDATA%/spaura/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use spaura::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spaura/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Spotify application credentials for the refresh-token grant.
///
/// Replaces the process-wide credential singletons of earlier iterations:
/// callers construct one of these (usually via [`SpotifyCredentials::from_env`])
/// and pass it explicitly into the token provider.
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl SpotifyCredentials {
    /// Builds credentials from the `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`
    /// and `SPOTIFY_REFRESH_TOKEN` environment variables.
    ///
    /// # Panics
    ///
    /// Panics if any of the three variables is not set.
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set"),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET")
                .expect("SPOTIFY_CLIENT_SECRET must be set"),
            refresh_token: env::var("SPOTIFY_REFRESH_TOKEN")
                .expect("SPOTIFY_REFRESH_TOKEN must be set"),
        }
    }
}

/// Returns the address for the aura API server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the HTTP server should bind.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the public base URL used when printing share links.
///
/// Retrieves the `SHARE_BASE_URL` environment variable when set (scheme
/// included, e.g. `https://aura.example.com`). When unset, falls back to
/// `http://{SERVER_ADDRESS}`, which matches a locally running `spaura serve`.
///
/// # Panics
///
/// Panics if neither `SHARE_BASE_URL` nor `SERVER_ADDRESS` is set.
pub fn share_base_url() -> String {
    env::var("SHARE_BASE_URL").unwrap_or_else(|_| format!("http://{}", server_addr()))
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. This is used for all API
/// operations after authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL for exchanging the configured refresh token for a short-lived
/// access token.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the generative model API base URL.
///
/// Retrieves the `GEMINI_API_URL` environment variable, e.g.
/// `https://generativelanguage.googleapis.com/v1beta`.
///
/// # Panics
///
/// Panics if the `GEMINI_API_URL` environment variable is not set.
pub fn gemini_apiurl() -> String {
    env::var("GEMINI_API_URL").expect("GEMINI_API_URL must be set")
}

/// Returns the generative model API key.
///
/// # Panics
///
/// Panics if the `GEMINI_API_KEY` environment variable is not set.
///
/// # Security Note
///
/// The API key should be kept confidential and never exposed in logs
/// or version control.
pub fn gemini_api_key() -> String {
    env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set")
}

/// Returns the generative model identifier.
///
/// # Panics
///
/// Panics if the `GEMINI_MODEL` environment variable is not set.
///
/// # Example
///
/// ```
/// let model = gemini_model(); // e.g., "gemini-1.5-pro"
/// ```
pub fn gemini_model() -> String {
    env::var("GEMINI_MODEL").expect("GEMINI_MODEL must be set")
}

/// Returns the system prompt sent with every aura generation request.
///
/// The prompt instructs the model to answer with a single fenced JSON object
/// matching the [`crate::types::AuraRecord`] shape, in both English and
/// Indonesian.
///
/// # Panics
///
/// Panics if the `GEMINI_SYSTEM_PROMPT` environment variable is not set.
pub fn gemini_system_prompt() -> String {
    env::var("GEMINI_SYSTEM_PROMPT").expect("GEMINI_SYSTEM_PROMPT must be set")
}
