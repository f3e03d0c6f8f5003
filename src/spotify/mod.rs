//! # Spotify Integration Module
//!
//! Thin client layer over the Spotify Web API operations the aura flow needs.
//! All HTTP communication with Spotify lives here; higher layers only see
//! typed results and [`crate::error::ApiError`] kinds.
//!
//! ## Core Modules
//!
//! - [`auth`] - Exchanges the configured long-lived refresh token for a
//!   short-lived access token (HTTP Basic auth against the token endpoint).
//!   The token is requested once per request flow and never persisted.
//! - [`playlists`] - Lists a user's public playlists (first page) and pulls
//!   the artist ids out of a playlist's tracks.
//! - [`artists`] - Batch-fetches artist records for their genre arrays.
//!
//! ## Error Handling
//!
//! Every function returns `Result<_, ApiError>`. Non-2xx responses are never
//! swallowed: a 404 on the playlist listing becomes `ApiError::NotFound`
//! (unknown user), a failed token exchange becomes `ApiError::TokenExpired`,
//! and everything else surfaces as `ApiError::Upstream`. There are no retries.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - refresh-token grant
//! - `GET /users/{user_id}/playlists` - playlist listing
//! - `GET /playlists/{playlist_id}/tracks?fields=items(track(artists(id)))` - artist ids
//! - `GET /artists?ids=...` - artist genre arrays, max 50 ids per call

pub mod artists;
pub mod auth;
pub mod playlists;
