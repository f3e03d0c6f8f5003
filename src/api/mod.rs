//! # API Module
//!
//! HTTP endpoints for the aura service, built on [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! ### Playlists
//!
//! - [`user_playlists`] - `GET /api/playlists/{user_id}`; lists a user's
//!   public playlists as `{id, name}` pairs (first page only).
//! - [`playlist_genres`] - `GET /api/playlists/{user_id}/{playlist_id}`;
//!   returns the cached-or-computed sampled genre list for the playlist.
//!
//! ### Aura
//!
//! - [`generate_aura`] - `POST /api/aura`; returns the cached aura for the
//!   composite key, generating it from the posted genres on a miss.
//! - [`shared_aura`] - `GET /api/aura/{share_id}`; decodes a share identifier
//!   and returns the cached aura. Never generates.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check returning application status and version.
//!
//! ## Error Responses
//!
//! Handlers return `Result<_, ApiError>`; the error's `IntoResponse` impl
//! maps kinds to statuses (unknown user and uncached share keys are 404,
//! upstream/auth/parse failures 502, cache failures 500) with a JSON body
//! of the form `{"error": "..."}`.
//!
//! ## Related Modules
//!
//! - [`crate::server`] - Route registration and the shared [`AppContext`]
//! - [`crate::management`] - Cache-or-compute flows the handlers delegate to
//!
//! [`AppContext`]: crate::server::AppContext

mod aura;
mod health;
mod playlists;

pub use aura::generate_aura;
pub use aura::shared_aura;
pub use health::health;
pub use playlists::playlist_genres;
pub use playlists::user_playlists;
