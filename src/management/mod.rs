//! # Management Module
//!
//! Cache-or-compute flows sitting between the HTTP/CLI surface and the
//! external services. Each flow takes the store's root directory explicitly
//! ([`CacheManager::default_dir`] in normal use), checks the file-backed
//! key-value store first and only talks to Spotify or the generative model
//! on a miss; once written, records are treated as immutable (no
//! invalidation or expiry).
//!
//! Keys are composite strings: `{userId}:{playlistId}` for genre lists and
//! `{userId}:{playlistId}:aura` for aura records. Two concurrent requests
//! for the same uncached key may both compute and write; the store is
//! last-write-wins and both writers produce equivalent records, so the race
//! is benign.

mod aura;
mod cache;
mod genres;

pub use aura::cached_aura;
pub use aura::playlist_aura;
pub use cache::CacheManager;
pub use genres::playlist_genres;
