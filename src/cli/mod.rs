//! # CLI Module
//!
//! Terminal front end for the aura service. It drives the same flows as the
//! HTTP API (playlist listing, genre aggregation, aura generation) and shares
//! their caches, so a playlist generated from the CLI is immediately
//! available behind its share URL once the server runs.
//!
//! ## Commands
//!
//! - [`list_playlists`] - Prints a user's public playlists as a table
//! - [`aura`] - Aggregates genres for a playlist, generates (or loads) its
//!   aura and prints the chosen translation plus the share URL
//!
//! Long-running network calls show an indicatif spinner; results use the
//! colored status macros and tabled tables.

mod aura;
mod playlists;

pub use aura::Language;
pub use aura::aura;
pub use playlists::list_playlists;
