use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::seq::SliceRandom;
use serde_json::Value;

/// How many genres a sampled genre list may contain at most.
pub const GENRE_SAMPLE_CAP: usize = 15;

/// Encodes a `{userId}:{playlistId}` pair into a URL-safe share identifier.
pub fn encode_share_id(user_id: &str, playlist_id: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!("{}:{}", user_id, playlist_id))
}

/// Decodes a share identifier back into its `(user_id, playlist_id)` pair.
///
/// Exactly inverts [`encode_share_id`]. Returns `None` for anything that is
/// not valid base64, not UTF-8, or lacks the `:` separator.
pub fn decode_share_id(encoded: &str) -> Option<(String, String)> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    let composite = String::from_utf8(bytes).ok()?;
    let (user_id, playlist_id) = composite.split_once(':')?;
    if user_id.is_empty() || playlist_id.is_empty() {
        return None;
    }
    Some((user_id.to_string(), playlist_id.to_string()))
}

/// Removes duplicate entries while keeping the first occurrence order.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = items;
    items.retain(|item| seen.insert(item.clone()));
    items
}

/// Picks a uniform random subset of at most `cap` genres.
///
/// Uses a Fisher-Yates shuffle, so every subset of the input is equally
/// likely.
pub fn sample_genres(mut genres: Vec<String>, cap: usize) -> Vec<String> {
    let mut rng = rand::rng();
    genres.shuffle(&mut rng);
    genres.truncate(cap);
    genres
}

/// Pulls a JSON value out of a (possibly markdown-fenced) model reply.
///
/// Strips a leading ```` ```json ```` or bare ```` ``` ```` fence and a
/// trailing fence when present, then parses the remainder. A missing closing
/// fence still gets a best-effort parse. Returns `None` for anything that is
/// not valid JSON; never panics.
pub fn extract_json(text: &str) -> Option<Value> {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        // drop the info string ("json") up to the end of the fence line
        body = match rest.split_once('\n') {
            Some((_, tail)) => tail,
            None => rest,
        };
    }

    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body).trim();

    serde_json::from_str(body).ok()
}
