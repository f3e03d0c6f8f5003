use std::collections::HashSet;

use serde_json::json;
use spaura::types::AuraRecord;
use spaura::utils::*;

#[test]
fn test_share_id_round_trip() {
    let encoded = encode_share_id("fadhluu", "37i9dQZF1DXcBWIGoYBM5M");

    // Should be URL-safe (no '+', '/', '=' or raw ':')
    assert!(
        encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );

    // decode(encode(x)) == x
    let (user_id, playlist_id) = decode_share_id(&encoded).unwrap();
    assert_eq!(user_id, "fadhluu");
    assert_eq!(playlist_id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_share_id_encode_is_inverse_of_decode() {
    // encode(decode(y)) == y for a value that decodes cleanly
    let original = encode_share_id("someuser", "someplaylist");
    let (user_id, playlist_id) = decode_share_id(&original).unwrap();
    assert_eq!(encode_share_id(&user_id, &playlist_id), original);
}

#[test]
fn test_decode_share_id_rejects_garbage() {
    // Not base64 at all
    assert!(decode_share_id("not base64 !!!").is_none());

    // Valid base64 but no ':' separator
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    let no_separator = URL_SAFE_NO_PAD.encode("justonepart");
    assert!(decode_share_id(&no_separator).is_none());

    // Empty components are rejected
    let empty_user = URL_SAFE_NO_PAD.encode(":playlist");
    assert!(decode_share_id(&empty_user).is_none());
    let empty_playlist = URL_SAFE_NO_PAD.encode("user:");
    assert!(decode_share_id(&empty_playlist).is_none());
}

#[test]
fn test_decode_share_id_keeps_extra_separators_in_playlist_part() {
    // Only the first ':' splits; the rest belongs to the playlist id
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    let encoded = URL_SAFE_NO_PAD.encode("user:play:list");
    let (user_id, playlist_id) = decode_share_id(&encoded).unwrap();
    assert_eq!(user_id, "user");
    assert_eq!(playlist_id, "play:list");
}

#[test]
fn test_dedup_preserving_order() {
    let items = vec![
        "indie rock".to_string(),
        "pop".to_string(),
        "indie rock".to_string(),
        "jazz".to_string(),
        "pop".to_string(),
    ];

    let deduped = dedup_preserving_order(items);

    // Should keep the first occurrence of each entry, in order
    assert_eq!(deduped, vec!["indie rock", "pop", "jazz"]);
}

#[test]
fn test_sample_genres_is_capped_subset_without_duplicates() {
    let genres: Vec<String> = (0..40).map(|i| format!("genre-{}", i)).collect();
    let universe: HashSet<String> = genres.iter().cloned().collect();

    let sampled = sample_genres(genres, GENRE_SAMPLE_CAP);

    // Should respect the cap
    assert_eq!(sampled.len(), GENRE_SAMPLE_CAP);

    // Should be a subset of the input universe
    assert!(sampled.iter().all(|g| universe.contains(g)));

    // Should contain no duplicates
    let unique: HashSet<&String> = sampled.iter().collect();
    assert_eq!(unique.len(), sampled.len());
}

#[test]
fn test_sample_genres_short_input_is_kept_whole() {
    let genres = vec!["pop".to_string(), "jazz".to_string()];
    let sampled = sample_genres(genres, GENRE_SAMPLE_CAP);

    // Fewer genres than the cap: all of them survive (order may differ)
    assert_eq!(sampled.len(), 2);
    assert!(sampled.contains(&"pop".to_string()));
    assert!(sampled.contains(&"jazz".to_string()));
}

#[test]
fn test_sample_genres_empty_input() {
    // An empty playlist yields an empty list, not an error
    let sampled = sample_genres(Vec::new(), GENRE_SAMPLE_CAP);
    assert!(sampled.is_empty());
}

#[test]
fn test_extract_json_fenced() {
    let value = extract_json("```json\n{\"a\":1}\n```").unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[test]
fn test_extract_json_bare_fence_and_no_fence() {
    // Bare ``` fence without an info string
    let value = extract_json("```\n{\"a\":1}\n```").unwrap();
    assert_eq!(value, json!({"a": 1}));

    // No fence at all still parses
    let value = extract_json("{\"a\":1}").unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[test]
fn test_extract_json_missing_closing_fence() {
    // Best-effort parse when the model forgot to close the fence
    let value = extract_json("```json\n{\"a\":1}").unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[test]
fn test_extract_json_malformed_is_none() {
    // Should be None, never a panic
    assert!(extract_json("not json").is_none());
    assert!(extract_json("").is_none());
    assert!(extract_json("```json\nstill not json\n```").is_none());
}

#[test]
fn test_extract_json_surrounding_whitespace() {
    let value = extract_json("\n\n```json\n{\"a\": [1, 2]}\n```\n\n").unwrap();
    assert_eq!(value, json!({"a": [1, 2]}));
}

#[test]
fn test_fenced_model_reply_parses_into_aura_record() {
    let reply = r##"```json
{
  "auraScore": 87,
  "auraColors": {
    "primary": { "hex": "#FF8C42", "name": "Sunset Orange" },
    "secondary": { "hex": "#2D7DD2", "name": "Electric Blue" },
    "gradientPosition": "to bottom right"
  },
  "translations": {
    "english": {
      "musicNickname": "Irama Jiwa",
      "keyPoint": "A heart split between nostalgia and new sounds.",
      "auraDescription": "Chill coffee shop vibes with rebellious energy.",
      "colorMeanings": { "primary": "warmth", "secondary": "depth" }
    },
    "indonesian": {
      "musicNickname": "Irama Jiwa",
      "keyPoint": "Hati yang terbagi antara nostalgia dan suara baru.",
      "auraDescription": "Suasana kedai kopi dengan energi pemberontak.",
      "colorMeanings": { "primary": "kehangatan", "secondary": "kedalaman" }
    }
  }
}
```"##;

    let value = extract_json(reply).unwrap();
    let record: AuraRecord = serde_json::from_value(value).unwrap();

    assert_eq!(record.aura_score, 87.0);
    assert_eq!(record.aura_colors.primary.hex, "#FF8C42");
    assert_eq!(record.translations.english.music_nickname, "Irama Jiwa");
    assert_eq!(record.translations.indonesian.color_meanings.primary, "kehangatan");

    // Round-trips back out with the same camelCase field names
    let serialized = serde_json::to_value(&record).unwrap();
    assert_eq!(serialized["auraScore"], json!(87.0));
    assert_eq!(serialized["auraColors"]["gradientPosition"], json!("to bottom right"));
    assert_eq!(
        serialized["translations"]["english"]["keyPoint"],
        json!("A heart split between nostalgia and new sounds.")
    );
}
