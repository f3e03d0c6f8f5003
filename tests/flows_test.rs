use std::path::PathBuf;

use spaura::config::SpotifyCredentials;
use spaura::gemini::GeminiClient;
use spaura::management::{self, CacheManager};
use spaura::types::{AuraColor, AuraColors, AuraRecord, AuraText, ColorMeanings, Translations};

// Helper to get a unique scratch directory per test
fn scratch_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("spaura-test-{}-{}", name, std::process::id()));
    dir
}

// Helper to build a minimal aura record
fn create_test_record(nickname: &str) -> AuraRecord {
    let text = AuraText {
        music_nickname: nickname.to_string(),
        key_point: "key point".to_string(),
        aura_description: "description".to_string(),
        color_meanings: ColorMeanings {
            primary: "warmth".to_string(),
            secondary: "depth".to_string(),
        },
    };

    AuraRecord {
        aura_score: 42.0,
        aura_colors: AuraColors {
            primary: AuraColor {
                hex: "#FF8C42".to_string(),
                name: "Sunset Orange".to_string(),
            },
            secondary: AuraColor {
                hex: "#2D7DD2".to_string(),
                name: "Electric Blue".to_string(),
            },
            gradient_position: "to bottom right".to_string(),
        },
        translations: Translations {
            english: text.clone(),
            indonesian: text,
        },
    }
}

#[tokio::test]
async fn test_cached_genres_come_back_without_spotify() {
    let dir = scratch_dir("genre-hit");
    let seeded = vec!["dream pop".to_string(), "jangle pop".to_string()];
    CacheManager::in_dir("someuser:someplaylist", dir.clone())
        .write(&seeded)
        .await
        .unwrap();

    // Credentials no token exchange could accept; a hit must never try one
    let credentials = SpotifyCredentials {
        client_id: "unused".to_string(),
        client_secret: "unused".to_string(),
        refresh_token: "unused".to_string(),
    };

    // Should short-circuit to the seeded list, no upstream call at all
    let genres = management::playlist_genres(&credentials, &dir, "someuser", "someplaylist")
        .await
        .unwrap();
    assert_eq!(genres, seeded);

    let _ = async_fs::remove_dir_all(dir).await;
}

#[tokio::test]
async fn test_cached_aura_skips_generation() {
    let dir = scratch_dir("aura-hit");
    CacheManager::in_dir("someuser:someplaylist:aura", dir.clone())
        .write(&create_test_record("Irama Jiwa"))
        .await
        .unwrap();

    // An unroutable model endpoint; any generation attempt would error
    let gemini = GeminiClient {
        api_url: "http://127.0.0.1:9".to_string(),
        api_key: "unused".to_string(),
        model: "unused".to_string(),
        system_prompt: "unused".to_string(),
    };

    let genres = vec!["dream pop".to_string()];
    let record =
        management::playlist_aura(&gemini, &dir, "someuser", "someplaylist", &genres)
            .await
            .unwrap();
    assert_eq!(record.translations.english.music_nickname, "Irama Jiwa");

    let _ = async_fs::remove_dir_all(dir).await;
}

#[tokio::test]
async fn test_shared_aura_reads_only_existing_records() {
    let dir = scratch_dir("share-read");

    // Nothing cached yet: the share path reports a miss, it never generates
    let miss = management::cached_aura(&dir, "someuser", "someplaylist")
        .await
        .unwrap();
    assert!(miss.is_none());

    CacheManager::in_dir("someuser:someplaylist:aura", dir.clone())
        .write(&create_test_record("Second Self"))
        .await
        .unwrap();

    let record = management::cached_aura(&dir, "someuser", "someplaylist")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.translations.english.music_nickname, "Second Self");

    let _ = async_fs::remove_dir_all(dir).await;
}
