use std::path::PathBuf;

use spaura::management::CacheManager;
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
async fn test_miss_then_hit() {
    let dir = scratch_dir("miss-then-hit");
    let cache = CacheManager::in_dir("user:playlist", dir.clone());

    // Unknown key is a plain miss, not an error
    let miss: Option<Vec<String>> = cache.read().await.unwrap();
    assert!(miss.is_none());

    let genres = vec!["indie rock".to_string(), "jazz".to_string()];
    cache.write(&genres).await.unwrap();

    // Should come back verbatim
    let hit: Option<Vec<String>> = cache.read().await.unwrap();
    assert_eq!(hit.unwrap(), genres);

    let _ = async_fs::remove_dir_all(dir).await;
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let dir = scratch_dir("idempotent");
    let cache = CacheManager::in_dir("user:playlist", dir.clone());

    let genres = vec!["pop".to_string()];
    cache.write(&genres).await.unwrap();

    // Two reads of the same key return the same value with no recompute
    let first: Vec<String> = cache.read().await.unwrap().unwrap();
    let second: Vec<String> = cache.read().await.unwrap().unwrap();
    assert_eq!(first, second);

    let _ = async_fs::remove_dir_all(dir).await;
}

#[tokio::test]
async fn test_keys_do_not_collide() {
    let dir = scratch_dir("no-collide");

    // The genre key and its ":aura" sibling address different entries
    let genre_cache = CacheManager::in_dir("user:playlist", dir.clone());
    let aura_cache = CacheManager::in_dir("user:playlist:aura", dir.clone());

    genre_cache
        .write(&vec!["jazz".to_string()])
        .await
        .unwrap();

    let aura_miss: Option<AuraRecord> = aura_cache.read().await.unwrap();
    assert!(aura_miss.is_none());

    aura_cache.write(&create_test_record("Irama Jiwa")).await.unwrap();

    let genres: Vec<String> = genre_cache.read().await.unwrap().unwrap();
    assert_eq!(genres, vec!["jazz".to_string()]);

    let record: AuraRecord = aura_cache.read().await.unwrap().unwrap();
    assert_eq!(record.translations.english.music_nickname, "Irama Jiwa");

    let _ = async_fs::remove_dir_all(dir).await;
}

#[tokio::test]
async fn test_corrupt_entry_is_a_miss() {
    let dir = scratch_dir("corrupt-entry");
    let cache = CacheManager::in_dir("user:playlist", dir.clone());

    // An entry that no longer parses into the expected shape reads as a
    // plain miss, not an error
    cache.write(&"not a genre list").await.unwrap();
    let miss: Option<Vec<String>> = cache.read().await.unwrap();
    assert!(miss.is_none());

    // The next write replaces the bad entry and reads recover
    let genres = vec!["shoegaze".to_string()];
    cache.write(&genres).await.unwrap();
    let hit: Option<Vec<String>> = cache.read().await.unwrap();
    assert_eq!(hit.unwrap(), genres);

    let _ = async_fs::remove_dir_all(dir).await;
}

#[tokio::test]
async fn test_last_write_wins() {
    let dir = scratch_dir("last-write-wins");
    let cache = CacheManager::in_dir("user:playlist:aura", dir.clone());

    cache.write(&create_test_record("First")).await.unwrap();
    cache.write(&create_test_record("Second")).await.unwrap();

    // No merge: the newest record fully replaces the previous one
    let record: AuraRecord = cache.read().await.unwrap().unwrap();
    assert_eq!(record.translations.english.music_nickname, "Second");

    let _ = async_fs::remove_dir_all(dir).await;
}
