use std::time::Duration;

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, config::SpotifyCredentials, error,
    gemini::GeminiClient,
    info,
    management::{self, CacheManager},
    success, utils, warning,
};

/// Display language for the generated aura text.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Language {
    /// English
    En,
    /// Bahasa Indonesia
    Id,
}

pub async fn aura(user_id: String, playlist_id: String, language: Language, open: bool) {
    let credentials = SpotifyCredentials::from_env();
    let gemini = GeminiClient::from_env();
    let cache_dir = CacheManager::default_dir();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Aggregating playlist genres...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let genres = match management::playlist_genres(&credentials, &cache_dir, &user_id, &playlist_id)
        .await
    {
        Ok(genres) => genres,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to aggregate genres: {}", e);
        }
    };

    pb.set_message("Generating aura...");

    let record = match management::playlist_aura(&gemini, &cache_dir, &user_id, &playlist_id, &genres)
        .await
    {
        Ok(record) => record,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to generate aura: {}", e);
        }
    };

    pb.finish_and_clear();

    if genres.is_empty() {
        warning!("Playlist has no tracks with known genres.");
    } else {
        success!("Sampled {} genres: {}", genres.len(), genres.join(", "));
    }

    let text = match language {
        Language::En => &record.translations.english,
        Language::Id => &record.translations.indonesian,
    };

    success!("Aura score: {}", record.aura_score);
    info!("{}", text.key_point);
    println!("\n{}\n", text.aura_description);
    info!("Music nickname: {}", text.music_nickname);
    info!(
        "Colors: {} ({}) / {} ({})",
        record.aura_colors.primary.name,
        record.aura_colors.primary.hex,
        record.aura_colors.secondary.name,
        record.aura_colors.secondary.hex
    );
    info!("  primary: {}", text.color_meanings.primary);
    info!("  secondary: {}", text.color_meanings.secondary);

    let share_url = format!(
        "{base}/api/aura/{id}",
        base = config::share_base_url(),
        id = utils::encode_share_id(&user_id, &playlist_id)
    );
    info!("Share URL: {}", share_url);

    if open && webbrowser::open(&share_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            share_url
        );
    }
}
