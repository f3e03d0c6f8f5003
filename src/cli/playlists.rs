use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::SpotifyCredentials, error, info, spotify, types::PlaylistTableRow, warning,
};

pub async fn list_playlists(user_id: String) {
    let credentials = SpotifyCredentials::from_env();

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching playlists for {}...", user_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let token = match spotify::auth::request_access_token(&credentials).await {
        Ok(token) => token,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to refresh access token: {}", e);
        }
    };

    let playlists =
        match spotify::playlists::get_user_playlists(&token.access_token, &user_id).await {
            Ok(playlists) => playlists,
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch playlists for {}: {}", user_id, e);
            }
        };

    pb.finish_and_clear();

    if playlists.is_empty() {
        warning!("No public playlists found for {}", user_id);
        return;
    }

    info!("Public playlists for {}:", user_id);

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            id: p.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
