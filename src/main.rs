use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spaura::{
    cli, config,
    config::SpotifyCredentials,
    error,
    gemini::GeminiClient,
    management::CacheManager,
    server::{AppContext, start_api_server},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the aura API server
    Serve,

    /// List a user's public playlists
    Playlists(PlaylistsOptions),

    /// Generate (or load) the aura for a playlist
    Aura(AuraOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Spotify username
    pub user_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AuraOptions {
    /// Spotify username
    pub user_id: String,

    /// Playlist identifier (see `spaura playlists`)
    pub playlist_id: String,

    /// Display language for the aura text
    #[clap(long, value_enum, default_value = "en")]
    pub language: cli::Language,

    /// Open the share URL in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            let context = Arc::new(AppContext {
                credentials: SpotifyCredentials::from_env(),
                gemini: GeminiClient::from_env(),
                cache_dir: CacheManager::default_dir(),
            });
            start_api_server(context).await;
        }
        Command::Playlists(opt) => cli::list_playlists(opt.user_id).await,
        Command::Aura(opt) => {
            cli::aura(opt.user_id, opt.playlist_id, opt.language, opt.open).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
