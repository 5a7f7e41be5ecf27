use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use playlist_sync::catalog::{AcknowledgmentPolicy, CatalogState, Coordinator, ViewPhase};
use playlist_sync::config::Config;
use playlist_sync::logging::init_tracing;
use playlist_sync::remote::{RemoteClient, TimeoutConfig};

#[derive(Parser, Debug)]
#[command(name = "playlist-sync", version, about = "Browse and like curated playlists")]
struct Cli {
    /// Config file (default: ~/.config/playlist-sync/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Service base URL, overriding config and PLAYLIST_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Load and print the playlist catalog
    List,
    /// Like a playlist, then print the catalog as loaded before the like
    Like { id: String },
    /// Check that the service is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let base_url = config.absolute_base_url()?;
    let client = RemoteClient::new(base_url, TimeoutConfig::from(&config.api))
        .context("Failed to build HTTP client")?;

    if cli.command == Command::Health {
        let ok = client.health().await?;
        println!("{}: {}", client.base_url(), if ok { "ok" } else { "unhealthy" });
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let coordinator = Coordinator::new(
        Arc::new(client),
        AcknowledgmentPolicy::from(&config.acknowledgment),
    );
    let mut updates = coordinator.subscribe();

    coordinator.load();
    let mut state = updates.wait_for(|s| !s.is_loading()).await?.clone();

    if let Command::Like { id } = cli.command {
        let before = state.clone();
        coordinator.like(id);
        state = updates
            .wait_for(|s| s.acknowledgment != before.acknowledgment || s.error != before.error)
            .await?
            .clone();
    }

    render(&state);
    Ok(if state.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path, |key| std::env::var(key).ok())?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = Some(base_url.clone());
        config.validate()?;
    }

    Ok(config)
}

fn render(state: &CatalogState) {
    if let Some(message) = state.acknowledgment_message() {
        println!("✓ {}", message);
    }
    if let Some(error) = &state.error {
        eprintln!("⚠ {}", error);
    }

    match state.phase() {
        ViewPhase::InitialLoading => println!("Loading playlists..."),
        ViewPhase::Empty => println!("No playlists found"),
        ViewPhase::Populated => {
            for playlist in &state.items {
                println!(
                    "{:<32} by {:<16} {:>8} likes  [{}]",
                    playlist.name, playlist.owner, playlist.like_count, playlist.id
                );
            }
        }
    }
}
