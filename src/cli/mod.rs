use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::console::Session;
use crate::http::server::HttpServer;
use crate::i18n::Language;
use crate::tracker::LapTracking;
use crate::tracker::operations::LapTracker;

#[derive(Parser)]
#[command(name = "mykart")]
#[command(version = "0.1")]
#[command(about = "Personal kart lap time tracker")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Language of the interface, overrides the config
    #[arg(short, long)]
    pub language: Option<Language>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run http server with the lap time screens
    Serve,
    /// List the tracks a fresh session starts with
    Tracks,
    /// Record lap times interactively in the terminal
    Console,
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let cfg = config::Config::load(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.to_string_lossy()))?;
    let language = cli.language.unwrap_or(cfg.language);
    let tracker = LapTracker::with_tracks(cfg.tracker.seed_tracks);

    match &cli.command {
        Commands::Serve => {
            let http_server = HttpServer::new(tracker, cfg.http, language);

            println!(
                "HTTP server running at http://{}:{}",
                http_server.config.bind_addr, http_server.config.port
            );
            http_server.run();
        }

        Commands::Tracks => {
            for track in tracker.tracks() {
                println!("  - {track}");
            }
        }

        Commands::Console => {
            let mut session = Session::new(tracker, language);
            session.run(std::io::stdin().lock(), std::io::stdout().lock())?;
        }
    }
    Ok(())
}
