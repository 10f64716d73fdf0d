// Clueboard - trivia game board in the terminal
//
// Pulls random categories and clues from a jService-compatible HTTP API and
// lays them out as a board: category titles across the top, masked clues
// below. Activating a cell shows its question, then its answer.
//
// Architecture:
// - api: HTTP source (reqwest) + sampling client
// - board: categories, clues and per-clue reveal state
// - render: render-target trait and the in-memory grid
// - game: controller state machine and cell activation
// - tui (ratatui) / headless: the two front ends
// - config, logging, cli: ambient plumbing

mod api;
mod board;
mod cli;
mod config;
mod game;
mod headless;
mod logging;
mod render;
mod theme;
mod tui;
mod util;

use anyhow::{Context, Result};
use api::{JServiceSource, TriviaClient};
use clap::Parser;
use config::Config;
use game::LoadPlan;
use logging::LogBuffer;
use std::sync::Arc;
use theme::Theme;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle subcommands first (config --show, --reset, --path)
    if cli::handle_cli(&cli) {
        return Ok(());
    }

    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        if let Some(path) = Config::config_path() {
            eprintln!("Config file: {}", path.display());
        }
        std::process::exit(1);
    }

    // TUI mode captures logs into the buffer shown in the log strip;
    // headless mode writes them to stderr. Keep the guard alive until exit.
    let log_buffer = LogBuffer::new();
    let _log_guard = logging::init(&config.logging, config.enable_tui, &log_buffer);

    tracing::info!(
        "Starting clueboard v{} against {}",
        config::VERSION,
        config.api_url
    );
    if !Theme::names().contains(&config.theme.to_lowercase().as_str()) {
        tracing::warn!("Unknown theme {:?}, using classic", config.theme);
    }
    if let Some(seed) = config.seed {
        tracing::info!("Using fixed seed {}", seed);
    }

    let source = JServiceSource::new(&config.api_url, config.fetch.timeout())
        .context("Failed to build HTTP client")?;
    let client = Arc::new(TriviaClient::new(
        Arc::new(source),
        config.board.category_pool,
        config.board.clues_per_category,
        config.seed,
    ));
    let plan = LoadPlan {
        categories: config.board.categories,
        concurrent: config.fetch.concurrent,
    };

    if config.enable_tui {
        tracing::info!("Starting TUI");
        let options = tui::TuiOptions {
            client,
            plan,
            placeholder: config.board.placeholder.clone(),
            theme: Theme::by_name(&config.theme),
        };
        tui::run_tui(options, log_buffer).await?;
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        headless::run_headless(
            &client,
            plan,
            &config.board.placeholder,
            stdin,
            &mut stdout,
        )
        .await?;
    }

    tracing::info!("Shutting down");
    Ok(())
}
