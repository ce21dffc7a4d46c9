// wordview - Terminal dictionary viewer
//
// Type a word, press Enter, read its definitions. One HTTPS GET against
// the free dictionary API per submission; the first returned entry
// variant is rendered in the results panel, failures in the error
// banner.
//
// Architecture:
// - Lookup client (reqwest): single request/response cycle per word
// - TUI (ratatui): search bar, results panel, error banner, status bar
// - Event loop: tokio::select! over input, ticks, and lookup outcomes
// - Logging: tracing captured to an in-memory buffer in TUI mode

mod cli;
mod config;
mod events;
mod logging;
mod lookup;
mod render;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use lookup::LookupClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Config subcommands exit early, before any logging setup
    if cli::handle_command(&args) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();
    let tui_mode = config.enable_tui && !args.no_tui && args.word.is_none();

    // Initialize tracing with conditional output:
    // In TUI mode, logs go to an in-memory buffer (the F2 panel) so they
    // can't garble the alternate screen. In one-shot mode they go to
    // stderr, keeping stdout clean for the rendered entry.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("wordview={}", config.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let log_buffer = LogBuffer::new();
    if tui_mode {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    match args.word {
        Some(word) => run_once(&config, &word).await,
        None if tui_mode => {
            tracing::info!("Starting TUI");
            tui::run_tui(config, log_buffer).await
        }
        None => {
            // Headless with no word: nothing sensible to do
            eprintln!("No word given and TUI disabled; try: wordview <word>");
            std::process::exit(2);
        }
    }
}

/// One-shot lookup: normalize, fetch, print, exit
async fn run_once(config: &Config, raw_word: &str) -> Result<()> {
    let word = raw_word.trim().to_lowercase();
    if word.is_empty() {
        eprintln!("{}", tui::app::EMPTY_INPUT_MESSAGE);
        std::process::exit(1);
    }

    let client = LookupClient::new(&config.endpoint, config.timeout())?;
    match client.lookup(&word).await {
        Ok(entry) => {
            print!("{}", render::format_entry(&entry));
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
