// Scissors - terminal client for a URL shortening service
//
// Paste a long URL, get a short one back from the configured endpoint.
//
// Architecture:
// - Shortener: wire format and HTTP client for the shortening endpoint
// - TUI (ratatui): the interactive view, history and notifications
// - Event system: an mpsc channel carries settled background work to the TUI
// - CLI (clap): headless `shorten` and `config` subcommands

mod cli;
mod config;
mod events;
mod history;
mod logging;
mod shortener;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogSink};
use shortener::HttpShortener;
use std::sync::Arc;
use tui::app::Services;
use tui::clipboard::SystemClipboard;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config subcommands don't need logging or a client
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        return cli::handle_config(show, reset, edit, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Fix the file or run `scissors config --reset`.");
            std::process::exit(1);
        }
    };

    // In TUI mode logs are captured to the buffer (written to the terminal
    // they would garble the display); headless commands log to stderr.
    let log_buffer = LogBuffer::new();
    let sink = match cli.command {
        None => LogSink::Tui(log_buffer.clone()),
        Some(_) => LogSink::Stderr,
    };
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging, sink);

    match cli.command {
        Some(Commands::Shorten { url, copy }) => cli::handle_shorten(&config, &url, copy).await,
        Some(Commands::Config { .. }) => Ok(()),
        None => {
            let shortener = HttpShortener::new(
                &config.api_base,
                &config.endpoint_path,
                config.request_timeout(),
            )?;

            let (events, event_rx) = events::channel();
            let services = Services {
                shortener: Arc::new(shortener),
                clipboard: Box::new(SystemClipboard),
                events,
                log_buffer,
            };

            tracing::info!("Starting TUI");
            let result = tui::run_tui(config, services, event_rx).await;
            if let Err(e) = &result {
                tracing::error!("TUI error: {:?}", e);
            }
            tracing::info!("Shutdown complete");
            result
        }
    }
}
