// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, settled background work)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod feedback;
pub mod input;
pub mod layout;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::events::EventReceiver;
use anyhow::{Context, Result};
use app::{App, Services};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, including when the loop fails.
pub async fn run_tui(config: Config, services: Services, mut events: EventReceiver) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, services);
    tracing::info!("Sending shortening requests to {}", app.endpoint);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut events).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources at once:
/// 1. Terminal input (keys, paste, resize)
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. App events (settled shortening requests, copy feedback timers)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventReceiver,
) -> Result<()> {
    let mut input = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        app.sync();
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal input"),
                None => break,
            },

            _ = tick_interval.tick() => app.tick(),

            Some(event) = events.recv() => app.handle_event(event),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
