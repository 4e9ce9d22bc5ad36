// UI rendering logic
//
// Lays out the single shortener view. Called on every frame; all state
// lives in App, this only decides where each component goes.

use super::app::App;
use super::components::{history_panel, logs_panel, shorten_card, status_bar, title_bar};
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Vertical sections:
    // - Title bar (3 lines fixed)
    // - Shorten card (sized to its content)
    // - History (fills remaining space, only once something was shortened)
    // - System logs (fixed, toggled with F2)
    // - Status bar (2 lines fixed)
    let (history_rows, spacer_rows) = if app.history.is_empty() {
        (Constraint::Length(0), Constraint::Fill(1))
    } else {
        (Constraint::Fill(1), Constraint::Length(0))
    };
    let log_rows = if app.show_logs {
        Constraint::Length(logs_panel::HEIGHT)
    } else {
        Constraint::Length(0)
    };

    let [title, card, history, _, logs, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(shorten_card::height(app)),
        history_rows,
        spacer_rows,
        log_rows,
        Constraint::Length(2),
    ])
    .areas(f.area());

    title_bar::render(f, title, app);
    shorten_card::render(f, card, app);
    if !app.history.is_empty() {
        history_panel::render(f, history, app);
    }
    if app.show_logs {
        logs_panel::render(f, logs, app);
    }
    status_bar::render(f, status, app);

    // Toasts go last so they sit on top
    app.toasts.render(f, f.area(), &app.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::events;
    use crate::history::HistoryEntry;
    use crate::logging::LogBuffer;
    use crate::shortener::HttpShortener;
    use crate::tui::app::Services;
    use crate::tui::clipboard::ClipboardSink;
    use ratatui::{backend::TestBackend, style::Color, Terminal};
    use std::sync::Arc;

    struct NullClipboard;

    impl ClipboardSink for NullClipboard {
        fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn app() -> App {
        let config = Config::default();
        let shortener =
            HttpShortener::new(&config.api_base, &config.endpoint_path, None).unwrap();
        let (events, _rx) = events::channel();
        App::new(
            &config,
            Services {
                shortener: Arc::new(shortener),
                clipboard: Box::new(NullClipboard),
                events,
                log_buffer: LogBuffer::new(),
            },
        )
    }

    fn render(app: &App, width: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
    }

    fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        rows(terminal).join("\n")
    }

    /// Foreground color of the first cell of `needle` (single-width text only)
    fn fg_of(terminal: &Terminal<TestBackend>, needle: &str) -> Option<Color> {
        let buffer = terminal.backend().buffer();
        let chars: Vec<char> = needle.chars().collect();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width.saturating_sub(chars.len() as u16) {
                let hit = chars.iter().enumerate().all(|(i, c)| {
                    buffer[(x + i as u16, y)].symbol() == c.to_string()
                });
                if hit {
                    return Some(buffer[(x, y)].fg);
                }
            }
        }
        None
    }

    #[tokio::test]
    async fn empty_view_hides_history_and_result() {
        let app = app();
        let text = screen_text(&render(&app, 100));

        assert!(text.contains("URL Shortener"));
        assert!(text.contains("Create Short URL"));
        assert!(text.contains("Enter long URL"));
        assert!(text.contains("[ Shorten ]"));
        assert!(!text.contains("Your Shortened URLs"));
        assert!(!text.contains("[ Copy ]"));
    }

    #[tokio::test]
    async fn result_and_history_render_after_success() {
        let mut app = app();
        app.current = Some("https://short.ly/abc123".to_string());
        app.history.prepend(HistoryEntry::new(
            "https://example.com/very/long/path",
            "https://short.ly/abc123",
        ));

        let text = screen_text(&render(&app, 100));
        assert!(text.contains("[ Copy ]"));
        assert!(text.contains("Your Shortened URLs"));
        assert!(text.contains("https://example.com/very/long/path"));
    }

    #[tokio::test]
    async fn copied_history_row_shows_check_mark() {
        let mut app = app();
        app.history
            .prepend(HistoryEntry::new("https://example.com/old", "https://short.ly/old"));
        app.history
            .prepend(HistoryEntry::new("https://example.com/new", "https://short.ly/new"));

        app.copy("https://short.ly/old");
        let rows = rows(&render(&app, 100));

        let old = rows.iter().find(|r| r.contains("https://short.ly/old")).unwrap();
        let new = rows.iter().find(|r| r.contains("https://short.ly/new")).unwrap();
        assert!(old.contains("https://short.ly/old ✓"), "{old}");
        assert!(!old.contains('⧉'));
        assert!(new.contains("https://short.ly/new ⧉"), "{new}");
        assert!(!new.contains('✓'));
    }

    #[tokio::test]
    async fn shorten_button_disabled_until_submittable() {
        let mut app = app();
        let (accent, disabled) = (app.theme.accent, app.theme.disabled);

        assert_eq!(fg_of(&render(&app, 100), "[ Shorten ]"), Some(disabled));

        app.input.insert_str("https://example.com");
        assert_eq!(fg_of(&render(&app, 100), "[ Shorten ]"), Some(accent));

        // Guarded and a request is outstanding
        app.in_flight = 1;
        assert_eq!(fg_of(&render(&app, 100), "Shortening"), Some(disabled));
    }

    #[tokio::test]
    async fn narrow_result_keeps_copy_control() {
        let mut app = app();
        let long_short = format!("https://short.ly/{}", "x".repeat(80));
        app.current = Some(long_short.clone());

        let text = screen_text(&render(&app, 40));
        assert!(text.contains("[ Copy ]"));
        assert!(text.contains('…'));
        assert!(!text.contains(&long_short));
    }
}
