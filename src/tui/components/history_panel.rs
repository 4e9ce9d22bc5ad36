// History panel component
//
// Lists every URL shortened this session, newest first. Each row shows the
// long URL (cut to fit) above its short URL and a copy glyph that turns into
// a check mark while that short URL is the copy feedback target.

use crate::tui::app::{App, Focus};
use crate::tui::layout::truncate;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

const COPY_GLYPH: &str = "⧉";
const COPIED_GLYPH: &str = "✓";

/// Selection state for the history list
#[derive(Debug, Default)]
pub struct HistoryPanel {
    /// Selected row, 0 = newest
    selected: usize,
    /// Cached entry count (for bounds checking)
    len: usize,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Clamp selection to the current entry count
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// A new entry was pushed on top of the list
    ///
    /// While the user is browsing, the selection follows the row it was on.
    pub fn on_prepend(&mut self, browsing: bool) {
        if browsing && self.len > 0 {
            self.selected += 1;
        }
        self.len += 1;
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }
}

impl Interactive for HistoryPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.len.saturating_sub(1),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> &'static str {
        "↑↓:select  Enter/y:copy  Esc:input  q:quit"
    }
}

/// Render the history card
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::History;

    // Borders plus the leading "🔗 " and trailing " ⧉"
    let url_width = area.width.saturating_sub(2 + 3 + 2) as usize;

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|entry| {
            let glyph = if app.feedback.is_showing(&entry.shortened_url) {
                Span::styled(COPIED_GLYPH, Style::default().fg(theme.success))
            } else {
                Span::styled(COPY_GLYPH, Style::default().fg(theme.muted))
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw("🔗 "),
                    Span::styled(
                        truncate(&entry.long_url, url_width),
                        Style::default().fg(theme.foreground),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(
                        truncate(&entry.shortened_url, url_width),
                        Style::default().fg(theme.accent),
                    ),
                    Span::raw(" "),
                    glyph,
                ]),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.card_border(focused)))
        .title(Span::styled(
            " Your Shortened URLs ",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            " A history of your recently shortened URLs. ",
            Style::default().fg(theme.muted),
        )));

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.history_panel.selected()));
    }
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut panel = HistoryPanel::new();
        panel.sync(3);

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected(), 0);

        panel.handle_key(key(KeyCode::End));
        assert_eq!(panel.selected(), 2);
        panel.handle_key(key(KeyCode::Char('j')));
        assert_eq!(panel.selected(), 2);

        panel.sync(1);
        assert_eq!(panel.selected(), 0);
    }

    #[test]
    fn prepend_while_browsing_keeps_row() {
        let mut panel = HistoryPanel::new();
        panel.sync(2);
        panel.handle_key(key(KeyCode::Down));

        panel.on_prepend(true);
        assert_eq!(panel.selected(), 2);

        panel.reset();
        panel.on_prepend(false);
        assert_eq!(panel.selected(), 0);
    }

    #[test]
    fn unrelated_keys_bubble() {
        let mut panel = HistoryPanel::new();
        assert_eq!(panel.handle_key(key(KeyCode::Char('y'))), Handled::No);
    }
}
