// Title bar component
//
// Renders the app name with its tagline and the endpoint requests go to.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// The tagline is dropped on compact terminals.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let mut spans = vec![Span::styled(
        " ✂ URL Shortener",
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    )];
    if bp.at_least(Breakpoint::Normal) {
        spans.push(Span::styled(
            " ──── Shorten your long URLs with ease and professionalism.",
            Style::default().fg(theme.muted),
        ));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.title));
    if bp.at_least(Breakpoint::Wide) {
        block = block.title_top(Line::from(format!(" {} ", app.endpoint)).right_aligned());
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
