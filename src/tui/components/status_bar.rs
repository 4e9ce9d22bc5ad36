// Status bar component
//
// Renders keybind hints for the focused card, with a spinner while any
// shortening request is in flight.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let activity = match app.in_flight {
        0 => String::new(),
        1 => format!("{} shortening │ ", app.spinner_char()),
        n => format!("{} shortening ×{} │ ", app.spinner_char(), n),
    };

    let globals = if bp.at_least(Breakpoint::Normal) {
        " │ F2:logs  Ctrl+C:quit"
    } else {
        ""
    };

    let status_text = format!(" {}{}{}", activity, app.focus_hint(), globals);

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
