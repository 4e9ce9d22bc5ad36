// Shorten card component
//
// The "Create Short URL" card: URL field, Shorten button and, once something
// has been shortened, the result panel with its copy control.

use crate::tui::app::{App, Focus};
use crate::tui::input::UrlInput;
use crate::tui::layout::truncate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACEHOLDER: &str = "Enter long URL";
const COPY_LABEL: &str = "[ Copy ]";
const COPIED_LABEL: &str = "[ Copied ✓ ]";

/// Rows the card needs, borders included
pub fn height(app: &App) -> u16 {
    let result = if app.current.is_some() { 3 } else { 0 };
    // borders + description + field + button
    2 + 1 + 3 + 1 + result
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let card_focused = matches!(app.focus, Focus::Input | Focus::Result);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.card_border(card_focused)))
        .title(Span::styled(
            " Create Short URL ",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [desc_area, field_area, button_area, result_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(" Enter a long URL to generate a shortened version.")
            .style(Style::default().fg(theme.muted)),
        desc_area,
    );

    render_field(f, field_area, app);
    render_button(f, button_area, app);

    if let Some(short) = &app.current {
        render_result(f, result_area, app, short);
    }
}

fn render_field(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Input;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.card_border(focused)));
    let inner = block.inner(area);

    let (text, cursor_x) = scroll_to_cursor(&app.input, inner.width as usize);
    let line = if app.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.disabled)))
    } else {
        Line::from(Span::styled(text, Style::default().fg(theme.foreground)))
    };

    f.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        f.set_cursor_position((inner.x + cursor_x as u16, inner.y));
    }
}

/// Visible slice of the field and the cursor column within it
///
/// Leading chars are dropped until the cursor fits inside `width`.
fn scroll_to_cursor(input: &UrlInput, width: usize) -> (String, usize) {
    let col = input.cursor_column();
    if width == 0 || col < width {
        return (input.value().to_string(), col);
    }

    let overflow = col + 1 - width;
    let mut dropped = 0;
    let mut chars = input.value().chars();
    while dropped < overflow {
        match chars.next() {
            Some(c) => dropped += c.width().unwrap_or(0),
            None => break,
        }
    }
    (chars.collect(), col - dropped)
}

fn render_button(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let label = if app.in_flight > 0 {
        format!("[ {} Shortening… ]", app.spinner_char())
    } else {
        "[ Shorten ]".to_string()
    };

    let style = if app.can_submit() {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.disabled)
    };

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(label, style)])),
        area,
    );
}

fn render_result(f: &mut Frame, area: Rect, app: &App, short: &str) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Result;

    let copy = if app.feedback.is_showing(short) {
        Span::styled(COPIED_LABEL, Style::default().fg(theme.success))
    } else {
        Span::styled(COPY_LABEL, Style::default().fg(theme.foreground))
    };

    // Borders, the gap and the widest copy label stay visible
    let budget = (area.width as usize).saturating_sub(2 + 2 + COPIED_LABEL.width());

    let line = Line::from(vec![
        Span::styled(
            truncate(short, budget),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        copy,
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.card_border(focused)))
        .title(Span::styled(" Short URL ", Style::default().fg(theme.muted)));

    f.render_widget(Paragraph::new(line).block(block), area);
}
