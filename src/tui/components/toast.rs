//! Toast notifications
//!
//! Non-blocking overlays that auto-dismiss after a configurable duration.
//! They stack upwards from the bottom-right corner on top of all other
//! content, newest at the bottom.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Most toasts shown at once; older ones are dropped first
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn glyph(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Info => "ℹ",
        }
    }
}

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    fn text(&self) -> String {
        format!("{} {}", self.kind.glyph(), self.message)
    }

    /// Render the toast into `area` (already positioned by the stack)
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let accent = match self.kind {
            ToastKind::Success => theme.success,
            ToastKind::Error => theme.error,
            ToastKind::Info => theme.info,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.text())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, area);
        f.render_widget(text, area);
    }
}

/// All live toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_VISIBLE {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Drop every expired toast
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Most recent toast, if any
    #[cfg(test)]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    /// Render the stack in the bottom-right corner of `area`
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let height = 3; // 1 line of text + 2 for borders
        let mut bottom = area.bottom().saturating_sub(1);

        for toast in self.toasts.iter().rev() {
            // Add 4 for padding and border
            let width = (toast.text().width() as u16 + 4).min(area.width.saturating_sub(4));
            if bottom < area.y + height {
                break;
            }

            let x = area.right().saturating_sub(width + 2);
            let y = bottom - height;
            toast.render(f, Rect::new(x, y, width, height), theme);
            bottom = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_follows_duration() {
        let toast = Toast::new(ToastKind::Info, "Copied to clipboard!", Duration::from_secs(3));
        let start = toast.created_at;

        assert!(!toast.is_expired_at(start + Duration::from_millis(2999)));
        assert!(toast.is_expired_at(start + Duration::from_secs(3)));
    }

    #[test]
    fn stack_keeps_only_the_newest() {
        let mut stack = ToastStack::default();
        for i in 0..(MAX_VISIBLE + 2) {
            stack.push(Toast::new(ToastKind::Success, format!("t{i}"), Duration::from_secs(3)));
        }

        assert_eq!(stack.len(), MAX_VISIBLE);
        assert_eq!(stack.iter().next().unwrap().message, "t2");
        assert_eq!(stack.latest().unwrap().message, format!("t{}", MAX_VISIBLE + 1));
    }

    #[test]
    fn prune_removes_expired() {
        let mut stack = ToastStack::default();
        stack.push(Toast::new(ToastKind::Error, "gone", Duration::ZERO));
        stack.push(Toast::new(ToastKind::Info, "stays", Duration::from_secs(60)));

        stack.prune();

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.latest().unwrap().message, "stays");
    }
}
