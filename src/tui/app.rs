// TUI application state
//
// Owns everything the URL Shortener View shows: the draft URL, the latest
// result, the session history, copy feedback and notifications. Keyboard
// input and settled background work both end up as method calls here; the
// event loop only routes.

use super::clipboard::ClipboardSink;
use super::components::history_panel::HistoryPanel;
use super::components::{Toast, ToastKind, ToastStack};
use super::feedback::CopyFeedback;
use super::input::UrlInput;
use super::traits::Interactive;
use crate::config::Config;
use crate::events::{AppEvent, EventSender};
use crate::history::{History, HistoryEntry};
use crate::logging::LogBuffer;
use crate::shortener::{Metadata, Session, ShortenError, ShortenRequest, ShortenResponse, Shortener};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

pub const MSG_SHORTENED: &str = "Short URL generated successfully!";
pub const MSG_SHORTEN_FAILED: &str = "Failed to generate short URL";
pub const MSG_COPIED: &str = "Copied to clipboard!";

/// Which card receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Result,
    History,
}

/// Collaborators the view talks to
pub struct Services {
    pub shortener: Arc<dyn Shortener>,
    pub clipboard: Box<dyn ClipboardSink>,
    pub events: EventSender,
    pub log_buffer: LogBuffer,
}

/// Main application state for the TUI
pub struct App {
    /// Draft long URL
    pub input: UrlInput,

    /// Most recent successful result
    pub current: Option<String>,

    /// Every successful result this session, newest first
    pub history: History,

    /// Selection within the history list
    pub history_panel: HistoryPanel,

    /// Which shortened URL is showing "copied"
    pub feedback: CopyFeedback,

    pub toasts: ToastStack,

    pub focus: Focus,

    /// Requests sent but not yet settled
    pub in_flight: usize,

    /// Whether the system log panel is visible
    pub show_logs: bool,

    pub log_buffer: LogBuffer,

    pub theme: Theme,

    /// Where requests go, for the title bar
    pub endpoint: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Animation frame counter (for the in-flight spinner)
    animation_frame: usize,

    session: Session,
    metadata: Metadata,
    single_flight: bool,
    toast_duration: Duration,
    shortener: Arc<dyn Shortener>,
    clipboard: Box<dyn ClipboardSink>,
    events: EventSender,
}

impl App {
    pub fn new(config: &Config, services: Services) -> Self {
        let theme = Theme::by_name(&config.theme);
        tracing::debug!("Using theme {}", theme.name);

        Self {
            input: UrlInput::new(),
            current: None,
            history: History::new(),
            history_panel: HistoryPanel::new(),
            feedback: CopyFeedback::new(config.ui.copy_feedback()),
            toasts: ToastStack::default(),
            focus: Focus::Input,
            in_flight: 0,
            show_logs: config.ui.show_logs,
            log_buffer: services.log_buffer,
            theme,
            endpoint: services.shortener.describe(),
            should_quit: false,
            animation_frame: 0,
            session: config.session(),
            metadata: config.metadata.clone(),
            single_flight: config.single_flight,
            toast_duration: config.ui.toast_duration(),
            shortener: services.shortener,
            clipboard: services.clipboard,
            events: services.events,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Shortening
    // ─────────────────────────────────────────────────────────────────────

    /// Whether the Shorten button is enabled
    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !(self.single_flight && self.in_flight > 0)
    }

    /// Send the draft URL to the shortening endpoint
    ///
    /// Returns false (and does nothing) while the button is disabled. The
    /// outcome arrives later as [`AppEvent::ShortenSettled`].
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        let long_url = self.input.value().to_string();
        let request = ShortenRequest::new(long_url.clone(), &self.session, &self.metadata);
        let shortener = Arc::clone(&self.shortener);
        let events = self.events.clone();

        self.in_flight += 1;
        tracing::info!("Shortening {}", long_url);

        tokio::spawn(async move {
            let result = shortener.shorten(request).await;
            let _ = events.send(AppEvent::ShortenSettled { long_url, result });
        });
        true
    }

    /// Apply the outcome of a shortening request
    pub fn on_shorten_settled(
        &mut self,
        long_url: String,
        result: Result<ShortenResponse, ShortenError>,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(response) => {
                tracing::info!("Shortened {} -> {}", long_url, response.shortened_url);
                self.current = Some(response.shortened_url.clone());
                self.history
                    .prepend(HistoryEntry::new(long_url, response.shortened_url));
                self.history_panel.on_prepend(self.focus == Focus::History);
                self.input.clear();
                self.notify(ToastKind::Success, MSG_SHORTENED);
            }
            Err(e) => {
                tracing::error!("Error shortening {}: {}", long_url, e);
                self.notify(ToastKind::Error, MSG_SHORTEN_FAILED);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────────────

    /// Copy `text` and show feedback for it
    ///
    /// The notification is shown whether or not the clipboard write worked.
    pub fn copy(&mut self, text: &str) {
        if let Err(e) = self.clipboard.set_text(text) {
            tracing::warn!("Clipboard write failed: {:#}", e);
        }
        self.feedback.mark(text, &self.events);
        self.notify(ToastKind::Info, MSG_COPIED);
    }

    /// What the copy key would copy right now
    pub fn copy_target(&self) -> Option<String> {
        match self.focus {
            Focus::Input => None,
            Focus::Result => self.current.clone(),
            Focus::History => self
                .history
                .get(self.history_panel.selected())
                .map(|e| e.shortened_url.clone()),
        }
    }

    fn copy_focused(&mut self) {
        if let Some(text) = self.copy_target() {
            self.copy(&text);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Background events & ticks
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ShortenSettled { long_url, result } => {
                self.on_shorten_settled(long_url, result)
            }
            AppEvent::CopyFeedbackExpired { generation } => {
                self.feedback.expire(generation);
            }
        }
    }

    /// Periodic redraw tick
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.toasts.prune();
    }

    pub fn notify(&mut self, kind: ToastKind, message: &str) {
        self.toasts
            .push(Toast::new(kind, message, self.toast_duration));
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    /// Focus targets that currently exist on screen, in Tab order
    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::Input];
        if self.current.is_some() {
            ring.push(Focus::Result);
        }
        if !self.history.is_empty() {
            ring.push(Focus::History);
        }
        ring
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        let len = self.focus_ring().len();
        self.cycle_focus(len.saturating_sub(1));
    }

    fn cycle_focus(&mut self, step: usize) {
        let ring = self.focus_ring();
        let idx = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(ring[(idx + step) % ring.len()]);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::History && self.focus != Focus::History {
            self.history_panel.reset();
        }
        self.focus = focus;
    }

    /// Status bar hint for the focused card
    pub fn focus_hint(&self) -> &'static str {
        match self.focus {
            Focus::Input => self.input.focus_hint(),
            Focus::Result => "Enter/y:copy  Tab:next  Esc:input  q:quit",
            Focus::History => self.history_panel.focus_hint(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    /// Handle keyboard input
    /// Layered dispatch: Global → Focus navigation → Focused card → Card actions
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // Layer 1: global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(2) => {
                self.show_logs = !self.show_logs;
                return;
            }
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return;
            }
            KeyCode::Esc => {
                self.set_focus(Focus::Input);
                return;
            }
            _ => {}
        }

        // Layer 2: focused card
        match self.focus {
            Focus::Input => {
                if key.code == KeyCode::Enter {
                    self.submit();
                } else {
                    self.input.handle_key(key);
                }
            }
            Focus::Result | Focus::History => {
                if self.focus == Focus::History && self.history_panel.handle_key(key).was_handled()
                {
                    return;
                }
                match key.code {
                    KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('c') => {
                        self.copy_focused()
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                    _ => {}
                }
            }
        }
    }

    /// Bracketed paste always lands in the URL field
    pub fn handle_paste(&mut self, text: &str) {
        self.set_focus(Focus::Input);
        self.input.insert_str(text);
    }

    /// Sync panel bounds with current data (call before render)
    pub fn sync(&mut self) {
        self.history_panel.sync(self.history.len());
        if !self.focus_ring().contains(&self.focus) {
            self.focus = Focus::Input;
        }
    }
}
