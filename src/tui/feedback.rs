//! Copy feedback marker
//!
//! Remembers which shortened URL was copied most recently so its copy glyph
//! can show a check mark for a short while. The clearing timer is a spawned
//! task owned by this struct: copying again aborts the previous timer, and
//! dropping the marker aborts whatever is pending.

use crate::events::{AppEvent, EventSender};
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct CopyFeedback {
    /// Shortened URL currently showing "copied"
    target: Option<String>,
    /// Bumped on every copy; timers carry the value they were scheduled with
    generation: u64,
    timer: Option<JoinHandle<()>>,
    delay: Duration,
}

impl CopyFeedback {
    pub fn new(delay: Duration) -> Self {
        Self {
            target: None,
            generation: 0,
            timer: None,
            delay,
        }
    }

    /// Mark `text` as copied and (re)start the clearing timer
    pub fn mark(&mut self, text: &str, events: &EventSender) {
        self.cancel_timer();
        self.generation += 1;
        self.target = Some(text.to_string());

        let generation = self.generation;
        let delay = self.delay;
        let events = events.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::CopyFeedbackExpired { generation });
        }));
    }

    /// Clear the marker if `generation` is the latest copy
    ///
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.target.is_none() {
            return false;
        }
        self.target = None;
        self.timer = None;
        true
    }

    #[cfg(test)]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Whether `text` is the string currently showing feedback
    pub fn is_showing(&self, text: &str) -> bool {
        self.target.as_deref() == Some(text)
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
