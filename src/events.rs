// Events that flow from background tasks back into the TUI loop
//
// Work that finishes off the UI task (a shortening request, a feedback timer)
// reports here instead of touching App state directly. The event loop drains
// the channel alongside keyboard input.

use crate::shortener::{ShortenError, ShortenResponse};
use tokio::sync::mpsc;

/// Something that finished in the background
#[derive(Debug)]
pub enum AppEvent {
    /// A shortening request settled, successfully or not
    ShortenSettled {
        /// The long URL exactly as it was submitted
        long_url: String,
        result: Result<ShortenResponse, ShortenError>,
    },

    /// A copy-feedback timer fired
    ///
    /// `generation` identifies which copy scheduled it, so a timer from an
    /// older copy can't clear feedback for a newer one.
    CopyFeedbackExpired { generation: u64 },
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// Create the channel background tasks report through
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
