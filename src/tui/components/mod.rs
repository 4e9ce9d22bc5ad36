// Components module - UI building blocks of the shortener view
//
// Shell components frame the screen:
// - Title bar: App name, tagline, endpoint
// - Status bar: Focus hints, in-flight spinner
// - Logs panel: System log entries (F2)
//
// Cards hold the content:
// - Shorten card: URL field, Shorten button, result panel
// - History panel: Shortened URLs, newest first
//
// Toasts float above everything.

pub mod history_panel;
pub mod logs_panel;
pub mod shorten_card;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::{Toast, ToastKind, ToastStack};
