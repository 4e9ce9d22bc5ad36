//! Clipboard access for copying shortened URLs
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Write-only clipboard
pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn set_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
