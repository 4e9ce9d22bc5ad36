//! Contracts shared by interactive UI pieces
//!
//! The App routes each key to whatever has focus. Focused pieces implement
//! [`Interactive`] and report whether they consumed the key; anything they
//! don't handle bubbles back up to the App's global keys.

mod interactive;

pub use interactive::{Handled, Interactive};
