// Theme support for the TUI
//
// Provides color palettes that can be selected via config file.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Names accepted by [`Theme::by_name`]
pub const THEME_NAMES: &[&str] = &["auto", "one-half-dark", "dracula", "nord", "gruvbox"];

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Text & Surfaces ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub title: Color,

    // ─── Shortened URLs & Controls ───────────────────────────
    /// Shortened URLs and the enabled submit button
    pub accent: Color,
    /// Disabled controls
    pub disabled: Color,

    // ─── Borders ─────────────────────────────────────────────
    pub border: Color,
    /// Border of the focused card
    pub highlight: Color,
    pub border_type: BorderType,

    // ─── Selection ───────────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Notification Colors ─────────────────────────────────
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub warn: Color,

    pub status_bar: Color,
}

impl Theme {
    /// Load theme by name; unknown names fall back to "auto"
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().replace(' ', "-").as_str() {
            "one-half-dark" => Self::one_half_dark(),
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "auto" => Self::auto(),
            other => {
                tracing::warn!("Unknown theme {:?}, using auto", other);
                Self::auto()
            }
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Cyan,
            accent: Color::Cyan,
            disabled: Color::DarkGray,
            border: Color::Gray,
            highlight: Color::Yellow,
            border_type: BorderType::Rounded,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            success: Color::Green,
            error: Color::Red,
            info: Color::Blue,
            warn: Color::Yellow,
            status_bar: Color::Green,
        }
    }

    /// One Half Dark
    pub fn one_half_dark() -> Self {
        Self {
            name: "one-half-dark".to_string(),
            background: Color::Rgb(40, 44, 52),
            foreground: Color::Rgb(220, 223, 228),
            muted: Color::Rgb(92, 99, 112),
            title: Color::Rgb(86, 182, 194),
            accent: Color::Rgb(97, 175, 239),
            disabled: Color::Rgb(92, 99, 112),
            border: Color::Rgb(220, 223, 228),
            highlight: Color::Rgb(229, 192, 123),
            border_type: BorderType::Plain,
            selection: Color::Rgb(71, 78, 93),
            selection_fg: Color::Rgb(220, 223, 228),
            success: Color::Rgb(152, 195, 121),
            error: Color::Rgb(224, 108, 117),
            info: Color::Rgb(97, 175, 239),
            warn: Color::Rgb(229, 192, 123),
            status_bar: Color::Rgb(220, 223, 228),
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            muted: Color::Rgb(0x62, 0x72, 0xa4),       // comment
            title: Color::Rgb(0x8b, 0xe9, 0xfd),       // cyan
            accent: Color::Rgb(0xbd, 0x93, 0xf9),      // purple
            disabled: Color::Rgb(0x44, 0x47, 0x5a),    // current line
            border: Color::Rgb(0x62, 0x72, 0xa4),      // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),   // yellow
            border_type: BorderType::Rounded,
            selection: Color::Rgb(0x44, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            success: Color::Rgb(0x50, 0xfa, 0x7b),     // green
            error: Color::Rgb(0xff, 0x55, 0x55),       // red
            info: Color::Rgb(0x8b, 0xe9, 0xfd),        // cyan
            warn: Color::Rgb(0xff, 0xb8, 0x6c),        // orange
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),  // green
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            muted: Color::Rgb(0x4c, 0x56, 0x6a),       // polar night
            title: Color::Rgb(0x88, 0xc0, 0xd0),       // frost cyan
            accent: Color::Rgb(0x81, 0xa1, 0xc1),      // frost blue
            disabled: Color::Rgb(0x4c, 0x56, 0x6a),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),   // aurora yellow
            border_type: BorderType::Plain,
            selection: Color::Rgb(0x43, 0x4c, 0x5e),
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4),
            success: Color::Rgb(0xa3, 0xbe, 0x8c),     // aurora green
            error: Color::Rgb(0xbf, 0x61, 0x6a),       // aurora red
            info: Color::Rgb(0x8f, 0xbc, 0xbb),        // frost teal
            warn: Color::Rgb(0xd0, 0x87, 0x70),        // aurora orange
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            muted: Color::Rgb(0x92, 0x83, 0x74),       // gray
            title: Color::Rgb(0x83, 0xa5, 0x98),       // aqua
            accent: Color::Rgb(0xfe, 0x80, 0x19),      // orange
            disabled: Color::Rgb(0x66, 0x5c, 0x54),
            border: Color::Rgb(0x92, 0x83, 0x74),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),   // yellow
            border_type: BorderType::Thick,
            selection: Color::Rgb(0x50, 0x49, 0x45),
            selection_fg: Color::Rgb(0xfb, 0xf1, 0xc7),
            success: Color::Rgb(0xb8, 0xbb, 0x26),     // green
            error: Color::Rgb(0xfb, 0x49, 0x34),       // red
            info: Color::Rgb(0x83, 0xa5, 0x98),        // aqua
            warn: Color::Rgb(0xfe, 0x80, 0x19),
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),
        }
    }

    /// Border color for a card depending on focus
    pub fn card_border(&self, focused: bool) -> Color {
        if focused {
            self.highlight
        } else {
            self.border
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
