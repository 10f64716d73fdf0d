// Theme support for the TUI
//
// Named palettes selected via config. "classic" is the game-show blue board,
// "midnight" a dark true-color palette, "mono" sticks to the terminal's ANSI
// colors for low-color terminals.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Board cells
    pub board_bg: Color,
    pub header: Color,
    pub placeholder: Color,
    pub question: Color,
    pub answer: Color,
    pub stale: Color,
    pub cursor: Color,

    // Chrome
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub error: Color,
    pub muted: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name (unknown names fall back to classic)
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "midnight" => Self::midnight(),
            "mono" => Self::mono(),
            _ => Self::classic(),
        }
    }

    /// Names accepted by [`Theme::by_name`]
    pub fn names() -> &'static [&'static str] {
        &["classic", "midnight", "mono"]
    }

    /// Blue board with gold dollar-value text
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            board_bg: Color::Rgb(0x06, 0x0c, 0xe9), // board blue
            header: Color::White,
            placeholder: Color::Rgb(0xd6, 0x9f, 0x4c), // gold
            question: Color::White,
            answer: Color::Rgb(0xff, 0xcc, 0x00),
            stale: Color::Rgb(0xff, 0x6b, 0x6b),
            cursor: Color::Rgb(0xff, 0xcc, 0x00),
            background: Color::Rgb(0x00, 0x00, 0x33),
            foreground: Color::White,
            title: Color::Rgb(0xff, 0xcc, 0x00),
            border: Color::Rgb(0x5a, 0x6b, 0xff),
            highlight: Color::Rgb(0xff, 0xcc, 0x00),
            error: Color::Rgb(0xff, 0x6b, 0x6b),
            muted: Color::Rgb(0x9a, 0xa5, 0xd1),
            border_type: BorderType::Rounded,
        }
    }

    /// Dark true-color palette
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            board_bg: Color::Rgb(0x1a, 0x1b, 0x26),
            header: Color::Rgb(0x7a, 0xa2, 0xf7),    // blue
            placeholder: Color::Rgb(0x56, 0x5f, 0x89), // comment
            question: Color::Rgb(0xc0, 0xca, 0xf5),
            answer: Color::Rgb(0x9e, 0xce, 0x6a), // green
            stale: Color::Rgb(0xf7, 0x76, 0x8e),  // red
            cursor: Color::Rgb(0xe0, 0xaf, 0x68), // yellow
            background: Color::Rgb(0x16, 0x16, 0x1e),
            foreground: Color::Rgb(0xc0, 0xca, 0xf5),
            title: Color::Rgb(0xbb, 0x9a, 0xf7), // purple
            border: Color::Rgb(0x41, 0x48, 0x68),
            highlight: Color::Rgb(0xe0, 0xaf, 0x68),
            error: Color::Rgb(0xf7, 0x76, 0x8e),
            muted: Color::Rgb(0x56, 0x5f, 0x89),
            border_type: BorderType::Plain,
        }
    }

    /// Terminal ANSI palette only
    pub fn mono() -> Self {
        Self {
            name: "mono".to_string(),
            board_bg: Color::Reset,
            header: Color::Cyan,
            placeholder: Color::DarkGray,
            question: Color::White,
            answer: Color::Green,
            stale: Color::Red,
            cursor: Color::Yellow,
            background: Color::Reset,
            foreground: Color::Reset,
            title: Color::Cyan,
            border: Color::Gray,
            highlight: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
