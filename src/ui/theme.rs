use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;

/// Semantic colors used by climenu's own messages (notices, check reports).
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// ColorName - symbolic colors accepted in menu documents
// ----------------------------------------------------------------------------

/// Symbolic color accepted in a menu document's `color` block.
///
/// Plain names map to the standard ANSI palette (SGR 30-37 / 40-47),
/// `LIGHT_*` names to the bright palette (SGR 90-97 / 100-107).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Red,
    LightRed,
    Blue,
    LightBlue,
    Yellow,
    LightYellow,
    Green,
    LightGreen,
    Cyan,
    LightCyan,
    Magenta,
    LightMagenta,
    Black,
    LightBlack,
    White,
    LightWhite,
}

impl ColorName {
    pub const ALL: [ColorName; 16] = [
        ColorName::Red,
        ColorName::LightRed,
        ColorName::Blue,
        ColorName::LightBlue,
        ColorName::Yellow,
        ColorName::LightYellow,
        ColorName::Green,
        ColorName::LightGreen,
        ColorName::Cyan,
        ColorName::LightCyan,
        ColorName::Magenta,
        ColorName::LightMagenta,
        ColorName::Black,
        ColorName::LightBlack,
        ColorName::White,
        ColorName::LightWhite,
    ];

    /// Canonical upper-case spelling, as written in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Red => "RED",
            ColorName::LightRed => "LIGHT_RED",
            ColorName::Blue => "BLUE",
            ColorName::LightBlue => "LIGHT_BLUE",
            ColorName::Yellow => "YELLOW",
            ColorName::LightYellow => "LIGHT_YELLOW",
            ColorName::Green => "GREEN",
            ColorName::LightGreen => "LIGHT_GREEN",
            ColorName::Cyan => "CYAN",
            ColorName::LightCyan => "LIGHT_CYAN",
            ColorName::Magenta => "MAGENTA",
            ColorName::LightMagenta => "LIGHT_MAGENTA",
            ColorName::Black => "BLACK",
            ColorName::LightBlack => "LIGHT_BLACK",
            ColorName::White => "WHITE",
            ColorName::LightWhite => "LIGHT_WHITE",
        }
    }

    /// Terminal color for this name.
    pub fn color(&self) -> Color {
        match self {
            ColorName::Red => Color::DarkRed,
            ColorName::LightRed => Color::Red,
            ColorName::Blue => Color::DarkBlue,
            ColorName::LightBlue => Color::Blue,
            ColorName::Yellow => Color::DarkYellow,
            ColorName::LightYellow => Color::Yellow,
            ColorName::Green => Color::DarkGreen,
            ColorName::LightGreen => Color::Green,
            ColorName::Cyan => Color::DarkCyan,
            ColorName::LightCyan => Color::Cyan,
            ColorName::Magenta => Color::DarkMagenta,
            ColorName::LightMagenta => Color::Magenta,
            ColorName::Black => Color::Black,
            ColorName::LightBlack => Color::DarkGrey,
            ColorName::White => Color::Grey,
            ColorName::LightWhite => Color::White,
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color name that is not in [`ColorName::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color '{}'", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for ColorName {
    type Err = UnknownColor;

    /// Case-insensitive; `-` and spaces are accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(|c: char| c == '-' || c == ' ', "_");
        ColorName::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
