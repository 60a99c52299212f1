//! Display hints carried by menus and entries.
//!
//! These are structural only: color names stay as authored and are resolved
//! by the display layer (`ui::style`).

use serde::{Deserialize, Serialize};

/// Foreground/background color names for a title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl ColorSpec {
    pub fn new(text: Option<&str>, background: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            background: background.map(str::to_string),
        }
    }
}

/// Banner drawn above a menu title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerSpec {
    #[serde(default)]
    pub title: String,

    #[serde(default = "default_font")]
    pub font: String,
}

impl BannerSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            font: default_font(),
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}

/// Font used when a banner does not name one.
pub const DEFAULT_FONT: &str = "standard";

fn default_font() -> String {
    DEFAULT_FONT.to_string()
}
