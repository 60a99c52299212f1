//! Resolution of document color specs into terminal styling.

use crossterm::style::Stylize;

use crate::menu::ColorSpec;
use crate::ui::theme::{ColorName, UnknownColor};

/// Concrete foreground/background pair for a styled title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: ColorName,
    pub background: ColorName,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: ColorName::White,
            background: ColorName::Black,
        }
    }
}

impl Palette {
    pub fn paint(&self, text: &str) -> String {
        format!(
            "{}",
            text.with(self.text.color()).on(self.background.color())
        )
    }
}

/// Resolve a color spec, defaulting a missing text color to WHITE and a
/// missing background to BLACK.
pub fn resolve(spec: &ColorSpec) -> Result<Palette, UnknownColor> {
    let defaults = Palette::default();
    let text = match &spec.text {
        Some(name) => name.parse()?,
        None => defaults.text,
    };
    let background = match &spec.background {
        Some(name) => name.parse()?,
        None => defaults.background,
    };
    Ok(Palette { text, background })
}

/// Render a title with its optional color spec.
///
/// Titles without a spec are never styled. An unresolvable spec is logged
/// and the title is drawn plain.
pub fn styled_title(title: &str, spec: Option<&ColorSpec>, supports_color: bool) -> String {
    let Some(spec) = spec else {
        return title.to_string();
    };
    if !supports_color {
        return title.to_string();
    }

    match resolve(spec) {
        Ok(palette) => palette.paint(title),
        Err(err) => {
            tracing::warn!(%title, "{err}; drawing title without color");
            title.to_string()
        }
    }
}
