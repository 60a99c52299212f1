//! Banner rendering
//!
//! A banner is a title + font name attached to a menu (normally the root).
//! Rendering is pluggable through [`BannerRenderer`]; the built-in
//! [`BoxBanner`] draws the title inside a border.

use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::menu::BannerSpec;
use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;
use crate::ui::RenderOptions;

/// Turns a banner spec into the text drawn above a menu title.
pub trait BannerRenderer {
    fn render(&self, banner: &BannerSpec, opts: RenderOptions) -> String;
}

/// Fonts understood by [`BoxBanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerFont {
    /// Bordered box, Unicode borders when the terminal supports them
    Standard,
    /// Bordered box with ASCII borders only
    Ascii,
    /// Title underlined with `=`
    Plain,
}

impl BannerFont {
    pub const NAMES: [&'static str; 3] = ["standard", "ascii", "plain"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(BannerFont::Standard),
            "ascii" => Some(BannerFont::Ascii),
            "plain" => Some(BannerFont::Plain),
            _ => None,
        }
    }
}

/// Built-in banner renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxBanner;

impl BannerRenderer for BoxBanner {
    fn render(&self, banner: &BannerSpec, opts: RenderOptions) -> String {
        let font = BannerFont::from_name(&banner.font).unwrap_or_else(|| {
            tracing::warn!(font = %banner.font, "unknown banner font; using 'standard'");
            BannerFont::Standard
        });

        let lines: Vec<&str> = if banner.title.is_empty() {
            vec![""]
        } else {
            banner.title.lines().collect()
        };

        match font {
            BannerFont::Standard => boxed(&lines, opts.color, opts.unicode),
            BannerFont::Ascii => boxed(&lines, opts.color, false),
            BannerFont::Plain => underlined(&lines),
        }
    }
}

fn boxed(lines: &[&str], supports_color: bool, supports_unicode: bool) -> String {
    const PADDING: usize = 2;

    let text_width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let inner_width = text_width + PADDING * 2;

    let h = BorderChar::Horizontal.render(supports_unicode);
    let v = BorderChar::Vertical.render(supports_unicode);
    let top = format!(
        "{}{}{}",
        BorderChar::TopLeft.render(supports_unicode),
        h.repeat(inner_width),
        BorderChar::TopRight.render(supports_unicode)
    );
    let bottom = format!(
        "{}{}{}",
        BorderChar::BottomLeft.render(supports_unicode),
        h.repeat(inner_width),
        BorderChar::BottomRight.render(supports_unicode)
    );

    let mut out = String::new();
    out.push_str(&color_border(&top, supports_color));
    out.push('\n');

    let mut push_row = |content: &str| {
        let w = visible_width(content);
        let left = (inner_width - w) / 2;
        let right = inner_width - w - left;
        out.push_str(&color_border(v, supports_color));
        out.push_str(&" ".repeat(left));
        out.push_str(content);
        out.push_str(&" ".repeat(right));
        out.push_str(&color_border(v, supports_color));
        out.push('\n');
    };

    push_row("");
    for line in lines {
        push_row(line);
    }
    push_row("");

    out.push_str(&color_border(&bottom, supports_color));
    out.push('\n');
    out
}

fn underlined(lines: &[&str]) -> String {
    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&"=".repeat(width));
    out.push('\n');
    out
}

fn color_border(s: &str, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }
    format!("{}", s.with(theme::colors::INFO))
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
