//! Per-session render options resolved from CLI flags, config and the
//! terminal.

use crate::cli::ColorWhen;
use crate::config::{ColorMode, Config};
use crate::ui::terminal::TerminalCapabilities;

/// How menus are drawn for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub unicode: bool,
    pub clear_screen: bool,
}

impl RenderOptions {
    pub fn new(cli_color: Option<ColorWhen>, cli_no_clear: bool, config: &Config) -> Self {
        let caps = TerminalCapabilities::detect();
        Self::from_caps(cli_color, cli_no_clear, config, caps)
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        cli_no_clear: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        // Clearing only makes sense on a real terminal.
        let clear_screen = !cli_no_clear && config.output.clear_screen && caps.is_tty;

        Self {
            color,
            unicode,
            clear_screen,
        }
    }
}
