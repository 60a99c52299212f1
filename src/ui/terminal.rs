//! What the attached terminal can display.

use std::io;

use is_terminal::IsTerminal;

/// Environment variables set by common CI services.
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
    "TEAMCITY_VERSION",
];

/// Locale variables in lookup order; the first non-empty one decides.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

/// Display features of stdout. The default assumes nothing: piped, no
/// color, ASCII only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), io::stdout().is_terminal())
    }

    pub(crate) fn from_env(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let no_color = get_env("NO_COLOR").is_some();

        Self {
            is_tty,
            supports_color: is_tty && !dumb && !no_color,
            supports_unicode: !dumb && locale_is_unicode(&get_env),
            is_ci: CI_MARKERS.iter().any(|key| get_env(key).is_some()),
        }
    }
}

/// `C` and `POSIX` locales are ASCII; anything else (or nothing) is not.
fn locale_is_unicode(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    LOCALE_VARS
        .iter()
        .filter_map(|key| get_env(key))
        .find(|value| !value.is_empty())
        .is_none_or(|value| {
            !(value.eq_ignore_ascii_case("c") || value.eq_ignore_ascii_case("posix"))
        })
}
