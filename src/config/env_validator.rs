//! Validation of `CLIMENU_*` environment values.
//!
//! A rejected value never aborts startup: the setting keeps its previous
//! value and a warning naming the closest accepted spelling goes to the
//! given writer.

use std::io::Write;

use super::types::ColorMode;

/// Accepted spellings for one environment variable.
#[derive(Debug, Clone, Copy)]
pub(super) struct EnvChoice {
    var: &'static str,
    accepted: &'static [&'static str],
}

const BOOL_SPELLINGS: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

impl EnvChoice {
    pub const COLOR: EnvChoice = EnvChoice::new("CLIMENU_COLOR", &["auto", "always", "never"]);
    pub const CLEAR_SCREEN: EnvChoice = EnvChoice::new("CLIMENU_CLEAR_SCREEN", BOOL_SPELLINGS);
    pub const PAUSE: EnvChoice = EnvChoice::new("CLIMENU_PAUSE", BOOL_SPELLINGS);

    pub const fn new(var: &'static str, accepted: &'static [&'static str]) -> Self {
        Self { var, accepted }
    }

    pub fn var(&self) -> &'static str {
        self.var
    }

    /// Parse `raw`; on rejection warn and keep `current`.
    pub fn read<T, W: Write>(
        &self,
        raw: &str,
        parse: impl Fn(&str) -> Option<T>,
        current: T,
        warnings: &mut W,
    ) -> T {
        if let Some(value) = parse(raw) {
            return value;
        }

        let hint = closest_match(&raw.trim().to_lowercase(), self.accepted.iter().copied())
            .map(|s| format!(". Did you mean '{s}'?"))
            .unwrap_or_default();
        let _ = writeln!(warnings, "Warning: Invalid {} value '{raw}'{hint}", self.var);
        let _ = writeln!(warnings, "Valid values: {}", self.accepted.join(", "));
        current
    }
}

pub(super) fn parse_color_mode(value: &str) -> Option<ColorMode> {
    match value.trim().to_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

pub(super) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Closest candidate within two edits of `input`; exact matches are not
/// suggestions.
pub(super) fn closest_match<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .map(|candidate| (candidate, edit_distance(input, candidate)))
        .filter(|(_, dist)| (1..=2).contains(dist))
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != *cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
