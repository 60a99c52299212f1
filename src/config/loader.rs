//! Configuration loading

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::env_validator::{closest_match, parse_color_mode, parse_flag, EnvChoice};
use super::types::Config;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".climenu.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::ConfigMalformed {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user_config = dirs::config_dir().map(|dir| dir.join("climenu").join("config.toml"));

    let config = project_config
        .into_iter()
        .chain(user_config)
        .filter(|path| path.is_file())
        .find_map(|path| load_logged(&path))
        .unwrap_or_default();

    with_env_overrides(config)
}

/// Load one config file, logging its warnings; `None` if it cannot be used.
fn load_logged(path: &Path) -> Option<Config> {
    match load_with_warnings(path) {
        Ok((config, warnings)) => {
            tracing::debug!(path = %path.display(), "loaded config");
            for warning in &warnings {
                tracing::warn!("{warning}");
            }
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping config file");
            None
        }
    }
}

/// Apply environment variable overrides (CLIMENU_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(
        config,
        |key| std::env::var(key).ok(),
        &mut std::io::stderr(),
    )
}

pub(crate) fn apply_env_overrides<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    if let Some(raw) = get_env(EnvChoice::COLOR.var()) {
        config.output.color =
            EnvChoice::COLOR.read(&raw, parse_color_mode, config.output.color, warnings);
    }

    if let Some(raw) = get_env(EnvChoice::CLEAR_SCREEN.var()) {
        config.output.clear_screen =
            EnvChoice::CLEAR_SCREEN.read(&raw, parse_flag, config.output.clear_screen, warnings);
    }

    // A blank shell means "use the platform shell", same as unset.
    if let Some(raw) = get_env("CLIMENU_SHELL") {
        let shell = raw.trim();
        if !shell.is_empty() {
            config.actions.shell = Some(shell.to_string());
        }
    }

    if let Some(raw) = get_env(EnvChoice::PAUSE.var()) {
        config.actions.pause =
            EnvChoice::PAUSE.read(&raw, parse_flag, config.actions.pause, warnings);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "color",
        "unicode",
        "clear_screen",
        "actions",
        "shell",
        "pause",
    ];

    closest_match(unknown, CANDIDATES.iter().copied()).map(str::to_string)
}
