//! Shell-command actions loaded from an actions file.
//!
//! ```toml
//! [actions]
//! open_file = "xdg-open ."
//!
//! [actions.backup]
//! command = "tar czf backup.tgz data/"
//! pause = false
//! description = "Archive the data directory"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Context;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::engine::read_stdin_line;
use crate::error::{MenuError, MenuResult};
use crate::format::{self, SourceFormat};

use super::ActionRegistry;

/// One shell command bound to an action name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub command: String,

    /// Wait for Enter after the command; falls back to [`ActionSettings::pause`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CommandSpec {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            pause: None,
            description: None,
        }
    }
}

/// Table form of an action.
#[derive(Debug, Deserialize)]
struct CommandTable {
    command: String,
    #[serde(default)]
    pause: Option<bool>,
    #[serde(default)]
    description: Option<String>,
}

struct CommandSpecVisitor;

impl<'de> Visitor<'de> for CommandSpecVisitor {
    type Value = CommandSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a command string or a table with a `command` key")
    }

    fn visit_str<E: de::Error>(self, command: &str) -> Result<CommandSpec, E> {
        Ok(CommandSpec::new(command))
    }

    // The table is read straight from the map so unknown keys inside it
    // still reach the caller's ignored-key tracking.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<CommandSpec, A::Error> {
        let table = CommandTable::deserialize(MapAccessDeserializer::new(map))?;
        Ok(CommandSpec {
            command: table.command,
            pause: table.pause,
            description: table.description,
        })
    }
}

impl<'de> Deserialize<'de> for CommandSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CommandSpecVisitor)
    }
}

/// A key in the actions file that no field consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionWarning {
    /// Dotted path of the ignored key, e.g. `actions.backup.puase`
    pub path: String,
}

impl fmt::Display for ActionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in actions file", self.path)
    }
}

/// Contents of an actions file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionFile {
    #[serde(default)]
    pub actions: BTreeMap<String, CommandSpec>,
}

/// How shell actions are executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSettings {
    /// Shell program; the platform shell when `None`
    pub shell: Option<String>,
    /// Default for actions that do not set `pause`
    pub pause: bool,
}

impl Default for ActionSettings {
    fn default() -> Self {
        Self {
            shell: None,
            pause: true,
        }
    }
}

impl ActionSettings {
    /// Shell program and the flag that makes it run a command string.
    pub fn shell_invocation(&self) -> (String, &'static str) {
        match &self.shell {
            Some(shell) => {
                let flag = command_flag_for(shell);
                (shell.clone(), flag)
            }
            None if cfg!(windows) => ("cmd".to_string(), "/C"),
            None => ("sh".to_string(), "-c"),
        }
    }
}

fn command_flag_for(shell: &str) -> &'static str {
    let program = Path::new(shell)
        .file_stem()
        .map(|s| s.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match program.as_str() {
        "cmd" => "/C",
        "powershell" | "pwsh" => "-Command",
        _ => "-c",
    }
}

impl ActionFile {
    /// Parse an actions file; the format follows the extension (TOML when absent).
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (file, _unknown) = Self::load_with_warnings(path)?;
        Ok(file)
    }

    /// Parse an actions file and collect unknown-key warnings.
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ActionWarning>)> {
        let format = SourceFormat::from_path(path, SourceFormat::Toml)?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format, &path.display().to_string())
    }

    pub fn parse(
        content: &str,
        format: SourceFormat,
        source_name: &str,
    ) -> MenuResult<(Self, Vec<ActionWarning>)> {
        let (file, unknown) = format::deserialize_collecting_unknown(content, format)
            .map_err(|message| MenuError::ActionsMalformed {
                source_name: source_name.to_string(),
                message,
            })?;
        let warnings = unknown
            .into_iter()
            .map(|path| ActionWarning { path })
            .collect();
        Ok((file, warnings))
    }

    /// Build a registry whose actions run each command through the shell.
    pub fn into_registry(self, settings: &ActionSettings) -> ActionRegistry {
        let (shell, flag) = settings.shell_invocation();
        let mut registry = ActionRegistry::new();

        for (name, spec) in self.actions {
            let pause = spec.pause.unwrap_or(settings.pause);
            let shell = shell.clone();
            let command = spec.command;
            registry.register(name, move || run_shell_command(&shell, flag, &command, pause));
        }

        registry
    }
}

/// Run `command` with inherited stdio.
///
/// A non-zero exit status is reported to the user and is not an error; only a
/// shell that cannot be started fails the action.
fn run_shell_command(shell: &str, flag: &str, command: &str, pause: bool) -> anyhow::Result<()> {
    tracing::debug!(%shell, %command, "running shell action");

    let status = Command::new(shell)
        .arg(flag)
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("failed to start shell '{shell}'"))?;

    if !status.success() {
        tracing::info!(%command, code = ?status.code(), "shell action exited unsuccessfully");
        match status.code() {
            Some(code) => println!("\nCommand exited with status {code}"),
            None => println!("\nCommand was terminated by a signal"),
        }
    }

    if pause {
        wait_for_enter()?;
    }

    Ok(())
}

fn wait_for_enter() -> anyhow::Result<()> {
    print!("\nPress Enter to continue...");
    std::io::stdout().flush()?;
    read_stdin_line()?;
    Ok(())
}
