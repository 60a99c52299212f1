//! Source formats for menu documents and action files
//!
//! Both file kinds are plain serde structures; the format is picked from the
//! file extension and unknown keys are collected instead of rejected.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{MenuError, MenuResult};

/// Serialization format of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Toml,
}

impl SourceFormat {
    /// Pick the format from the file extension (case-insensitive).
    ///
    /// A path without an extension is read as `default`.
    pub fn from_path(path: &Path, default: SourceFormat) -> MenuResult<Self> {
        let Some(ext) = path.extension() else {
            return Ok(default);
        };

        match ext.to_string_lossy().to_ascii_lowercase().as_str() {
            "json" => Ok(SourceFormat::Json),
            "yaml" | "yml" => Ok(SourceFormat::Yaml),
            "toml" => Ok(SourceFormat::Toml),
            _ => Err(MenuError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceFormat::Json => "json",
            SourceFormat::Yaml => "yaml",
            SourceFormat::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// Deserialize `content`, returning the value and the dotted paths of any
/// keys the target type did not consume.
pub(crate) fn deserialize_collecting_unknown<T: DeserializeOwned>(
    content: &str,
    format: SourceFormat,
) -> Result<(T, Vec<String>), String> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let record = |p: serde_ignored::Path<'_>| unknown_paths.push(p.to_string());

    let value = match format {
        SourceFormat::Json => {
            let mut de = serde_json::Deserializer::from_str(content);
            let value: T = serde_ignored::deserialize(&mut de, record).map_err(|e| e.to_string())?;
            de.end().map_err(|e| e.to_string())?;
            value
        }
        SourceFormat::Yaml => {
            let de = serde_yaml_ng::Deserializer::from_str(content);
            serde_ignored::deserialize(de, record).map_err(|e| e.to_string())?
        }
        SourceFormat::Toml => {
            let de = toml::de::Deserializer::new(content);
            serde_ignored::deserialize(de, record).map_err(|e| e.to_string())?
        }
    };

    Ok((value, unknown_paths))
}

/// Same as [`deserialize_collecting_unknown`] for an already-parsed JSON value.
pub(crate) fn from_value_collecting_unknown<T: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<(T, Vec<String>), String> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let parsed: T = serde_ignored::deserialize(value, |p| unknown_paths.push(p.to_string()))
        .map_err(|e| e.to_string())?;
    Ok((parsed, unknown_paths))
}
