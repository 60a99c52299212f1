//! Declarative menu documents
//!
//! A document is the authored form of a menu tree:
//!
//! ```json
//! {
//!   "title": "Main",
//!   "banner": { "title": "Tools", "font": "standard" },
//!   "items": [
//!     { "title": "Open", "action": "open_file", "color": { "text": "GREEN" } },
//!     { "title": "More", "submenu": { "title": "More", "items": [] } }
//!   ]
//! }
//! ```
//!
//! The same structure is accepted as YAML or TOML. Unknown keys are
//! reported as [`DocumentWarning`]s instead of failing the load.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, MenuResult};
use crate::format::{self, SourceFormat};
use crate::menu::{BannerSpec, ColorSpec, EntryTarget, MenuNode};

/// A menu: title plus ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDocument {
    pub title: String,

    pub items: Vec<ItemDocument>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerSpec>,
}

/// One item of a menu. `submenu` wins over `action` when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDocument {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<MenuDocument>,
}

/// A key in the document that no field consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentWarning {
    /// Dotted path of the ignored key, e.g. `items.0.colour`
    pub path: String,
}

impl fmt::Display for DocumentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in menu document", self.path)
    }
}

impl MenuDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            color: None,
            banner: None,
        }
    }

    /// Read a document; the format follows the extension (JSON when absent).
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (document, _warnings) = Self::load_with_warnings(path)?;
        Ok(document)
    }

    /// Read a document and collect unknown-key warnings.
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<DocumentWarning>)> {
        let format = SourceFormat::from_path(path, SourceFormat::Json)?;
        let content = fs::read_to_string(path)?;
        Self::parse_with_warnings(&content, format, &path.display().to_string())
    }

    pub fn parse(content: &str, format: SourceFormat, source_name: &str) -> MenuResult<Self> {
        let (document, _warnings) = Self::parse_with_warnings(content, format, source_name)?;
        Ok(document)
    }

    pub fn parse_with_warnings(
        content: &str,
        format: SourceFormat,
        source_name: &str,
    ) -> MenuResult<(Self, Vec<DocumentWarning>)> {
        let (document, unknown) = format::deserialize_collecting_unknown(content, format)
            .map_err(|message| malformed(source_name, message))?;
        Ok((document, into_warnings(unknown)))
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> MenuResult<Self> {
        let (document, unknown): (Self, _) = format::from_value_collecting_unknown(value)
            .map_err(|message| malformed("<value>", message))?;
        for warning in into_warnings(unknown) {
            tracing::warn!("{warning}");
        }
        Ok(document)
    }

    /// Number of `{title, items}` records, counting `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| item.submenu.as_ref())
            .map(MenuDocument::node_count)
            .sum::<usize>()
    }
}

fn malformed(source_name: &str, message: String) -> MenuError {
    MenuError::DocumentMalformed {
        source_name: source_name.to_string(),
        message,
    }
}

fn into_warnings(unknown: Vec<String>) -> Vec<DocumentWarning> {
    unknown
        .into_iter()
        .map(|path| DocumentWarning { path })
        .collect()
}

impl From<&MenuNode> for MenuDocument {
    fn from(node: &MenuNode) -> Self {
        let items = node
            .entries()
            .iter()
            .map(|entry| {
                let (action, submenu) = match entry.target() {
                    EntryTarget::Action(name) => (Some(name.clone()), None),
                    EntryTarget::Submenu(child) => (None, Some(MenuDocument::from(child))),
                    EntryTarget::Inert => (None, None),
                };
                ItemDocument {
                    title: entry.title().to_string(),
                    action,
                    color: entry.style().cloned(),
                    submenu,
                }
            })
            .collect();

        Self {
            title: node.title().to_string(),
            items,
            color: node.style().cloned(),
            banner: node.banner().cloned(),
        }
    }
}
