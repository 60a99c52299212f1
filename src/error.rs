//! Error types for climenu
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for climenu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for climenu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// The menu document lacks required structure (`title`, `items`, ...)
    #[error("malformed menu document {source_name}: {message}")]
    DocumentMalformed {
        source_name: String,
        message: String,
    },

    /// The actions file is not a valid action table
    #[error("malformed actions file {source_name}: {message}")]
    ActionsMalformed {
        source_name: String,
        message: String,
    },

    /// An entry references an action but no registry is bound to the tree
    #[error("action '{action}' is referenced but no action registry was supplied")]
    ActionRegistryUnavailable { action: String },

    /// The registry has no action with this name
    #[error("action '{name}' not found in the action registry")]
    ActionNotFound { name: String },

    /// The action ran and reported a failure
    #[error("action '{name}' failed: {source:#}")]
    ActionFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// A config file exists but is not valid TOML for the config schema
    #[error("invalid config file {}: {message}", file.display())]
    ConfigMalformed { file: PathBuf, message: String },

    /// File extension does not map to a known format
    #[error("unsupported file format: {} (expected .json, .yaml, .yml or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
