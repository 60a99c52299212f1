//! Configuration for climenu
//!
//! Settings are layered, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (CLIMENU_*)
//! 3. Project config (./.climenu.toml)
//! 4. User config (<config dir>/climenu/config.toml)
//! 5. Built-in defaults

mod env_validator;
mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ActionsConfig, ColorMode, Config, OutputConfig};
