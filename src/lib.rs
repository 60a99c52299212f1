//! climenu - declarative, hierarchical text menus for the terminal
//!
//! A menu tree is described in a JSON, YAML or TOML document, built into a
//! [`MenuNode`] tree bound to an [`ActionRegistry`], and walked
//! interactively by an engine [`Session`](engine::Session).
//!
//! ```no_run
//! use std::rc::Rc;
//! use climenu::{builder, ActionRegistry, MenuDocument};
//! use climenu::engine::{Session, StdinSource};
//! use climenu::ui::RenderOptions;
//!
//! let document = MenuDocument::load("menu.json".as_ref())?;
//! let actions = ActionRegistry::new().with("hello", || {
//!     println!("Hello!");
//!     Ok(())
//! });
//! let root = builder::build(&document, Some(Rc::new(actions)))?;
//! let input = StdinSource::new()?;
//! Session::new(input, std::io::stdout(), RenderOptions::default()).run(&root)?;
//! # Ok::<(), climenu::MenuError>(())
//! ```

pub mod actions;
pub mod builder;
pub mod check;
pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod format;
pub mod menu;
pub mod ui;

// Re-exports for convenience
pub use actions::{ActionFile, ActionRegistry, ActionSettings, ActionWarning};
pub use config::Config;
pub use document::{DocumentWarning, ItemDocument, MenuDocument};
pub use engine::{Exit, Session};
pub use error::{MenuError, MenuResult};
pub use format::SourceFormat;
pub use menu::{BannerSpec, ColorSpec, EntryTarget, MenuEntry, MenuNode};
