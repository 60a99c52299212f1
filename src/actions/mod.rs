//! Action registry
//!
//! Maps action names to zero-argument callables. Hosts register Rust closures
//! directly; the CLI fills the registry from an actions file of shell
//! commands (see [`command`]).

pub mod command;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{MenuError, MenuResult};

pub use command::{ActionFile, ActionSettings, ActionWarning, CommandSpec};

/// A registered action. Failures are reported through `anyhow` so hosts can
/// return whatever error type they already use.
pub type ActionFn = Box<dyn Fn() -> anyhow::Result<()>>;

/// Named capability set shared by every node of a menu tree.
#[derive(Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, ActionFn>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` under `name`, replacing any earlier registration.
    pub fn register<F>(&mut self, name: impl Into<String>, action: F) -> &mut Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        let name = name.into();
        if self.actions.insert(name.clone(), Box::new(action)).is_some() {
            tracing::debug!(action = %name, "replaced existing action registration");
        }
        self
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.register(name, action);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Look up `name` and invoke it.
    pub fn invoke(&self, name: &str) -> MenuResult<()> {
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| MenuError::ActionNotFound {
                name: name.to_string(),
            })?;

        tracing::debug!(action = %name, "invoking action");
        action().map_err(|source| MenuError::ActionFailed {
            name: name.to_string(),
            source,
        })
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.actions.keys()).finish()
    }
}
