//! Menu tree data structure.
//!
//! A `MenuNode` owns its entries and each submenu entry owns its child node,
//! so a tree is acyclic by construction. The action registry is the only
//! shared piece: every node of one tree holds the same `Rc`.

use std::rc::Rc;

use crate::actions::ActionRegistry;

use super::style::{BannerSpec, ColorSpec};

/// What selecting an entry does.
#[derive(Debug)]
pub enum EntryTarget {
    /// Invoke the named action from the tree's registry
    Action(String),
    /// Descend into a child menu
    Submenu(MenuNode),
    /// Placeholder entry; selecting it does nothing
    Inert,
}

/// One selectable line of a menu.
#[derive(Debug)]
pub struct MenuEntry {
    title: String,
    target: EntryTarget,
    style: Option<ColorSpec>,
}

impl MenuEntry {
    pub fn new(title: impl Into<String>, target: EntryTarget) -> Self {
        Self {
            title: title.into(),
            target,
            style: None,
        }
    }

    pub fn action(title: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(title, EntryTarget::Action(name.into()))
    }

    pub fn submenu(title: impl Into<String>, node: MenuNode) -> Self {
        Self::new(title, EntryTarget::Submenu(node))
    }

    pub fn inert(title: impl Into<String>) -> Self {
        Self::new(title, EntryTarget::Inert)
    }

    pub fn with_style(mut self, style: ColorSpec) -> Self {
        self.style = Some(style);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target(&self) -> &EntryTarget {
        &self.target
    }

    pub fn style(&self) -> Option<&ColorSpec> {
        self.style.as_ref()
    }

    /// Action name, if this entry is bound to one.
    pub fn action_name(&self) -> Option<&str> {
        match &self.target {
            EntryTarget::Action(name) => Some(name),
            _ => None,
        }
    }

    /// Child menu, if this entry descends into one.
    pub fn child(&self) -> Option<&MenuNode> {
        match &self.target {
            EntryTarget::Submenu(node) => Some(node),
            _ => None,
        }
    }
}

/// A titled menu holding an ordered list of entries.
#[derive(Debug)]
pub struct MenuNode {
    title: String,
    entries: Vec<MenuEntry>,
    actions: Option<Rc<ActionRegistry>>,
    style: Option<ColorSpec>,
    banner: Option<BannerSpec>,
}

impl MenuNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            actions: None,
            style: None,
            banner: None,
        }
    }

    /// Bind the action registry shared by the whole tree.
    pub fn with_actions(mut self, actions: Rc<ActionRegistry>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn with_style(mut self, style: ColorSpec) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_banner(mut self, banner: BannerSpec) -> Self {
        self.banner = Some(banner);
        self
    }

    /// Append an entry. Only used while a tree is being built.
    pub fn add_entry(&mut self, entry: MenuEntry) {
        self.entries.push(entry);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Entry for a 1-based selection number as displayed to the user.
    pub fn entry_at(&self, number: usize) -> Option<&MenuEntry> {
        number.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn actions(&self) -> Option<&Rc<ActionRegistry>> {
        self.actions.as_ref()
    }

    pub fn style(&self) -> Option<&ColorSpec> {
        self.style.as_ref()
    }

    pub fn banner(&self) -> Option<&BannerSpec> {
        self.banner.as_ref()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .entries
            .iter()
            .filter_map(MenuEntry::child)
            .map(MenuNode::node_count)
            .sum::<usize>()
    }

    /// Visit every node depth-first, parents before children.
    ///
    /// The callback receives the node and the entry titles leading to it.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a MenuNode, &[&'a str])) {
        let mut path = Vec::new();
        self.walk_inner(&mut path, f);
    }

    fn walk_inner<'a>(
        &'a self,
        path: &mut Vec<&'a str>,
        f: &mut impl FnMut(&'a MenuNode, &[&'a str]),
    ) {
        f(self, path);
        for entry in &self.entries {
            if let Some(child) = entry.child() {
                path.push(entry.title());
                child.walk_inner(path, f);
                path.pop();
            }
        }
    }
}
