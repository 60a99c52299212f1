//! Turns a [`MenuDocument`] into a [`MenuNode`] tree.

use std::rc::Rc;

use crate::actions::ActionRegistry;
use crate::document::{ItemDocument, MenuDocument};
use crate::error::{MenuError, MenuResult};
use crate::menu::{MenuEntry, MenuNode};

/// Build the menu tree described by `document`.
///
/// Every node of the result shares `actions`. Building fails with
/// [`MenuError::ActionRegistryUnavailable`] when an item that is not a
/// submenu names an action but no registry is given. Whether the named
/// actions exist in the registry is only checked when they are invoked.
pub fn build(document: &MenuDocument, actions: Option<Rc<ActionRegistry>>) -> MenuResult<MenuNode> {
    let node = build_node(document, actions.as_ref())?;
    tracing::debug!(
        title = %node.title(),
        nodes = node.node_count(),
        "built menu tree"
    );
    Ok(node)
}

fn build_node(
    document: &MenuDocument,
    actions: Option<&Rc<ActionRegistry>>,
) -> MenuResult<MenuNode> {
    let mut node = MenuNode::new(&document.title);
    if let Some(actions) = actions {
        node = node.with_actions(Rc::clone(actions));
    }
    if let Some(color) = &document.color {
        node = node.with_style(color.clone());
    }
    if let Some(banner) = &document.banner {
        node = node.with_banner(banner.clone());
    }

    for item in &document.items {
        node.add_entry(build_entry(item, actions)?);
    }

    Ok(node)
}

fn build_entry(item: &ItemDocument, actions: Option<&Rc<ActionRegistry>>) -> MenuResult<MenuEntry> {
    let entry = match (&item.submenu, &item.action) {
        (Some(submenu), action) => {
            if let Some(action) = action {
                tracing::debug!(
                    item = %item.title,
                    %action,
                    "item has both submenu and action; using submenu"
                );
            }
            MenuEntry::submenu(&item.title, build_node(submenu, actions)?)
        }
        (None, Some(action)) => {
            if actions.is_none() {
                return Err(MenuError::ActionRegistryUnavailable {
                    action: action.clone(),
                });
            }
            MenuEntry::action(&item.title, action)
        }
        (None, None) => MenuEntry::inert(&item.title),
    };

    Ok(match &item.color {
        Some(color) => entry.with_style(color.clone()),
        None => entry,
    })
}
