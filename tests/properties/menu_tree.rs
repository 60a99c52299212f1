//! Property tests for building menu trees from documents.

use std::rc::Rc;

use proptest::prelude::*;

use climenu::{builder, ActionRegistry, ColorSpec, ItemDocument, MenuDocument};

fn title() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ]{1,12}").unwrap()
}

fn color() -> impl Strategy<Value = Option<ColorSpec>> {
    proptest::option::of(
        (
            proptest::option::of("(RED|light_blue|Green|PURPLE)"),
            proptest::option::of("(BLACK|white|Light-Cyan)"),
        )
            .prop_map(|(text, background)| ColorSpec { text, background }),
    )
}

fn leaf_item() -> impl Strategy<Value = ItemDocument> {
    (title(), proptest::option::of("[a-z_]{1,8}"), color()).prop_map(|(title, action, color)| {
        ItemDocument {
            title,
            action,
            color,
            submenu: None,
        }
    })
}

fn document() -> impl Strategy<Value = MenuDocument> {
    let leaf = (title(), proptest::collection::vec(leaf_item(), 0..4), color()).prop_map(
        |(title, items, color)| MenuDocument {
            title,
            items,
            color,
            banner: None,
        },
    );

    leaf.prop_recursive(4, 24, 4, |inner| {
        (
            title(),
            proptest::collection::vec(
                prop_oneof![
                    leaf_item(),
                    (title(), proptest::option::of("[a-z_]{1,8}"), inner).prop_map(
                        |(title, action, submenu)| ItemDocument {
                            title,
                            action,
                            color: None,
                            submenu: Some(submenu),
                        }
                    ),
                ],
                0..4,
            ),
            color(),
        )
            .prop_map(|(title, items, color)| MenuDocument {
                title,
                items,
                color,
                banner: None,
            })
    })
}

/// The document with every action that sits next to a submenu removed.
fn without_shadowed_actions(mut document: MenuDocument) -> MenuDocument {
    for item in &mut document.items {
        if let Some(submenu) = item.submenu.take() {
            item.action = None;
            item.submenu = Some(without_shadowed_actions(submenu));
        }
    }
    document
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One node per `{title, items}` record, entries in source order.
    #[test]
    fn property_build_preserves_shape(document in document()) {
        let root = builder::build(&document, Some(Rc::new(ActionRegistry::new()))).unwrap();

        prop_assert_eq!(root.node_count(), document.node_count());
        let titles: Vec<&str> = root.entries().iter().map(|e| e.title()).collect();
        let expected: Vec<&str> = document.items.iter().map(|i| i.title.as_str()).collect();
        prop_assert_eq!(titles, expected);
    }

    /// PROPERTY: Items with a submenu always build to submenu entries.
    #[test]
    fn property_submenu_takes_precedence(document in document()) {
        let root = builder::build(&document, Some(Rc::new(ActionRegistry::new()))).unwrap();

        for (entry, item) in root.entries().iter().zip(&document.items) {
            if item.submenu.is_some() {
                prop_assert!(entry.child().is_some());
                prop_assert!(entry.action_name().is_none());
            } else {
                prop_assert_eq!(entry.action_name(), item.action.as_deref());
            }
        }
    }

    /// PROPERTY: Converting a built tree back gives the document, minus
    /// actions shadowed by submenus.
    #[test]
    fn property_round_trip(document in document()) {
        let root = builder::build(&document, Some(Rc::new(ActionRegistry::new()))).unwrap();
        prop_assert_eq!(MenuDocument::from(&root), without_shadowed_actions(document));
    }

    /// PROPERTY: JSON serialization round-trips through the loader.
    #[test]
    fn property_json_round_trip(document in document()) {
        let json = serde_json::to_string(&document).unwrap();
        let parsed = MenuDocument::parse(&json, climenu::SourceFormat::Json, "prop").unwrap();
        prop_assert_eq!(parsed, document);
    }
}
