#![no_main]

use std::rc::Rc;

use climenu::check::check_tree;
use climenu::{builder, ActionRegistry, MenuDocument, SourceFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    for format in [SourceFormat::Json, SourceFormat::Yaml, SourceFormat::Toml] {
        let Ok(document) = MenuDocument::parse(content, format, "fuzz") else {
            continue;
        };
        let root = builder::build(&document, Some(Rc::new(ActionRegistry::new())))
            .expect("build with a registry cannot fail");
        assert_eq!(root.node_count(), document.node_count());
        let _ = check_tree(&root);
    }
});
