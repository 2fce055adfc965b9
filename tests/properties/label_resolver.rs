//! Property tests for breadcrumb labels.

use proptest::prelude::*;

use apiconsole::{resolve_label, MenuEntry, MenuTree};

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z ]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Keys missing from the tree label as themselves.
    #[test]
    fn property_unknown_key_falls_back_to_key(key in "(?s).{0,32}") {
        let tree = MenuTree::new(vec![MenuEntry::group(
            "known-group",
            "Known",
            vec![MenuEntry::leaf("known-group-leaf", "Leaf")],
        )]);
        prop_assume!(key != "known-group" && key != "known-group-leaf");
        prop_assert_eq!(resolve_label(&tree, &key), key);
    }

    /// PROPERTY: A child is labelled "<parent> - <child>", a root by its own label.
    #[test]
    fn property_child_label_has_parent_prefix(parent in label(), child in label()) {
        let tree = MenuTree::new(vec![MenuEntry::group(
            "G",
            parent.clone(),
            vec![MenuEntry::leaf("G-x", child.clone())],
        )]);
        prop_assert_eq!(resolve_label(&tree, "G-x"), format!("{parent} - {child}"));
        prop_assert_eq!(resolve_label(&tree, "G"), parent);
    }

    /// PROPERTY: Resolution is a pure function of its inputs.
    #[test]
    fn property_label_is_deterministic(key in "[A-Za-z-]{0,16}") {
        let tree = apiconsole::config::default_menu();
        prop_assert_eq!(resolve_label(&tree, &key), resolve_label(&tree, &key));
    }
}
