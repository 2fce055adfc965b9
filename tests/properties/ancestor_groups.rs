//! Property tests for ancestor-group discovery.

use proptest::prelude::*;

use apiconsole::{find_ancestor_groups, MenuEntry, MenuTree};

/// Two-level menu: `(group index, leaf count)` pairs become `G{i}` groups
/// with `G{i}-m{j}` leaves.
fn two_level_tree() -> impl Strategy<Value = MenuTree> {
    proptest::collection::vec(0usize..6, 0..8).prop_map(|leaf_counts| {
        let mut roots = vec![MenuEntry::leaf("NIMInit", "Initialize")];
        for (i, count) in leaf_counts.into_iter().enumerate() {
            let group = format!("G{i}");
            let children = (0..count)
                .map(|j| MenuEntry::leaf(format!("{group}-m{j}"), format!("m{j}")))
                .collect();
            roots.push(MenuEntry::group(group.clone(), group, children));
        }
        MenuTree::new(roots)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every leaf under a group reports exactly that group.
    #[test]
    fn property_leaf_reports_its_group(tree in two_level_tree()) {
        for root in tree.roots() {
            for child in root.children() {
                prop_assert_eq!(
                    find_ancestor_groups(&tree, child.key()),
                    vec![root.key().to_string()]
                );
            }
        }
    }

    /// PROPERTY: Top-level entries and absent keys have no ancestors.
    #[test]
    fn property_top_level_and_absent_have_none(tree in two_level_tree(), absent in "[a-z]{1,8}") {
        for root in tree.roots() {
            prop_assert!(find_ancestor_groups(&tree, root.key()).is_empty());
        }
        prop_assert!(find_ancestor_groups(&tree, &absent).is_empty());
    }

    /// PROPERTY: In nested trees the chain runs outermost first and every
    /// link is a group containing the next.
    #[test]
    fn property_nested_chain_outermost_first(depth in 1usize..6) {
        let mut entry = MenuEntry::leaf("target", "Target");
        for level in (0..depth).rev() {
            entry = MenuEntry::group(format!("L{level}"), format!("Level {level}"), vec![entry]);
        }
        let tree = MenuTree::new(vec![entry]);

        let chain = find_ancestor_groups(&tree, "target");
        let expected: Vec<String> = (0..depth).map(|l| format!("L{l}")).collect();
        prop_assert_eq!(chain, expected);
    }
}
