//! Property tests for the navigation synchronizer.

use proptest::prelude::*;

use apiconsole::config::default_menu;
use apiconsole::{
    route_path, Activation, MemoryRouter, NavigationOptions, NavigationState,
    NavigationSynchronizer, Router,
};

fn options() -> NavigationOptions {
    NavigationOptions::new("/apis", "NIMInit")
}

/// Any path, biased towards the route shape
fn any_path() -> impl Strategy<Value = String> {
    prop_oneof![
        "(?s).{0,48}",
        ("[A-Za-z]{1,12}", "[A-Za-z]{1,12}").prop_map(|(g, l)| format!("/apis/{g}/{l}")),
        Just("/apis".to_string()),
        Just("/apis/V2NIMLoginService/login".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Deriving twice from the same path gives the same state.
    #[test]
    fn property_derive_is_deterministic(path in any_path()) {
        let tree = default_menu();
        prop_assert_eq!(
            NavigationState::derive(&tree, &options(), &path),
            NavigationState::derive(&tree, &options(), &path)
        );
    }

    /// PROPERTY: Expanded groups are exactly the selection's ancestors.
    #[test]
    fn property_expanded_groups_are_ancestors(path in any_path()) {
        let tree = default_menu();
        let state = NavigationState::derive(&tree, &options(), &path);
        prop_assert_eq!(
            state.expanded_group_keys.clone(),
            apiconsole::find_ancestor_groups(&tree, &state.selected_key)
        );
    }

    /// PROPERTY: Feeding the same path twice leaves the state untouched,
    /// including manual toggles made in between.
    #[test]
    fn property_same_path_is_idempotent(path in any_path(), toggle in 0usize..8) {
        let tree = default_menu();
        let group = tree
            .roots()
            .iter()
            .filter(|e| e.is_group())
            .nth(toggle % 7)
            .map(|e| e.key().to_string())
            .unwrap();

        let mut sync = NavigationSynchronizer::new(tree, options(), MemoryRouter::new("/start"));
        sync.on_path_changed(&path);
        sync.toggle_group(&group);
        let before = sync.state().clone();

        prop_assert!(!sync.on_path_changed(&path));
        prop_assert_eq!(sync.state(), &before);
    }

    /// PROPERTY: Activating any leaf of the menu and feeding back the
    /// committed path selects that leaf.
    #[test]
    fn property_activation_round_trip(pick in 0usize..64) {
        let tree = default_menu();
        let leaves: Vec<String> = tree.leaf_keys().into_iter().map(str::to_string).collect();
        let key = &leaves[pick % leaves.len()];

        let mut sync = NavigationSynchronizer::new(tree, options(), MemoryRouter::new("/apis"));
        let activation = sync.activate(key);
        prop_assert!(
            matches!(activation, Activation::Navigate { .. }),
            "expected navigation for {}",
            key
        );

        if let Some(path) = sync.router().poll_all() {
            sync.on_path_changed(&path);
        }
        prop_assert_eq!(sync.selected_key(), key.as_str());
        prop_assert_eq!(sync.observed_path(), sync.router().current_path());
    }

    /// PROPERTY: Group keys activate to nothing and never touch the router.
    #[test]
    fn property_group_activation_is_ignored(pick in 0usize..16) {
        let tree = default_menu();
        let groups: Vec<String> = tree
            .roots()
            .iter()
            .filter(|e| e.is_group())
            .map(|e| e.key().to_string())
            .collect();
        let key = &groups[pick % groups.len()];

        let sync = NavigationSynchronizer::new(tree, options(), MemoryRouter::new("/apis"));
        prop_assert_eq!(sync.activate(key), Activation::Ignored);
        prop_assert_eq!(sync.router().pending_len(), 0);
    }

    /// PROPERTY: Leaves route to "<base>/<group>/<leaf>".
    #[test]
    fn property_activation_target(g in "[A-Za-z]{1,10}", l in "[A-Za-z-]{1,10}") {
        let sync = NavigationSynchronizer::new(default_menu(), options(), MemoryRouter::new("/apis"));
        let key = format!("{g}-{l}");
        prop_assert_eq!(
            sync.activate(&key),
            Activation::Navigate { target: route_path("/apis", &g, &l) }
        );
    }
}
