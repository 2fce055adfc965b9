//! Property tests for path matching and key composition.

use proptest::prelude::*;

use apiconsole::{
    composite_key, match_path, resolve_selected_key, route_path, split_composite_key,
};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.]{1,16}").unwrap()
}

fn base_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::string::string_regex("[a-z0-9.*()+?]{1,8}").unwrap(),
        0..=3,
    )
    .prop_map(|parts| parts.iter().map(|p| format!("/{p}")).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A built route matches back to its segments, for any base.
    #[test]
    fn property_route_round_trip(base in base_path(), group in segment(), leaf in segment()) {
        let path = route_path(&base, &group, &leaf);
        let route = match_path(&base, &path).expect("built route must match");
        prop_assert_eq!(route.group_key, group);
        prop_assert_eq!(route.leaf_key, leaf);
    }

    /// PROPERTY: Matching never panics and only yields non-empty, slash-free segments.
    #[test]
    fn property_match_never_panics(base in "(?s).{0,24}", path in "(?s).{0,64}") {
        if let Some(route) = match_path(&base, &path) {
            prop_assert!(!route.group_key.is_empty());
            prop_assert!(!route.leaf_key.is_empty());
            prop_assert!(!route.leaf_key.contains('/'));
            prop_assert_eq!(route_path(&base, &route.group_key, &route.leaf_key), path);
        }
    }

    /// PROPERTY: Extra depth never matches.
    #[test]
    fn property_three_segments_never_match(
        base in base_path(),
        a in segment(),
        b in segment(),
        c in segment(),
    ) {
        let path = format!("{base}/{a}/{b}/{c}");
        prop_assert!(match_path(&base, &path).is_none());
    }

    /// PROPERTY: Selection with both parts is the composite key; otherwise the default.
    #[test]
    fn property_selected_key_resolution(
        group in proptest::option::of(segment()),
        leaf in proptest::option::of(segment()),
        default in segment(),
    ) {
        let key = resolve_selected_key(group.as_deref(), leaf.as_deref(), &default);
        match (&group, &leaf) {
            (Some(g), Some(l)) => prop_assert_eq!(key, composite_key(g, l)),
            _ => prop_assert_eq!(key, default),
        }
    }

    /// PROPERTY: Splitting a composed key recovers a dash-free group.
    #[test]
    fn property_split_composite_key(group in segment(), leaf in "[A-Za-z0-9_-]{1,16}") {
        let key = composite_key(&group, &leaf);
        prop_assert_eq!(split_composite_key(&key), Some((group.as_str(), leaf.as_str())));
    }
}
