//! Scenario: Browsing with manual expansion and history
//!
//! Journey: A developer opens a second service by hand, navigates into it,
//! then goes back.
//!
//! Success Criteria:
//! - Manual toggles survive repeated reports of the same location
//! - A new location replaces manual expansion with the derived one
//! - Going back restores the previous selection

use apiconsole::config::default_menu;
use apiconsole::{MemoryRouter, NavigationOptions, NavigationSynchronizer, Router};

fn session() -> NavigationSynchronizer<MemoryRouter> {
    NavigationSynchronizer::new(
        default_menu(),
        NavigationOptions::new("/apis", "NIMInit"),
        MemoryRouter::new("/apis/V2NIMLoginService/login"),
    )
}

/// SCENARIO: Manual expansion, navigation and back
#[test]
fn scenario_manual_expansion_then_navigate_and_back() {
    let mut sync = session();

    // Open Team Service by hand
    assert_eq!(sync.toggle_group("V2NIMTeamService"), Some(true));
    assert_eq!(
        sync.expanded_group_keys(),
        ["V2NIMLoginService".to_string(), "V2NIMTeamService".to_string()]
    );

    // Same location reported again: manual state is kept
    assert!(!sync.sync_with_router());
    assert!(sync.state().is_expanded("V2NIMTeamService"));

    // Navigate into Team Service
    sync.activate("V2NIMTeamService-createTeam");
    let path = sync.router().poll_all().expect("navigation committed");
    sync.on_path_changed(&path);
    assert_eq!(sync.selected_key(), "V2NIMTeamService-createTeam");
    assert_eq!(sync.expanded_group_keys(), ["V2NIMTeamService".to_string()]);

    // Back to login
    let previous = sync.router().back().expect("history has a previous entry");
    assert_eq!(previous, "/apis/V2NIMLoginService/login");
    sync.on_path_changed(&previous);
    assert_eq!(sync.selected_key(), "V2NIMLoginService-login");
    assert_eq!(sync.router().current_path(), previous);
    assert_eq!(
        sync.router().history(),
        vec!["/apis/V2NIMLoginService/login".to_string()]
    );
}

/// SCENARIO: Toggling non-groups is ignored
#[test]
fn scenario_toggle_ignores_leaves_and_unknown_keys() {
    let mut sync = session();
    let before = sync.state().clone();

    assert_eq!(sync.toggle_group("V2NIMLoginService-login"), None);
    assert_eq!(sync.toggle_group("NIMInit"), None);
    assert_eq!(sync.toggle_group("Nope"), None);

    assert_eq!(sync.state(), &before);
}

/// SCENARIO: A menu widget reports its whole open set
#[test]
fn scenario_set_expanded_filters_to_groups() {
    let mut sync = session();

    sync.set_expanded([
        "V2NIMUserService",
        "V2NIMUserService",
        "NIMInit",
        "V2NIMFriendService",
    ]);

    assert_eq!(
        sync.expanded_group_keys(),
        ["V2NIMUserService".to_string(), "V2NIMFriendService".to_string()]
    );
    // Selection is untouched by manual expansion
    assert_eq!(sync.selected_key(), "V2NIMLoginService-login");
}
