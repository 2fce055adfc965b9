//! Scenario: Opening the login screen
//!
//! Journey: A developer lands on the login operation, looks around the
//! menu, and activates a sibling operation.
//!
//! Steps:
//! 1. Location is `/apis/V2NIMLoginService/login`
//! 2. Menu selects the login leaf and expands its service
//! 3. Breadcrumb reads "Login Service - login"
//! 4. Activating "logout" navigates to its route
//! 5. Activating the service header does nothing
//! 6. Submitting the form forwards parameters to the client

use std::cell::RefCell;

use serde_json::{json, Value};

use apiconsole::domain::ports::ClientResult;
use apiconsole::{
    Activation, ApiClient, InvokeUseCase, MemoryRouter, MenuEntry, MenuTree, NavigationOptions,
    NavigationSynchronizer,
};

fn login_menu() -> MenuTree {
    MenuTree::new(vec![MenuEntry::group(
        "V2NIMLoginService",
        "Login Service",
        vec![
            MenuEntry::leaf("V2NIMLoginService-login", "login"),
            MenuEntry::leaf("V2NIMLoginService-logout", "logout"),
        ],
    )])
}

/// Client recording every call it receives
#[derive(Default)]
struct RecordingClient {
    calls: RefCell<Vec<(String, String, Value)>>,
}

impl ApiClient for RecordingClient {
    fn invoke(&self, service: &str, method: &str, params: &Value) -> ClientResult<Value> {
        self.calls
            .borrow_mut()
            .push((service.to_string(), method.to_string(), params.clone()));
        Ok(json!({"code": 200}))
    }
}

/// SCENARIO: Landing on the login operation and moving to logout
#[test]
fn scenario_login_screen_journey() {
    // Step 1-2: derive from the landing location
    let mut sync = NavigationSynchronizer::new(
        login_menu(),
        NavigationOptions::new("/apis", "NIMInit"),
        MemoryRouter::new("/apis/V2NIMLoginService/login"),
    );
    assert_eq!(sync.selected_key(), "V2NIMLoginService-login");
    assert_eq!(sync.expanded_group_keys(), ["V2NIMLoginService".to_string()]);

    // Step 3: breadcrumb
    assert_eq!(sync.selected_label(), "Login Service - login");

    // Step 4: activate a sibling
    assert_eq!(
        sync.activate("V2NIMLoginService-logout"),
        Activation::Navigate {
            target: "/apis/V2NIMLoginService/logout".to_string()
        }
    );
    // Nothing changes until the router reports the new location
    assert_eq!(sync.selected_key(), "V2NIMLoginService-login");
    let path = sync.router().poll().expect("navigation queued");
    assert!(sync.on_path_changed(&path));
    assert_eq!(sync.selected_key(), "V2NIMLoginService-logout");
    assert_eq!(sync.selected_label(), "Login Service - logout");

    // Step 5: group header is not a route
    assert_eq!(sync.activate("V2NIMLoginService"), Activation::Ignored);
    assert_eq!(sync.router().pending_len(), 0);

    // Step 6: submit the logout form
    let invoke = InvokeUseCase::new(RecordingClient::default());
    let outcome = invoke
        .execute(sync.tree(), sync.selected_key(), json!({"reason": "done"}))
        .expect("logout succeeds");
    assert_eq!(outcome.label, "Login Service - logout");
    assert_eq!(
        invoke.client().calls.borrow().as_slice(),
        [(
            "V2NIMLoginService".to_string(),
            "logout".to_string(),
            json!({"reason": "done"})
        )]
    );
}

/// SCENARIO: Leaving the operation area collapses back to the default entry
#[test]
fn scenario_leaving_operations_resets_selection() {
    let mut sync = NavigationSynchronizer::new(
        login_menu(),
        NavigationOptions::new("/apis", "NIMInit"),
        MemoryRouter::new("/apis/V2NIMLoginService/login"),
    );

    assert!(sync.on_path_changed("/apis"));

    assert_eq!(sync.selected_key(), "NIMInit");
    assert!(sync.expanded_group_keys().is_empty());
    // The default key is not part of this menu, so it labels as itself
    assert_eq!(sync.selected_label(), "NIMInit");
}
