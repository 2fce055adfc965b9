//! Reusable configuration content.

/// Small two-service menu
pub const SMALL_MENU_CONFIG: &str = r#"
[navigation]
base_path = "/apis"
default_key = "NIMInit"

[[menu]]
key = "NIMInit"
label = "Initialize"

[[menu]]
key = "V2NIMLoginService"
label = "Login Service"

[[menu.children]]
key = "V2NIMLoginService-login"
label = "login"

[[menu.children]]
key = "V2NIMLoginService-logout"
label = "logout"

[[menu]]
key = "V2NIMTeamService"
label = "Team Service"

[[menu.children]]
key = "V2NIMTeamService-createTeam"
label = "createTeam"
"#;

/// Menu mounted under a different base path
pub const CUSTOM_BASE_CONFIG: &str = r#"
[navigation]
base_path = "/demo.v2"
default_key = "Home"

[[menu]]
key = "Home"
label = "Home"

[[menu]]
key = "Chat"
label = "Chat"

[[menu.children]]
key = "Chat-send"
label = "send"
"#;
