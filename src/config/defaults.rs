//! Built-in operation menu

use crate::domain::entities::{MenuEntry, MenuTree};
use crate::domain::value_objects::composite_key;

const SERVICES: &[(&str, &str, &[&str])] = &[
    (
        "V2NIMLoginService",
        "Login Service",
        &["login", "logout", "getLoginUser", "getLoginStatus"],
    ),
    (
        "V2NIMMessageService",
        "Message Service",
        &["sendMessage", "revokeMessage", "getMessageList"],
    ),
    (
        "V2NIMConversationService",
        "Conversation Service",
        &["getConversationList", "deleteConversation"],
    ),
    (
        "V2NIMTeamService",
        "Team Service",
        &["createTeam", "inviteMember", "leaveTeam"],
    ),
    (
        "V2NIMUserService",
        "User Service",
        &["getUserList", "updateSelfUserProfile"],
    ),
    (
        "V2NIMFriendService",
        "Friend Service",
        &["addFriend", "deleteFriend"],
    ),
    ("V2NIMStorageService", "Storage Service", &["uploadFile"]),
];

/// Menu used when no configuration provides one
pub fn default_menu() -> MenuTree {
    let mut roots = vec![MenuEntry::leaf("NIMInit", "Initialize")];
    roots.extend(SERVICES.iter().map(|(service, label, methods)| {
        MenuEntry::group(
            *service,
            *label,
            methods
                .iter()
                .map(|method| MenuEntry::leaf(composite_key(service, method), *method))
                .collect(),
        )
    }));
    MenuTree::new(roots)
}
