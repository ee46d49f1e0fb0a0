use super::*;

// =============================================================
// ChatState
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn push_user_trims_and_appends() {
    let mut state = ChatState::default();
    assert!(state.push_user("  one milk tea please \n"));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].author, Author::User);
    assert_eq!(state.messages[0].content, "one milk tea please");
}

#[test]
fn push_user_ignores_blank_input() {
    let mut state = ChatState::default();
    assert!(!state.push_user(""));
    assert!(!state.push_user("   \t"));
    assert!(state.messages.is_empty());
}

#[test]
fn push_user_assigns_unique_ids() {
    let mut state = ChatState::default();
    state.push_user("a");
    state.push_user("b");
    assert_ne!(state.messages[0].id, state.messages[1].id);
    assert!(uuid::Uuid::parse_str(&state.messages[0].id).is_ok());
}

#[test]
fn clear_removes_all_messages() {
    let mut state = ChatState::default();
    state.push_user("a");
    state.push_user("b");
    state.clear();
    assert!(state.messages.is_empty());
}

#[test]
fn author_css_modifiers_are_distinct() {
    assert_eq!(Author::User.css_modifier(), "user");
    assert_eq!(Author::Assistant.css_modifier(), "assistant");
}
