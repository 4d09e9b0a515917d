use super::*;

fn roles(messages: &[ChatMessage]) -> Vec<ChatRole> {
    messages.iter().map(|m| m.role).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn starts_with_greeting_and_presets() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::Assistant);
    assert_eq!(state.messages[0].content, GREETING);
    assert!(state.show_presets());
}

#[test]
fn entries_get_distinct_ids() {
    let a = ChatEntry::new(ChatRole::User, "a");
    let b = ChatEntry::new(ChatRole::User, "a");
    assert_ne!(a.id, b.id);
}

// =============================================================
// Sending
// =============================================================

#[test]
fn blank_input_is_not_sent() {
    let mut state = ChatState { input: "   ".to_owned(), ..ChatState::default() };
    assert!(state.begin_send(5).is_none());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn history_is_taken_before_prompt_is_appended() {
    let mut state = ChatState { input: "What is a ding?".to_owned(), ..ChatState::default() };
    let (prompt, history) = state.begin_send(5).expect("send");
    assert_eq!(prompt, "What is a ding?");
    assert_eq!(roles(&history), vec![ChatRole::Assistant]);
    assert_eq!(state.messages.len(), 2);
    assert!(state.input.is_empty());
    assert!(state.loading);
    assert!(!state.show_presets());
}

#[test]
fn second_send_blocked_while_loading() {
    let mut state = ChatState { input: "one".to_owned(), ..ChatState::default() };
    assert!(state.begin_send(5).is_some());
    state.input = "two".to_owned();
    assert!(state.begin_send(5).is_none());
}

#[test]
fn history_window_keeps_last_n() {
    let mut state = ChatState::default();
    for i in 0..4 {
        state.input = format!("q{i}");
        assert!(state.begin_send(5).is_some());
        state.finish_send(Ok(format!("a{i}")));
    }
    assert_eq!(state.messages.len(), 9);

    let window = state.history_window(5);
    assert_eq!(window.len(), 5);
    assert_eq!(window[0].content, "a1");
    assert_eq!(window[4].content, "a3");
}

#[test]
fn failure_appends_apology() {
    let mut state = ChatState { input: "hi".to_owned(), ..ChatState::default() };
    assert!(state.begin_send(5).is_some());
    state.finish_send(Err("network down".to_owned()));
    let last = state.messages.last().expect("reply");
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.content, FAILURE_REPLY);
    assert!(!state.loading);
}
