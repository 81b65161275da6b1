use super::*;

#[test]
fn push_appends_in_display_order() {
    let mut state = NotificationState::default();
    state.push("Premier", NotificationKind::Info);
    state.push("Second", NotificationKind::Error);
    let messages: Vec<_> = state.items.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["Premier", "Second"]);
    assert_eq!(state.items[1].kind, NotificationKind::Error);
}

#[test]
fn push_returns_distinct_ids() {
    let mut state = NotificationState::default();
    let a = state.push("a", NotificationKind::Info);
    let b = state.push("a", NotificationKind::Info);
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NotificationState::default();
    let keep = state.push("keep", NotificationKind::Info);
    let drop = state.push("drop", NotificationKind::Warning);
    assert!(state.dismiss(drop));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn dismiss_after_manual_close_is_noop() {
    let mut state = NotificationState::default();
    let id = state.push("bye", NotificationKind::Success);
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.items.is_empty());
}

#[test]
fn kind_maps_to_css_class() {
    assert_eq!(NotificationKind::Error.css_class(), "error");
    assert_eq!(NotificationKind::default().css_class(), "info");
}
