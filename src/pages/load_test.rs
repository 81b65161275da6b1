use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::error::TransportError;
use crate::state::auth::SessionStore;
use crate::state::token_store::TokenStore;
use crate::testing::{harness, user_json};

// =============================================================
// settle()
// =============================================================

#[test]
fn payload_becomes_ready() {
    assert_eq!(settle(Ok(Some(vec![1, 2]))), LoadState::Ready(vec![1, 2]));
}

#[test]
fn handled_unauthorized_becomes_failed() {
    assert_eq!(settle::<u8>(Ok(None)), LoadState::Failed);
}

#[test]
fn api_errors_become_failed() {
    assert_eq!(settle::<u8>(Err(ApiError::Status(500))), LoadState::Failed);
    assert_eq!(settle::<u8>(Err(ApiError::Transport(TransportError::Unavailable))), LoadState::Failed);
}

#[test]
fn default_state_is_loading() {
    assert_eq!(LoadState::<u8>::default(), LoadState::Loading);
}

// =============================================================
// deliver()
// =============================================================

#[test]
fn current_ticket_applies_the_result() {
    let navigation = NavigationTracker::default();
    let ticket = navigation.begin();
    let applied = RefCell::new(None);

    let ran = deliver(&navigation, ticket, Ok(Some(7_u8)), || panic!("no 401 here"), |result| {
        *applied.borrow_mut() = Some(result);
    });

    assert!(ran);
    assert!(matches!(applied.into_inner(), Some(Ok(Some(7)))));
}

#[test]
fn stale_ticket_never_applies() {
    let navigation = NavigationTracker::default();
    let stale = navigation.begin();
    navigation.begin();
    let applied = Cell::new(false);

    let ran = deliver(&navigation, stale, Ok(Some(7_u8)), || {}, |_| applied.set(true));

    assert!(!ran);
    assert!(!applied.get());
}

#[test]
fn stale_errors_are_dropped_without_expiring() {
    let navigation = NavigationTracker::default();
    let stale = navigation.begin();
    navigation.begin();
    let expired = Cell::new(false);
    let applied = Cell::new(false);

    deliver::<u8, _, _>(&navigation, stale, Err(ApiError::Status(500)), || expired.set(true), |_| applied.set(true));

    assert!(!expired.get());
    assert!(!applied.get());
}

#[test]
fn handled_unauthorized_expires_before_applying() {
    let navigation = NavigationTracker::default();
    let ticket = navigation.begin();
    let order = RefCell::new(Vec::new());

    deliver::<u8, _, _>(&navigation, ticket, Ok(None), || order.borrow_mut().push("expire"), |_| {
        order.borrow_mut().push("apply");
    });

    assert_eq!(order.into_inner(), vec!["expire", "apply"]);
}

#[test]
fn handled_unauthorized_expires_even_when_stale() {
    let navigation = NavigationTracker::default();
    let stale = navigation.begin();
    navigation.begin();
    let expired = Cell::new(false);
    let applied = Cell::new(false);

    let ran = deliver::<u8, _, _>(&navigation, stale, Ok(None), || expired.set(true), |_| applied.set(true));

    assert!(!ran);
    assert!(expired.get());
    assert!(!applied.get());
}

#[test]
fn unauthorized_load_after_navigating_away_signs_the_session_out() {
    let h = harness(None);
    h.transport.reply_json(200, &serde_json::json!({ "token": "jwt", "user": user_json("admin") }));
    h.transport.reply(401, "");
    let sessions = SessionStore::new(h.api.clone(), h.tokens.clone(), h.redirect.clone());
    block_on(sessions.login("a@b.fr", "pw")).unwrap();

    let navigation = NavigationTracker::default();
    let ticket = navigation.begin();
    let result = block_on(h.api.forms());
    navigation.begin();

    let ran = deliver(&navigation, ticket, result, || sessions.expire(), |_| panic!("stale result applied"));

    assert!(!ran);
    assert!(!sessions.is_authenticated());
    assert_eq!(h.tokens.load(), None);
}
