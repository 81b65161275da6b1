use super::*;
use crate::net::types::Role;
use crate::router::routes::Page;
use crate::testing::user;

fn signed_in(role: Role) -> Session {
    Session::authenticated("t".to_owned(), user(role))
}

// =============================================================
// decide()
// =============================================================

#[test]
fn unknown_path_is_not_found() {
    let outcome = decide(&RouteTable::default(), "/forms/42/extra", &Session::default());
    assert_eq!(outcome, NavOutcome::Error(ErrorInfo::NOT_FOUND));
}

#[test]
fn public_route_renders_without_session() {
    let outcome = decide(&RouteTable::default(), "/login", &Session::default());
    assert!(matches!(outcome, NavOutcome::Render(m) if m.route.page == Page::Login));
}

#[test]
fn protected_route_redirects_anonymous_user_to_login() {
    let outcome = decide(&RouteTable::default(), "/forms", &Session::default());
    assert_eq!(outcome, NavOutcome::RedirectToLogin);
}

#[test]
fn admin_route_redirects_anonymous_user_before_role_check() {
    let outcome = decide(&RouteTable::default(), "/users", &Session::default());
    assert_eq!(outcome, NavOutcome::RedirectToLogin);
}

#[test]
fn admin_route_forbidden_for_non_admin_and_session_untouched() {
    let session = signed_in(Role::Subadmin);
    let before = session.clone();
    let outcome = decide(&RouteTable::default(), "/users", &session);
    assert_eq!(outcome, NavOutcome::Error(ErrorInfo::FORBIDDEN));
    assert_eq!(session, before);
}

#[test]
fn admin_route_renders_for_admin() {
    let outcome = decide(&RouteTable::default(), "/subsites", &signed_in(Role::Admin));
    assert!(matches!(outcome, NavOutcome::Render(m) if m.route.page == Page::Subsites));
}

#[test]
fn dynamic_route_renders_with_params() {
    let outcome = decide(&RouteTable::default(), "/forms/42", &signed_in(Role::User));
    let NavOutcome::Render(matched) = outcome else {
        panic!("expected render");
    };
    assert_eq!(matched.route.page, Page::FormView);
    assert_eq!(matched.numeric_id(), Some(42));
}

#[test]
fn error_screens_carry_codes() {
    assert_eq!(ErrorInfo::NOT_FOUND.code, 404);
    assert_eq!(ErrorInfo::FORBIDDEN.code, 403);
    assert_eq!(ErrorInfo::GENERIC.message, "Une erreur est survenue");
}

// =============================================================
// NavigationTracker
// =============================================================

#[test]
fn tickets_increase_monotonically() {
    let tracker = NavigationTracker::default();
    let a = tracker.begin();
    let b = tracker.begin();
    assert!(b > a);
    assert_eq!(b.seq(), a.seq() + 1);
}

#[test]
fn newer_navigation_makes_older_ticket_stale() {
    let tracker = NavigationTracker::default();
    let first = tracker.begin();
    assert!(tracker.is_current(first));
    let second = tracker.begin();
    assert!(!tracker.is_current(first));
    assert!(tracker.is_current(second));
}

#[test]
fn cloned_tracker_shares_sequence() {
    let tracker = NavigationTracker::default();
    let loader_view = tracker.clone();
    let ticket = tracker.begin();
    assert!(loader_view.is_current(ticket));
    loader_view.begin();
    assert!(!tracker.is_current(ticket));
}
