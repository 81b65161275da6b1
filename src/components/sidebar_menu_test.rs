use super::*;
use crate::net::types::Role;
use crate::testing::user;

fn session_for(role: Role) -> Session {
    Session::authenticated("tok".to_owned(), user(role))
}

fn hrefs(session: &Session) -> Vec<&'static str> {
    menu_items(session).into_iter().map(|i| i.href).collect()
}

// =============================================================
// menu_items
// =============================================================

#[test]
fn anonymous_visitor_gets_no_menu() {
    assert!(menu_items(&Session::default()).is_empty());
}

#[test]
fn regular_user_menu() {
    assert_eq!(hrefs(&session_for(Role::User)), vec!["/", "/forms", "/messages", "/tickets"]);
}

#[test]
fn subadmin_does_not_see_admin_entries() {
    assert_eq!(hrefs(&session_for(Role::Subadmin)), vec!["/", "/forms", "/messages", "/tickets"]);
}

#[test]
fn admin_menu_inserts_admin_entries_after_forms() {
    assert_eq!(
        hrefs(&session_for(Role::Admin)),
        vec!["/", "/forms", "/users", "/subsites", "/messages", "/tickets"]
    );
}

#[test]
fn labels_are_french() {
    let labels: Vec<_> = menu_items(&session_for(Role::Admin)).into_iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Accueil", "Formulaires", "Utilisateurs", "Sous-sites", "Messages", "Tickets"]);
}

// =============================================================
// is_active
// =============================================================

#[test]
fn home_is_only_active_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/forms"));
}

#[test]
fn section_is_active_on_nested_paths() {
    assert!(is_active("/forms", "/forms"));
    assert!(is_active("/forms", "/forms/3/edit"));
    assert!(!is_active("/forms", "/formsx"));
}
