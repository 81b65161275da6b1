use super::*;
use crate::router::routes::Page;

fn page_for(path: &str) -> Option<Page> {
    RouteTable::default().resolve(path).map(|m| m.route.page)
}

#[test]
fn resolves_literal_routes() {
    assert_eq!(page_for("/"), Some(Page::Home));
    assert_eq!(page_for("/login"), Some(Page::Login));
    assert_eq!(page_for("/users"), Some(Page::Users));
}

#[test]
fn literal_new_wins_over_id_placeholder() {
    let m = RouteTable::default().resolve("/forms/new").unwrap();
    assert_eq!(m.route.page, Page::FormEditor);
    assert_eq!(m.route.title, "Nouveau Formulaire");
    assert!(m.params.is_empty());
}

#[test]
fn dynamic_segment_extracts_id() {
    let m = RouteTable::default().resolve("/forms/42").unwrap();
    assert_eq!(m.route.pattern, "/forms/:id");
    assert_eq!(m.param("id"), Some("42"));
    assert_eq!(m.numeric_id(), Some(42));
}

#[test]
fn dynamic_edit_route_matches() {
    let m = RouteTable::default().resolve("/forms/42/edit").unwrap();
    assert_eq!(m.route.pattern, "/forms/:id/edit");
    assert_eq!(m.route.page, Page::FormEditor);
    assert_eq!(m.numeric_id(), Some(42));
}

#[test]
fn extra_segment_matches_nothing() {
    assert_eq!(RouteTable::default().resolve("/forms/42/extra"), None);
}

#[test]
fn unknown_path_matches_nothing() {
    assert_eq!(page_for("/reports"), None);
    assert_eq!(page_for("/forms/42/edit/now"), None);
}

#[test]
fn non_numeric_id_matches_but_has_no_numeric_id() {
    let m = RouteTable::default().resolve("/forms/abc").unwrap();
    assert_eq!(m.route.page, Page::FormView);
    assert_eq!(m.param("id"), Some("abc"));
    assert_eq!(m.numeric_id(), None);
}

#[test]
fn trailing_slash_fills_placeholder_with_empty_segment() {
    let m = RouteTable::default().resolve("/forms/").unwrap();
    assert_eq!(m.route.pattern, "/forms/:id");
    assert_eq!(m.param("id"), Some(""));
    assert_eq!(m.numeric_id(), None);
}

#[test]
fn resolution_is_deterministic() {
    let table = RouteTable::default();
    let first = table.resolve("/forms/7/edit");
    for _ in 0..5 {
        assert_eq!(table.resolve("/forms/7/edit"), first);
    }
}

#[test]
fn first_table_entry_wins_over_later_more_specific_pattern() {
    let table = RouteTable::new(vec![
        RouteSpec { pattern: "/items/:id", page: Page::FormView, title: "Générique", requires_auth: false, requires_admin: false },
        RouteSpec { pattern: "/items/special", page: Page::FormEditor, title: "Spécial", requires_auth: false, requires_admin: false },
    ]);
    assert_eq!(table.resolve("/items/special").map(|m| m.route.page), Some(Page::FormEditor));
    let table = RouteTable::new(vec![
        RouteSpec { pattern: "/items/:id", page: Page::FormView, title: "Générique", requires_auth: false, requires_admin: false },
        RouteSpec { pattern: "/items/:slug", page: Page::FormEditor, title: "Slug", requires_auth: false, requires_admin: false },
    ]);
    assert_eq!(table.resolve("/items/x").map(|m| m.route.page), Some(Page::FormView));
}
