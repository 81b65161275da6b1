//! Role-dependent navigation menu.

#[cfg(test)]
#[path = "sidebar_menu_test.rs"]
mod sidebar_menu_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::AppContext;
use crate::state::auth::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Font Awesome class list.
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

impl MenuItem {
    const fn new(icon: &'static str, label: &'static str, href: &'static str) -> Self {
        Self { icon, label, href }
    }
}

/// Menu entries for the current session. Anonymous visitors get none; admin
/// entries sit between the forms and messaging entries.
pub fn menu_items(session: &Session) -> Vec<MenuItem> {
    if !session.is_authenticated() {
        return Vec::new();
    }
    let mut items = vec![
        MenuItem::new("fas fa-home", "Accueil", "/"),
        MenuItem::new("fas fa-list", "Formulaires", "/forms"),
    ];
    if session.is_admin() {
        items.push(MenuItem::new("fas fa-users", "Utilisateurs", "/users"));
        items.push(MenuItem::new("fas fa-building", "Sous-sites", "/subsites"));
    }
    items.push(MenuItem::new("fas fa-envelope", "Messages", "/messages"));
    items.push(MenuItem::new("fas fa-ticket-alt", "Tickets", "/tickets"));
    items
}

/// Whether `href` should be highlighted for `pathname`.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn SidebarMenu() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = ctx.session;
    let location = use_location();

    view! {
        <nav class="sidebar-menu">
            <ul>
                {move || {
                    let pathname = location.pathname.get();
                    menu_items(&session.get())
                        .into_iter()
                        .map(|item| {
                            let class = if is_active(item.href, &pathname) {
                                "sidebar-menu__link sidebar-menu__link--active"
                            } else {
                                "sidebar-menu__link"
                            };
                            view! {
                                <li class="menu-item">
                                    <a class=class href=item.href>
                                        <i class=item.icon></i>
                                        <span>{item.label}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
