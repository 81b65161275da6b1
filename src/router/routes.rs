//! Static route table.
//!
//! DESIGN
//! ======
//! `Page` is the closed set of screens. The app renders it through one
//! exhaustive `match`, so adding a variant without a page fails to compile.

/// Screen mounted for a resolved route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Forms,
    FormEditor,
    FormView,
    Messages,
    Tickets,
    Users,
    Subsites,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    /// Literal segments and `:name` placeholders, e.g. `/forms/:id/edit`.
    pub pattern: &'static str,
    pub page: Page,
    pub title: &'static str,
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteSpec {
    const fn public(pattern: &'static str, page: Page, title: &'static str) -> Self {
        Self { pattern, page, title, requires_auth: false, requires_admin: false }
    }

    const fn authed(pattern: &'static str, page: Page, title: &'static str) -> Self {
        Self { pattern, page, title, requires_auth: true, requires_admin: false }
    }

    const fn admin(pattern: &'static str, page: Page, title: &'static str) -> Self {
        Self { pattern, page, title, requires_auth: true, requires_admin: true }
    }
}

/// Application routes. Order matters: the first matching pattern wins.
pub const APP_ROUTES: &[RouteSpec] = &[
    RouteSpec::public("/", Page::Home, "Accueil"),
    RouteSpec::public("/login", Page::Login, "Connexion"),
    RouteSpec::authed("/forms", Page::Forms, "Formulaires"),
    RouteSpec::authed("/forms/new", Page::FormEditor, "Nouveau Formulaire"),
    RouteSpec::authed("/forms/:id", Page::FormView, "Voir Formulaire"),
    RouteSpec::authed("/forms/:id/edit", Page::FormEditor, "Éditer Formulaire"),
    RouteSpec::authed("/messages", Page::Messages, "Messages"),
    RouteSpec::authed("/tickets", Page::Tickets, "Tickets"),
    RouteSpec::admin("/users", Page::Users, "Utilisateurs"),
    RouteSpec::admin("/subsites", Page::Subsites, "Sous-sites"),
];
