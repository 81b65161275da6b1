//! Root application component, shared context and the routing shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AppContext` (config, API client, session store, toast
//! notifier, route table) and provides it to every component. `Shell` watches
//! the router location, takes a navigation ticket for each change, applies
//! the auth/admin gates through `decide`, and mounts the page for the route.
//!
//! DESIGN
//! ======
//! `leptos_router` owns history: it intercepts same-origin anchor clicks and
//! replays back/forward. Matching and gating stay in `router::*` so they are
//! testable without a browser.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::error_view::ErrorView;
use crate::components::notification_tray::NotificationTray;
use crate::components::sidebar_menu::SidebarMenu;
use crate::components::user_badge::UserBadge;
use crate::config::{ClientConfig, LOGIN_PATH};
use crate::net::api::ApiClient;
use crate::net::transport::FetchTransport;
use crate::pages::form_editor::FormEditorPage;
use crate::pages::form_view::FormViewPage;
use crate::pages::forms::FormsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::messages::MessagesPage;
use crate::pages::subsites::SubsitesPage;
use crate::pages::tickets::TicketsPage;
use crate::pages::users::UsersPage;
use crate::router::matcher::{RouteMatch, RouteTable};
use crate::router::navigation::{ErrorInfo, NavOutcome, NavTicket, NavigationTracker, decide};
use crate::router::routes::Page;
use crate::state::auth::{Session, SessionStore};
use crate::state::notifications::NotificationState;
use crate::state::token_store::{LocalTokenStore, MemoryTokenStore, TokenStore};
use crate::util::notify::Notifier;
use crate::util::redirect::{BrowserRedirect, Redirect};

/// Everything pages and components share, provided once through context.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ClientConfig>,
    pub api: Arc<ApiClient<FetchTransport>>,
    pub sessions: Arc<SessionStore<FetchTransport>>,
    /// Reactive mirror of the session store, updated by its listener.
    pub session: RwSignal<Session>,
    pub routes: Arc<RouteTable>,
    pub navigation: NavigationTracker,
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let config = Arc::new(config);
        let tokens: Arc<dyn TokenStore> = if LocalTokenStore::is_available() {
            Arc::new(LocalTokenStore::new(&config.token_key))
        } else {
            log::warn!("localStorage unavailable; session token kept in memory");
            Arc::new(MemoryTokenStore::default())
        };
        let redirect: Arc<dyn Redirect> = Arc::new(BrowserRedirect);

        let api = Arc::new(ApiClient::new(config.clone(), FetchTransport, tokens.clone(), redirect.clone()));
        let sessions = Arc::new(SessionStore::new(api.clone(), tokens, redirect));

        let session = RwSignal::new(sessions.snapshot());
        sessions.set_listener(Arc::new(move |next: &Session| {
            let _ = session.try_set(next.clone());
        }));

        let notifier = Notifier::new(RwSignal::new(NotificationState::default()), config.notification_ttl_ms);

        Self {
            config,
            api,
            sessions,
            session,
            routes: Arc::new(RouteTable::default()),
            navigation: NavigationTracker::default(),
            notifier,
        }
    }
}

/// Page mount resolved from a route match, with its typed parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mount {
    Home,
    Login,
    Forms,
    FormView(i64),
    FormEditor(Option<i64>),
    Messages,
    Tickets,
    Users,
    Subsites,
}

/// Map a route match to the page it mounts. A non-numeric `:id` cannot be
/// loaded and yields the generic error.
///
/// # Errors
///
/// `ErrorInfo::GENERIC` when the form id is not a number.
pub fn mount_for(matched: &RouteMatch) -> Result<Mount, ErrorInfo> {
    let form_id = || matched.numeric_id().ok_or(ErrorInfo::GENERIC);
    Ok(match matched.route.page {
        Page::Home => Mount::Home,
        Page::Login => Mount::Login,
        Page::Forms => Mount::Forms,
        Page::FormView => Mount::FormView(form_id()?),
        Page::FormEditor if matched.param("id").is_none() => Mount::FormEditor(None),
        Page::FormEditor => Mount::FormEditor(Some(form_id()?)),
        Page::Messages => Mount::Messages,
        Page::Tickets => Mount::Tickets,
        Page::Users => Mount::Users,
        Page::Subsites => Mount::Subsites,
    })
}

fn render_mount(mount: Mount, ticket: NavTicket) -> AnyView {
    match mount {
        Mount::Home => view! { <HomePage ticket /> }.into_any(),
        Mount::Login => view! { <LoginPage /> }.into_any(),
        Mount::Forms => view! { <FormsPage ticket /> }.into_any(),
        Mount::FormView(form_id) => view! { <FormViewPage form_id ticket /> }.into_any(),
        Mount::FormEditor(form_id) => view! { <FormEditorPage form_id ticket /> }.into_any(),
        Mount::Messages => view! { <MessagesPage ticket /> }.into_any(),
        Mount::Tickets => view! { <TicketsPage ticket /> }.into_any(),
        Mount::Users => view! { <UsersPage /> }.into_any(),
        Mount::Subsites => view! { <SubsitesPage /> }.into_any(),
    }
}

/// Root application component.
///
/// Provides the `AppContext`, restores the session from the stored token and
/// only then mounts the routing shell, so the first gate check sees the real
/// session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new(ClientConfig::default());
    provide_context(ctx.clone());

    let ready = RwSignal::new(false);
    #[cfg(feature = "csr")]
    {
        let sessions = ctx.sessions.clone();
        leptos::task::spawn_local(async move {
            let authenticated = sessions.initialize().await;
            log::debug!("session restored: authenticated={authenticated}");
            ready.set(true);
        });
    }

    view! {
        <Router>
            <div class="app-layout">
                <aside class="sidebar">
                    <SidebarMenu />
                </aside>
                <div class="app-main">
                    <header class="topbar">
                        <UserBadge />
                    </header>
                    <main id="mainContent" class="main-content">
                        <Show
                            when=move || ready.get()
                            fallback=|| view! { <p class="loading">"Chargement..."</p> }
                        >
                            <Shell />
                        </Show>
                    </main>
                </div>
            </div>
            <NotificationTray />
        </Router>
    }
}

/// Location-driven page switcher.
#[component]
fn Shell() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let location = use_location();
    let navigate = use_navigate();
    let session = ctx.session;
    let routes = ctx.routes.clone();
    let navigation = ctx.navigation.clone();

    // Only sign-in and role changes re-run the gates, not every session write.
    let gate = Memo::new(move |_| session.with(|s| (s.is_authenticated(), s.is_admin())));

    let current = Memo::new(move |_| {
        let path = location.pathname.get();
        gate.track();
        let outcome = session.with_untracked(|s| decide(&routes, &path, s));
        let ticket = navigation.begin();
        log::debug!("navigation #{}: {path} -> {outcome:?}", ticket.seq());
        (ticket, outcome)
    });

    Effect::new(move |_| {
        if current.with(|(_, outcome)| *outcome == NavOutcome::RedirectToLogin) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let config = ctx.config.clone();
    move || {
        let (ticket, outcome) = current.get();
        match outcome {
            NavOutcome::Render(matched) => match mount_for(&matched) {
                Ok(mount) => {
                    let title = config.document_title(matched.route.title);
                    view! {
                        <Title text=title />
                        {render_mount(mount, ticket)}
                    }
                    .into_any()
                }
                Err(info) => view! { <ErrorView info /> }.into_any(),
            },
            NavOutcome::Error(info) => view! { <ErrorView info /> }.into_any(),
            NavOutcome::RedirectToLogin => ().into_any(),
        }
    }
}
