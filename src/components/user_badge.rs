//! Header badge with the signed-in user and the logout control.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::LOGIN_PATH;

#[component]
pub fn UserBadge() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = ctx.session;
    let sessions = ctx.sessions.clone();

    let on_logout = move |_| sessions.logout();

    view! {
        <div class="user-badge">
            <Show
                when=move || session.with(|s| s.is_authenticated())
                fallback=|| {
                    view! {
                        <a class="btn btn-primary" href=LOGIN_PATH>
                            "Connexion"
                        </a>
                    }
                }
            >
                {move || {
                    session
                        .with(|s| {
                            s.current_user
                                .as_ref()
                                .map(|u| (u.display_name().to_owned(), u.role.as_str()))
                        })
                        .map(|(name, role)| {
                            view! {
                                <span class="user-badge__name">{name}</span>
                                <span class="user-badge__role">{role}</span>
                            }
                        })
                }}
                <button class="btn btn-secondary user-badge__logout" on:click=on_logout.clone()>
                    "Déconnexion"
                </button>
            </Show>
        </div>
    }
}
