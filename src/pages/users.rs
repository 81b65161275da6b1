//! User administration (admin only).

use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <section class="admin-page">
            <h1>"Utilisateurs"</h1>
            <p class="empty-state">"La gestion des utilisateurs n'est pas encore disponible."</p>
        </section>
    }
}
