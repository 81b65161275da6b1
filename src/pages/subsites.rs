//! Sub-site administration (admin only).

use leptos::prelude::*;

#[component]
pub fn SubsitesPage() -> impl IntoView {
    view! {
        <section class="admin-page">
            <h1>"Sous-sites"</h1>
            <p class="empty-state">"La gestion des sous-sites n'est pas encore disponible."</p>
        </section>
    }
}
