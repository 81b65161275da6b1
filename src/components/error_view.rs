//! Terminal error screen (404, 403, 500).

use leptos::prelude::*;

use crate::config::HOME_PATH;
use crate::router::navigation::ErrorInfo;

#[component]
pub fn ErrorView(info: ErrorInfo) -> impl IntoView {
    view! {
        <div class="error-page">
            <h1 class="error-page__code">{info.code}</h1>
            <p class="error-page__message">{info.message}</p>
            <a class="btn btn-primary" href=HOME_PATH>
                "Retour à l'accueil"
            </a>
        </div>
    }
}
