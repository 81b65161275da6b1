//! Email + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use regex::Regex;

use crate::app::AppContext;
use crate::util::validation::{FieldRules, FormRules, ValidationErrors, validate};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const INVALID_EMAIL_MESSAGE: &str = "Adresse e-mail invalide";

pub fn login_rules() -> FormRules {
    let mut email = FieldRules::required();
    if let Ok(re) = Regex::new(EMAIL_PATTERN) {
        email = email.pattern(re, Some(INVALID_EMAIL_MESSAGE));
    }
    FormRules::new().field("email", email).field("password", FieldRules::required())
}

/// Validate the login form. Returns the trimmed email and the password
/// untouched.
///
/// # Errors
///
/// Returns the per-field messages when a field is missing or malformed.
pub fn check_credentials(email: &str, password: &str) -> Result<(String, String), ValidationErrors> {
    let email = email.trim();
    validate([("email", email), ("password", password)], &login_rules())?;
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match check_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let sessions = ctx.sessions.clone();
            let notifier = ctx.notifier;
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match sessions.login(&email_value, &password_value).await {
                    Ok(user) => {
                        notifier.success(&format!("Bienvenue, {}", user.display_name()));
                        navigate(crate::config::HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        notifier.error(&e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&ctx, email_value, password_value);
        }
    };

    let field_error = move |name: &'static str| {
        move || errors.with(|e| e.get(name).map(|m| view! { <span class="field-error">{m.to_owned()}</span> }))
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Connexion"</h1>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <div class="form-group">
                        <label for="email">"Adresse e-mail"</label>
                        <input
                            class="form-control"
                            type="email"
                            id="email"
                            placeholder="vous@exemple.fr"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        {field_error("email")}
                    </div>
                    <div class="form-group">
                        <label for="password">"Mot de passe"</label>
                        <input
                            class="form-control"
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {field_error("password")}
                    </div>
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
