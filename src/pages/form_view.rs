//! Read view of one form, rendered through the dynamic form builder.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::dynamic_form::DynamicForm;
use crate::components::error_view::ErrorView;
use crate::net::types::Form;
use crate::pages::load::{LoadState, settle, spawn_guarded};
use crate::router::navigation::{ErrorInfo, NavTicket};
use crate::state::auth::Permission;

#[component]
pub fn FormViewPage(form_id: i64, ticket: NavTicket) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = ctx.session;
    let form = RwSignal::new(LoadState::<Form>::Loading);

    let api = ctx.api.clone();
    spawn_guarded(&ctx, ticket, async move { api.form(form_id).await }, move |result| form.set(settle(result)));

    let can_edit = move || session.with(|s| s.has_permission(Permission::EditForms));

    move || match form.get() {
        LoadState::Loading => view! { <p class="loading">"Chargement..."</p> }.into_any(),
        LoadState::Failed => view! { <ErrorView info=ErrorInfo::GENERIC /> }.into_any(),
        LoadState::Ready(Form { id, title, description, structure, .. }) => {
            let edit_href = format!("/forms/{id}/edit");
            view! {
                <section class="form-view">
                    <header class="page-header">
                        <h1>{title}</h1>
                        <Show when=can_edit>
                            <a class="btn btn-primary" href=edit_href.clone()>
                                "Éditer"
                            </a>
                        </Show>
                    </header>
                    {description.map(|d| view! { <p class="form-view__description">{d}</p> })}
                    <DynamicForm fields=structure.fields />
                    <a class="btn btn-secondary" href="/forms">
                        "Retour aux formulaires"
                    </a>
                </section>
            }
            .into_any()
        }
    }
}
