//! Forms list page.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::types::Form;
use crate::pages::load::{LoadState, settle, spawn_guarded};
use crate::router::navigation::NavTicket;
use crate::state::auth::Permission;
use crate::util::format::format_optional_date;

pub const LOAD_FAILED_MESSAGE: &str = "Erreur lors du chargement des formulaires";
const NO_DESCRIPTION: &str = "Aucune description";

/// One card of the forms grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created: String,
    pub response_count: u32,
    pub view_href: String,
    /// Only present when the viewer may edit forms.
    pub edit_href: Option<String>,
}

pub fn form_cards(forms: &[Form], can_edit: bool) -> Vec<FormCard> {
    forms
        .iter()
        .map(|form| FormCard {
            id: form.id,
            title: form.title.clone(),
            description: form
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
            created: format_optional_date(form.created_at.as_deref()),
            response_count: form.response_count,
            view_href: format!("/forms/{}", form.id),
            edit_href: can_edit.then(|| format!("/forms/{}/edit", form.id)),
        })
        .collect()
}

#[component]
pub fn FormsPage(ticket: NavTicket) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session = ctx.session;
    let forms = RwSignal::new(LoadState::<Vec<Form>>::Loading);

    let api = ctx.api.clone();
    let notifier = ctx.notifier;
    spawn_guarded(&ctx, ticket, async move { api.forms().await }, move |result| {
        let state = settle(result);
        if state == LoadState::Failed {
            notifier.error(LOAD_FAILED_MESSAGE);
        }
        forms.set(state);
    });

    let can_edit = move || session.with(|s| s.has_permission(Permission::EditForms));

    view! {
        <section class="forms-page">
            <header class="page-header">
                <h1>"Formulaires"</h1>
                <Show when=can_edit>
                    <a class="btn btn-primary" href="/forms/new">
                        "Nouveau formulaire"
                    </a>
                </Show>
            </header>
            {move || match forms.get() {
                LoadState::Loading => view! { <p class="loading">"Chargement..."</p> }.into_any(),
                LoadState::Failed => view! { <div class="forms-grid"></div> }.into_any(),
                LoadState::Ready(list) if list.is_empty() => {
                    view! { <p class="empty-state">"Aucun formulaire disponible"</p> }.into_any()
                }
                LoadState::Ready(list) => {
                    let cards = form_cards(&list, can_edit());
                    view! {
                        <div class="forms-grid">
                            {cards.into_iter().map(render_card).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

fn render_card(card: FormCard) -> impl IntoView {
    view! {
        <article class="form-card">
            <h3>{card.title}</h3>
            <p class="form-card__description">{card.description}</p>
            <p class="form-card__meta">
                <span>{card.created}</span>
                <span>{format!("{} réponse(s)", card.response_count)}</span>
            </p>
            <div class="form-card__actions">
                <a class="btn btn-secondary" href=card.view_href>
                    "Voir"
                </a>
                {card
                    .edit_href
                    .map(|href| {
                        view! {
                            <a class="btn btn-primary" href=href>
                                "Éditer"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
