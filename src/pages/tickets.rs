//! Support tickets page: list and create.

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::error_view::ErrorView;
use crate::net::types::{NewTicket, Ticket};
use crate::pages::load::{LoadState, settle, spawn_guarded};
use crate::router::navigation::{ErrorInfo, NavTicket};
use crate::util::format::format_optional_date;
use crate::util::html::text_to_html;
use crate::util::validation::{FieldRules, FormRules, ValidationErrors, validate};

pub const PRIORITIES: [&str; 4] = ["low", "normal", "high", "urgent"];
const DEFAULT_PRIORITY: &str = "normal";
const CREATED_MESSAGE: &str = "Ticket créé";
const CREATE_FAILED_MESSAGE: &str = "Erreur lors de la création du ticket";

pub fn priority_label(priority: &str) -> &str {
    match priority {
        "low" => "Basse",
        "normal" => "Normale",
        "high" => "Haute",
        "urgent" => "Urgente",
        other => other,
    }
}

pub fn status_label(status: &str) -> &str {
    match status {
        "open" => "Ouvert",
        "in_progress" => "En cours",
        "closed" => "Fermé",
        "reopened" => "Rouvert",
        other => other,
    }
}

pub fn ticket_rules() -> FormRules {
    FormRules::new()
        .field("title", FieldRules::required().min_length(3).max_length(200))
        .field("description", FieldRules::required())
}

/// Validate the create form and build the request body. Unknown priorities
/// fall back to `normal`.
///
/// # Errors
///
/// Returns the field messages for a missing or malformed title/description.
pub fn new_ticket(title: &str, description: &str, priority: &str) -> Result<NewTicket, ValidationErrors> {
    let title = title.trim();
    let description = description.trim();
    validate([("title", title), ("description", description)], &ticket_rules())?;
    let priority = if PRIORITIES.contains(&priority) { priority } else { DEFAULT_PRIORITY };
    Ok(NewTicket { title: title.to_owned(), description: description.to_owned(), priority: priority.to_owned() })
}

#[component]
pub fn TicketsPage(ticket: NavTicket) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let tickets = RwSignal::new(LoadState::<Vec<Ticket>>::Loading);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new(DEFAULT_PRIORITY.to_owned());
    let errors = RwSignal::new(ValidationErrors::default());
    let busy = RwSignal::new(false);

    let api = ctx.api.clone();
    spawn_guarded(&ctx, ticket, async move { api.tickets().await }, move |result| tickets.set(settle(result)));

    let create_ctx = ctx.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match new_ticket(&title.get(), &description.get(), &priority.get()) {
            Ok(body) => body,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        busy.set(true);

        let api = create_ctx.api.clone();
        let notifier = create_ctx.notifier;
        spawn_guarded(&create_ctx, ticket, async move { api.create_ticket(&body).await }, move |result| {
            busy.set(false);
            match result {
                Ok(Some(created)) => {
                    notifier.success(CREATED_MESSAGE);
                    title.set(String::new());
                    description.set(String::new());
                    priority.set(DEFAULT_PRIORITY.to_owned());
                    tickets.update(|state| {
                        if let LoadState::Ready(list) = state {
                            list.insert(0, created);
                        }
                    });
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("creating ticket failed: {e}");
                    notifier.error(CREATE_FAILED_MESSAGE);
                }
            }
        });
    };

    let field_error = move |name: &'static str| {
        move || errors.with(|e| e.get(name).map(|m| view! { <span class="field-error">{m.to_owned()}</span> }))
    };

    move || match tickets.get() {
        LoadState::Loading => view! { <p class="loading">"Chargement..."</p> }.into_any(),
        LoadState::Failed => view! { <ErrorView info=ErrorInfo::GENERIC /> }.into_any(),
        LoadState::Ready(list) => view! {
            <section class="tickets-page">
                <h1>"Tickets"</h1>
                <form class="ticket-create" on:submit=on_create.clone() novalidate=true>
                    <div class="form-group">
                        <label for="ticket-title">"Titre"</label>
                        <input
                            class="form-control"
                            type="text"
                            id="ticket-title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        {field_error("title")}
                    </div>
                    <div class="form-group">
                        <label for="ticket-description">"Description"</label>
                        <textarea
                            class="form-control"
                            id="ticket-description"
                            rows="4"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                        {field_error("description")}
                    </div>
                    <div class="form-group">
                        <label for="ticket-priority">"Priorité"</label>
                        <select
                            class="form-control"
                            id="ticket-priority"
                            prop:value=move || priority.get()
                            on:change=move |ev| priority.set(event_target_value(&ev))
                        >
                            {PRIORITIES
                                .iter()
                                .map(|p| view! { <option value=*p>{priority_label(p).to_owned()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        "Créer le ticket"
                    </button>
                </form>
                {if list.is_empty() {
                    view! { <p class="empty-state">"Aucun ticket"</p> }.into_any()
                } else {
                    view! {
                        <ul class="ticket-list">
                            {list.iter().map(render_ticket).collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>
        }
        .into_any(),
    }
}

fn render_ticket(ticket: &Ticket) -> impl IntoView {
    let status_class = format!("ticket__status ticket__status--{}", ticket.status);
    let priority_class = format!("ticket__priority ticket__priority--{}", ticket.priority);
    view! {
        <li class="ticket">
            <div class="ticket__header">
                <strong>{ticket.title.clone()}</strong>
                <span class=status_class>{status_label(&ticket.status).to_owned()}</span>
                <span class=priority_class>{priority_label(&ticket.priority).to_owned()}</span>
            </div>
            <div class="ticket__body" inner_html=text_to_html(&ticket.description)></div>
            <span class="ticket__date">{format_optional_date(ticket.created_at.as_deref())}</span>
        </li>
    }
}
