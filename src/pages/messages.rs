//! Messages page: inbox list and a compose form.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::error_view::ErrorView;
use crate::net::types::{Message, NewMessage};
use crate::pages::load::{LoadState, settle, spawn_guarded};
use crate::router::navigation::{ErrorInfo, NavTicket};
use crate::util::format::format_optional_date;
use crate::util::html::text_to_html;
use crate::util::validation::{FieldRules, FormRules, ValidationErrors, validate};

const SENT_MESSAGE: &str = "Message envoyé";
const SEND_FAILED_MESSAGE: &str = "Erreur lors de l'envoi du message";
const NO_SUBJECT: &str = "(sans objet)";

/// Validate the compose form and build the request body.
///
/// # Errors
///
/// Returns the field messages when the content is empty.
pub fn compose(subject: &str, content: &str) -> Result<NewMessage, ValidationErrors> {
    let content = content.trim();
    validate([("content", content)], &FormRules::new().field("content", FieldRules::required()))?;
    let subject = subject.trim();
    Ok(NewMessage {
        subject: (!subject.is_empty()).then(|| subject.to_owned()),
        content: content.to_owned(),
        receiver_id: None,
        is_global: false,
    })
}

pub fn subject_label(message: &Message) -> &str {
    message.subject.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or(NO_SUBJECT)
}

#[component]
pub fn MessagesPage(ticket: NavTicket) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let messages = RwSignal::new(LoadState::<Vec<Message>>::Loading);
    let subject = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let busy = RwSignal::new(false);

    let api = ctx.api.clone();
    spawn_guarded(&ctx, ticket, async move { api.messages().await }, move |result| messages.set(settle(result)));

    let send_ctx = ctx.clone();
    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let message = match compose(&subject.get(), &content.get()) {
            Ok(message) => message,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        busy.set(true);

        let api = send_ctx.api.clone();
        let notifier = send_ctx.notifier;
        spawn_guarded(&send_ctx, ticket, async move { api.send_message(&message).await }, move |result| {
            busy.set(false);
            match result {
                Ok(Some(sent)) => {
                    notifier.success(SENT_MESSAGE);
                    subject.set(String::new());
                    content.set(String::new());
                    messages.update(|state| {
                        if let LoadState::Ready(list) = state {
                            list.insert(0, sent);
                        }
                    });
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("sending message failed: {e}");
                    notifier.error(SEND_FAILED_MESSAGE);
                }
            }
        });
    };

    move || match messages.get() {
        LoadState::Loading => view! { <p class="loading">"Chargement..."</p> }.into_any(),
        LoadState::Failed => view! { <ErrorView info=ErrorInfo::GENERIC /> }.into_any(),
        LoadState::Ready(list) => view! {
            <section class="messages-page">
                <h1>"Messages"</h1>
                <form class="message-compose" on:submit=on_send.clone() novalidate=true>
                    <div class="form-group">
                        <label for="subject">"Objet"</label>
                        <input
                            class="form-control"
                            type="text"
                            id="subject"
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="content">"Message"</label>
                        <textarea
                            class="form-control"
                            id="content"
                            rows="4"
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                        {move || {
                            errors
                                .with(|e| {
                                    e.get("content")
                                        .map(|m| view! { <span class="field-error">{m.to_owned()}</span> })
                                })
                        }}
                    </div>
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        "Envoyer"
                    </button>
                </form>
                {if list.is_empty() {
                    view! { <p class="empty-state">"Aucun message"</p> }.into_any()
                } else {
                    view! {
                        <ul class="message-list">
                            {list.iter().map(render_message).collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </section>
        }
        .into_any(),
    }
}

fn render_message(message: &Message) -> impl IntoView {
    let class = if message.is_read { "message" } else { "message message--unread" };
    view! {
        <li class=class>
            <div class="message__header">
                <strong>{subject_label(message).to_owned()}</strong>
                <span class="message__date">{format_optional_date(message.created_at.as_deref())}</span>
            </div>
            <div class="message__body" inner_html=text_to_html(&message.content)></div>
        </li>
    }
}
