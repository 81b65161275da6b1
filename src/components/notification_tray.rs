//! Toast stack in the corner of the viewport.

use leptos::prelude::*;

use crate::app::AppContext;

#[component]
pub fn NotificationTray() -> impl IntoView {
    let notifier = expect_context::<AppContext>().notifier;
    let state = notifier.state();

    view! {
        <div class="notification-tray" aria-live="polite">
            <For
                each=move || state.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = format!("notification {}", n.kind.css_class());
                    view! {
                        <div class=class role="status">
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="notification__close"
                                title="Fermer"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
