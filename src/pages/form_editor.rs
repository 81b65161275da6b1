//! Form editor: create, update and delete a form.
//!
//! The field structure is edited as JSON text (`{"fields": [...]}`) and
//! parsed on save, so the server always receives a well-formed structure.

#[cfg(test)]
#[path = "form_editor_test.rs"]
mod form_editor_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::error_view::ErrorView;
use crate::net::types::{Form, FormPayload, FormStructure};
use crate::pages::load::{LoadState, spawn_guarded};
use crate::router::navigation::{ErrorInfo, NavTicket};
use crate::util::validation::{FieldRules, FormRules, ValidationErrors, validate};

pub const TITLE_MAX_LENGTH: usize = 200;
pub const INVALID_STRUCTURE_MESSAGE: &str = "Structure JSON invalide";
const SAVED_MESSAGE: &str = "Formulaire enregistré";
const DELETED_MESSAGE: &str = "Formulaire supprimé";
const SAVE_FAILED_MESSAGE: &str = "Erreur lors de l'enregistrement du formulaire";
const DELETE_FAILED_MESSAGE: &str = "Erreur lors de la suppression du formulaire";

pub fn editor_rules() -> FormRules {
    FormRules::new().field("title", FieldRules::required().max_length(TITLE_MAX_LENGTH))
}

/// Editable text state of the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorDraft {
    pub title: String,
    pub description: String,
    pub structure_json: String,
}

impl Default for EditorDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            structure_json: structure_to_json(&FormStructure::default()),
        }
    }
}

fn structure_to_json(structure: &FormStructure) -> String {
    serde_json::to_string_pretty(structure).unwrap_or_else(|_| "{\"fields\": []}".to_owned())
}

impl EditorDraft {
    pub fn from_form(form: &Form) -> Self {
        Self {
            title: form.title.clone(),
            description: form.description.clone().unwrap_or_default(),
            structure_json: structure_to_json(&form.structure),
        }
    }

    /// Validate the draft and build the request body.
    ///
    /// # Errors
    ///
    /// Field messages keyed `title` and/or `structure`.
    pub fn to_payload(&self) -> Result<FormPayload, ValidationErrors> {
        let title = self.title.trim();
        let checked = validate([("title", title)], &editor_rules());
        let structure = serde_json::from_str::<FormStructure>(&self.structure_json);

        match (checked, structure) {
            (Ok(()), Ok(structure)) => {
                let description = self.description.trim();
                Ok(FormPayload {
                    title: title.to_owned(),
                    description: (!description.is_empty()).then(|| description.to_owned()),
                    structure,
                })
            }
            (checked, structure) => {
                let mut errors = checked.err().unwrap_or_default();
                if structure.is_err() {
                    errors.insert("structure", INVALID_STRUCTURE_MESSAGE);
                }
                Err(errors)
            }
        }
    }
}

#[component]
pub fn FormEditorPage(form_id: Option<i64>, ticket: NavTicket) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let draft = RwSignal::new(EditorDraft::default());
    let loaded = RwSignal::new(if form_id.is_some() { LoadState::Loading } else { LoadState::Ready(()) });

    if let Some(id) = form_id {
        let api = ctx.api.clone();
        spawn_guarded(&ctx, ticket, async move { api.form(id).await }, move |result| match result {
            Ok(Some(form)) => {
                draft.set(EditorDraft::from_form(&form));
                loaded.set(LoadState::Ready(()));
            }
            other => {
                if let Err(e) = other {
                    log::warn!("form {id} failed to load: {e}");
                }
                loaded.set(LoadState::Failed);
            }
        });
    }

    move || match loaded.get() {
        LoadState::Loading => view! { <p class="loading">"Chargement..."</p> }.into_any(),
        LoadState::Failed => view! { <ErrorView info=ErrorInfo::GENERIC /> }.into_any(),
        LoadState::Ready(()) => view! { <EditorForm form_id ticket draft /> }.into_any(),
    }
}

#[component]
fn EditorForm(form_id: Option<i64>, ticket: NavTicket, draft: RwSignal<EditorDraft>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let errors = RwSignal::new(ValidationErrors::default());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let save_ctx = ctx.clone();
    #[cfg(feature = "csr")]
    let save_navigate = navigate.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match draft.with(EditorDraft::to_payload) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        busy.set(true);

        let api = save_ctx.api.clone();
        let notifier = save_ctx.notifier;
        #[cfg(feature = "csr")]
        let navigate = save_navigate.clone();
        let save = async move {
            match form_id {
                Some(id) => api.update_form(id, &payload).await,
                None => api.create_form(&payload).await,
            }
        };
        spawn_guarded(&save_ctx, ticket, save, move |result| {
            busy.set(false);
            match result {
                Ok(Some(saved)) => {
                    notifier.success(SAVED_MESSAGE);
                    #[cfg(feature = "csr")]
                    navigate(&format!("/forms/{}", saved.id), leptos_router::NavigateOptions::default());
                    #[cfg(not(feature = "csr"))]
                    let _ = saved;
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("saving form failed: {e}");
                    notifier.error(SAVE_FAILED_MESSAGE);
                }
            }
        });
    };

    let on_delete = move |_| {
        let Some(id) = form_id else {
            return;
        };
        if busy.get() || !confirm_delete() {
            return;
        }
        busy.set(true);

        let api = ctx.api.clone();
        let notifier = ctx.notifier;
        #[cfg(feature = "csr")]
        let navigate = navigate.clone();
        spawn_guarded(&ctx, ticket, async move { api.delete_form(id).await }, move |result| {
            busy.set(false);
            match result {
                Ok(Some(_)) => {
                    notifier.success(DELETED_MESSAGE);
                    #[cfg(feature = "csr")]
                    navigate("/forms", leptos_router::NavigateOptions::default());
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("deleting form {id} failed: {e}");
                    notifier.error(DELETE_FAILED_MESSAGE);
                }
            }
        });
    };

    let field_error = move |name: &'static str| {
        move || errors.with(|e| e.get(name).map(|m| view! { <span class="field-error">{m.to_owned()}</span> }))
    };
    let heading = if form_id.is_some() { "Éditer le formulaire" } else { "Nouveau formulaire" };

    view! {
        <section class="form-editor">
            <h1>{heading}</h1>
            <form on:submit=on_save novalidate=true>
                <div class="form-group">
                    <label for="title">"Titre"</label>
                    <input
                        class="form-control"
                        type="text"
                        id="title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                    {field_error("title")}
                </div>
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        class="form-control"
                        id="description"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="structure">"Structure (JSON)"</label>
                    <textarea
                        class="form-control form-editor__structure"
                        id="structure"
                        rows="12"
                        prop:value=move || draft.with(|d| d.structure_json.clone())
                        on:input=move |ev| draft.update(|d| d.structure_json = event_target_value(&ev))
                    ></textarea>
                    {field_error("structure")}
                </div>
                <div class="form-editor__actions">
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        "Enregistrer"
                    </button>
                    {form_id
                        .map(|_| {
                            view! {
                                <button
                                    class="btn btn-danger"
                                    type="button"
                                    disabled=move || busy.get()
                                    on:click=on_delete
                                >
                                    "Supprimer"
                                </button>
                            }
                        })}
                    <a class="btn btn-secondary" href="/forms">
                        "Annuler"
                    </a>
                </div>
            </form>
        </section>
    }
}

fn confirm_delete() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Supprimer ce formulaire ?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
