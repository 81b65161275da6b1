//! Home page: welcome banner and, once signed in, the user's files.
//!
//! SYSTEM CONTEXT
//! ==============
//! Files are listed from `GET /files`, downloaded through
//! `util::download::download_blob` and uploaded as `multipart/form-data` to
//! `POST /files/upload`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{ClientConfig, LOGIN_PATH};
use crate::net::transport::MultipartBody;
use crate::net::types::FileRecord;
use crate::pages::load::{LoadState, settle, spawn_guarded};
use crate::router::navigation::NavTicket;
#[cfg(feature = "csr")]
use crate::util::download::download_blob;
use crate::util::format::{format_file_size, format_optional_date};

const UPLOADED_MESSAGE: &str = "Fichier téléversé";
const UPLOAD_FAILED_MESSAGE: &str = "Erreur lors du téléversement du fichier";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Display row for one stored file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub name: String,
    pub size: String,
    pub uploaded: String,
    pub download_url: String,
}

/// Rows for the files table. Records without a `download_url` get the
/// conventional `/files/{id}/download` endpoint under the API base.
pub fn file_rows(files: &[FileRecord], config: &ClientConfig) -> Vec<FileRow> {
    files
        .iter()
        .map(|f| FileRow {
            name: f.original_name.clone(),
            size: f.file_size.map(format_file_size).unwrap_or_default(),
            uploaded: format_optional_date(f.created_at.as_deref()),
            download_url: f
                .download_url
                .clone()
                .unwrap_or_else(|| config.api_url(&format!("/files/{}/download", f.id))),
        })
        .collect()
}

/// Multipart body for `POST /files/upload` with the file under `file`.
pub fn upload_body(filename: &str, content_type: &str, bytes: Vec<u8>) -> MultipartBody {
    let content_type = if content_type.is_empty() { FALLBACK_CONTENT_TYPE } else { content_type };
    MultipartBody::default().file("file", filename, content_type, bytes)
}

#[component]
pub fn HomePage(ticket: NavTicket) -> impl IntoView {
    let session = expect_context::<AppContext>().session;

    let greeting = move || {
        session.with(|s| match &s.current_user {
            Some(user) => format!("Bienvenue, {}", user.display_name()),
            None => "Bienvenue".to_owned(),
        })
    };

    view! {
        <section class="home-page">
            <h1>{greeting}</h1>
            <Show
                when=move || session.with(|s| s.is_authenticated())
                fallback=|| {
                    view! {
                        <p>
                            "Connectez-vous pour accéder à vos formulaires. "
                            <a href=LOGIN_PATH>"Connexion"</a>
                        </p>
                    }
                }
            >
                <FilesPanel ticket />
            </Show>
        </section>
    }
}

#[component]
fn FilesPanel(ticket: NavTicket) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let files = RwSignal::new(LoadState::<Vec<FileRecord>>::Loading);
    let uploading = RwSignal::new(false);

    let api = ctx.api.clone();
    spawn_guarded(&ctx, ticket, async move { api.files().await }, move |result| files.set(settle(result)));

    let notifier = ctx.notifier;
    let config = ctx.config.clone();

    let upload_ctx = ctx.clone();
    let on_file_selected = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            uploading.set(true);

            let api = upload_ctx.api.clone();
            let upload = async move {
                let bytes = read_file(&file).await.map_err(|e| {
                    crate::error::ApiError::Transport(crate::error::TransportError::Build(e))
                })?;
                api.upload_file(upload_body(&file.name(), &file.type_(), bytes)).await
            };
            spawn_guarded(&upload_ctx, ticket, upload, move |result| {
                uploading.set(false);
                match result {
                    Ok(Some(record)) => {
                        notifier.success(UPLOADED_MESSAGE);
                        files.update(|state| {
                            if let LoadState::Ready(list) = state {
                                list.insert(0, record);
                            }
                        });
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("file upload failed: {e}");
                        notifier.error(UPLOAD_FAILED_MESSAGE);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, &upload_ctx, uploading);
        }
    };

    view! {
        <div class="files-panel">
            <header class="files-panel__header">
                <h2>"Mes fichiers"</h2>
                <label class="btn btn-primary">
                    {move || if uploading.get() { "Téléversement..." } else { "Téléverser un fichier" }}
                    <input
                        type="file"
                        class="files-panel__input"
                        disabled=move || uploading.get()
                        on:change=on_file_selected
                    />
                </label>
            </header>
            {move || match files.get() {
                LoadState::Loading => view! { <p class="loading">"Chargement..."</p> }.into_any(),
                LoadState::Failed => {
                    view! { <p class="empty-state">"Impossible de charger les fichiers"</p> }.into_any()
                }
                LoadState::Ready(list) if list.is_empty() => {
                    view! { <p class="empty-state">"Aucun fichier"</p> }.into_any()
                }
                LoadState::Ready(list) => {
                    let rows = file_rows(&list, &config);
                    view! {
                        <table class="files-table">
                            <thead>
                                <tr>
                                    <th>"Nom"</th>
                                    <th>"Taille"</th>
                                    <th>"Date"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        let FileRow { name, size, uploaded, download_url } = row;
                                        let filename = name.clone();
                                        let on_download = move |_| {
                                            #[cfg(feature = "csr")]
                                            {
                                                let url = download_url.clone();
                                                let filename = filename.clone();
                                                leptos::task::spawn_local(async move {
                                                    download_blob(&url, &filename, notifier).await;
                                                });
                                            }
                                            #[cfg(not(feature = "csr"))]
                                            {
                                                let _ = (&download_url, &filename, notifier);
                                            }
                                        };
                                        view! {
                                            <tr>
                                                <td>{name}</td>
                                                <td>{size}</td>
                                                <td>{uploaded}</td>
                                                <td>
                                                    <button class="btn btn-secondary" on:click=on_download>
                                                        "Télécharger"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(feature = "csr")]
async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
