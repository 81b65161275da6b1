//! Client-side file download.
//!
//! Fetches the resource, wraps the bytes in a `Blob` and clicks a temporary
//! `<a download>` so the browser saves it under the requested name. Errors
//! never escape: they are logged and shown as a toast.

use super::notify::Notifier;

pub const DOWNLOAD_FAILED_MESSAGE: &str = "Échec du téléchargement du fichier";

pub async fn download_blob(url: &str, filename: &str, notifier: Notifier) {
    if let Err(e) = save_blob(url, filename).await {
        log::error!("download failed: {url}: {e}");
        notifier.error(DOWNLOAD_FAILED_MESSAGE);
    }
}

#[cfg(feature = "csr")]
async fn save_blob(url: &str, filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");

    let response = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("status {}", response.status()));
    }
    let bytes = response.binary().await.map_err(|e| e.to_string())?;

    let chunk = js_sys::Uint8Array::from(bytes.as_slice());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&chunk)).map_err(js_err)?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window().and_then(|w| w.document()).ok_or("no document")?;
    let body = document.body().ok_or("no body")?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(&object_url);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&object_url);
    anchor.remove();
    Ok(())
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
async fn save_blob(url: &str, filename: &str) -> Result<(), String> {
    let _ = (url, filename);
    Err("downloads need a browser".to_owned())
}
