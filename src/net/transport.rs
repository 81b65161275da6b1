//! HTTP transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` builds plain `HttpRequest` values and hands them to an
//! `HttpTransport`. In the browser that is `FetchTransport` (`gloo-net`);
//! tests substitute an in-memory fake so status handling and header merging
//! are checked without a network.
//!
//! TRADE-OFFS
//! ==========
//! The trait returns a non-`Send` future: everything runs on the browser's
//! single thread via `spawn_local`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One part of a `multipart/form-data` body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MultipartPart {
    Text { name: String, value: String },
    File { name: String, filename: String, content_type: String, bytes: Vec<u8> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartBody {
    pub parts: Vec<MultipartPart>,
}

impl MultipartBody {
    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(MultipartPart::Text { name: name.to_owned(), value: value.to_owned() });
        self
    }

    #[must_use]
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.to_owned(),
            filename: filename.to_owned(),
            content_type: content_type.to_owned(),
            bytes,
        });
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HttpBody {
    #[default]
    Empty,
    /// Serialized JSON text.
    Json(String),
    Multipart(MultipartBody),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Final header set, already merged. Names are unique ignoring case.
    pub headers: Vec<(String, String)>,
    pub body: HttpBody,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a fully built request and returns whatever the server answered.
///
/// Implementations report only transport-level failures as errors; every
/// HTTP status, including 4xx/5xx, is a successful `HttpResponse`.
pub trait HttpTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

/// Browser `fetch()` transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    #[allow(clippy::manual_async_fn)]
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>> {
        async move {
            #[cfg(feature = "csr")]
            {
                fetch(request).await
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = request;
                Err(TransportError::Unavailable)
            }
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::{Request, RequestBuilder};

    let mut builder: RequestBuilder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let built = match request.body {
        HttpBody::Empty => builder.build(),
        HttpBody::Json(text) => builder.body(text),
        HttpBody::Multipart(body) => builder.body(multipart_form_data(&body)?),
    }
    .map_err(|e| TransportError::Build(e.to_string()))?;

    let response = built.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "csr")]
fn multipart_form_data(body: &MultipartBody) -> Result<web_sys::FormData, TransportError> {
    let js_err = |e: wasm_bindgen::JsValue| TransportError::Build(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    for part in &body.parts {
        match part {
            MultipartPart::Text { name, value } => form.append_with_str(name, value).map_err(js_err)?,
            MultipartPart::File { name, filename, content_type, bytes } => {
                let chunk = js_sys::Uint8Array::from(bytes.as_slice());
                let sequence = js_sys::Array::of1(&chunk);
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(content_type);
                let blob =
                    web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options).map_err(js_err)?;
                form.append_with_blob_and_filename(name, &blob, filename).map_err(js_err)?;
            }
        }
    }
    Ok(form)
}
