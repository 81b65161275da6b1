//! REST API client for `/api/v1`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every server call goes through `ApiClient::request`, which prefixes the
//! base path, injects the bearer token and normalizes the outcome:
//!
//! - `401` clears the stored token, redirects to `/login` and yields
//!   `Ok(None)`. Callers must read `None` as "unauthenticated", never as
//!   "no data".
//! - any other non-2xx status is `ApiError::Status`.
//! - 2xx decodes the JSON body into the requested type.
//!
//! The endpoint helpers below are fixed-shape wrappers with literal paths.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged here and returned to the caller, which decides between
//! a notification and the generic error view. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpBody, HttpRequest, HttpTransport, Method, MultipartBody};
use super::types::{
    FileRecord, Form, FormPayload, LoginRequest, LoginResponse, Message, NewMessage, NewTicket, Ticket, User,
};
use crate::config::{ClientConfig, LOGIN_PATH};
use crate::error::ApiError;
use crate::state::token_store::TokenStore;
use crate::util::redirect::Redirect;

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-call request options.
///
/// Header overrides replace defaults with the same name (case-insensitive);
/// a `None` value removes the default entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub body: HttpBody,
    pub headers: Vec<(String, Option<String>)>,
}

impl RequestOptions {
    /// JSON body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if the value cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        let text = serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { body: HttpBody::Json(text), headers: Vec::new() })
    }

    /// Multipart body. Drops the default JSON content type so the browser
    /// supplies the multipart boundary.
    pub fn multipart(body: MultipartBody) -> Self {
        Self { body: HttpBody::Multipart(body), headers: Vec::new() }.without_header(CONTENT_TYPE)
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), Some(value.to_owned())));
        self
    }

    #[must_use]
    pub fn without_header(mut self, name: &str) -> Self {
        self.headers.push((name.to_owned(), None));
        self
    }
}

/// Default headers, then bearer auth, then caller overrides.
fn merge_headers(token: Option<&str>, overrides: &[(String, Option<String>)]) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())];
    if let Some(token) = token {
        headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
    }
    for (name, value) in overrides {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        if let Some(value) = value {
            headers.push((name.clone(), value.clone()));
        }
    }
    headers
}

fn form_endpoint(form_id: i64) -> String {
    format!("/forms/{form_id}")
}

/// HTTP client bound to one base path, token store and redirect target.
pub struct ApiClient<T> {
    config: Arc<ClientConfig>,
    transport: T,
    tokens: Arc<dyn TokenStore>,
    redirect: Arc<dyn Redirect>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(config: Arc<ClientConfig>, transport: T, tokens: Arc<dyn TokenStore>, redirect: Arc<dyn Redirect>) -> Self {
        Self { config, transport, tokens, redirect }
    }

    fn build_request(&self, method: Method, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let token = self.tokens.load();
        HttpRequest {
            method,
            url: self.config.api_url(endpoint),
            headers: merge_headers(token.as_deref(), &options.headers),
            body: options.body,
        }
    }

    /// Send one request and decode the JSON answer.
    ///
    /// Returns `Ok(None)` after a 401 (token cleared, redirected to login).
    ///
    /// # Errors
    ///
    /// `ApiError::Transport` when no response arrived, `ApiError::Status` for
    /// other non-2xx statuses and `ApiError::Decode` for an unexpected body.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<R>, ApiError> {
        let request = self.build_request(method, endpoint, options);
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("API request failed: {} {endpoint}: {e}", method.as_str());
                return Err(e.into());
            }
        };

        if response.status == 401 {
            log::warn!("{} {endpoint} rejected as unauthorized; clearing session token", method.as_str());
            self.tokens.clear();
            self.redirect.redirect(LOGIN_PATH);
            return Ok(None);
        }
        if !response.is_success() {
            log::error!("API request failed: {} {endpoint}: status {}", method.as_str(), response.status);
            return Err(ApiError::Status(response.status));
        }

        let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
        serde_json::from_str(body).map(Some).map_err(|e| {
            log::error!("API response parse failed: {} {endpoint}: {e}", method.as_str());
            ApiError::Decode(e.to_string())
        })
    }

    async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<R>, ApiError> {
        self.request(Method::Get, endpoint, RequestOptions::default()).await
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Option<R>, ApiError> {
        self.request(method, endpoint, RequestOptions::json(body)?).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<LoginResponse>, ApiError> {
        self.send_json(Method::Post, "/auth/login", &LoginRequest { email, password }).await
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn current_user(&self) -> Result<Option<User>, ApiError> {
        self.get("/auth/me").await
    }

    // =========================================================================
    // Forms
    // =========================================================================

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn forms(&self) -> Result<Option<Vec<Form>>, ApiError> {
        self.get("/forms").await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn form(&self, form_id: i64) -> Result<Option<Form>, ApiError> {
        self.get(&form_endpoint(form_id)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_form(&self, payload: &FormPayload) -> Result<Option<Form>, ApiError> {
        self.send_json(Method::Post, "/forms", payload).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_form(&self, form_id: i64, payload: &FormPayload) -> Result<Option<Form>, ApiError> {
        self.send_json(Method::Put, &form_endpoint(form_id), payload).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_form(&self, form_id: i64) -> Result<Option<serde_json::Value>, ApiError> {
        self.request(Method::Delete, &form_endpoint(form_id), RequestOptions::default()).await
    }

    // =========================================================================
    // Messages / tickets
    // =========================================================================

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn messages(&self) -> Result<Option<Vec<Message>>, ApiError> {
        self.get("/messages").await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn send_message(&self, message: &NewMessage) -> Result<Option<Message>, ApiError> {
        self.send_json(Method::Post, "/messages", message).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn tickets(&self) -> Result<Option<Vec<Ticket>>, ApiError> {
        self.get("/tickets").await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<Option<Ticket>, ApiError> {
        self.send_json(Method::Post, "/tickets", ticket).await
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// `POST /files/upload` with a multipart body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn upload_file(&self, body: MultipartBody) -> Result<Option<FileRecord>, ApiError> {
        self.request(Method::Post, "/files/upload", RequestOptions::multipart(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn files(&self) -> Result<Option<Vec<FileRecord>>, ApiError> {
        self.get("/files").await
    }
}
