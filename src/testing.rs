//! In-memory fakes shared by unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::net::api::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::net::types::{Role, User};
use crate::state::token_store::MemoryTokenStore;
use crate::util::redirect::RecordingRedirect;

/// Replays queued outcomes in order and records every request it saw.
#[derive(Debug, Default, Clone)]
pub struct FakeTransport {
    replies: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies.lock().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn reply_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.reply(status, &body.to_string())
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.replies.lock().push_back(Err(error));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().clone()
    }
}

impl HttpTransport for FakeTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>> {
        self.sent.lock().push(request);
        let next = self.replies.lock().pop_front().unwrap_or(Err(TransportError::Network("no reply queued".to_owned())));
        async move { next }
    }
}

/// Everything an `ApiClient` test needs to inspect afterwards.
pub struct Harness {
    pub transport: FakeTransport,
    pub tokens: Arc<MemoryTokenStore>,
    pub redirect: Arc<RecordingRedirect>,
    pub api: Arc<ApiClient<FakeTransport>>,
}

pub fn harness(token: Option<&str>) -> Harness {
    let transport = FakeTransport::default();
    let tokens = Arc::new(token.map(MemoryTokenStore::with_token).unwrap_or_default());
    let redirect = Arc::new(RecordingRedirect::default());
    let api = Arc::new(ApiClient::new(
        Arc::new(ClientConfig::default()),
        transport.clone(),
        tokens.clone(),
        redirect.clone(),
    ));
    Harness { transport, tokens, redirect, api }
}

pub fn user(role: Role) -> User {
    User {
        id: 1,
        name: Some("Alice".to_owned()),
        username: None,
        email: Some("alice@example.com".to_owned()),
        role,
    }
}

pub fn user_json(role: &str) -> serde_json::Value {
    serde_json::json!({ "id": 1, "name": "Alice", "email": "alice@example.com", "role": role })
}
