//! Client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client has no environment to read from; every knob is a compile-time
//! default that callers (mostly tests) can override with the `with_*`
//! builders before the `AppContext` is assembled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api/v1";
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";
pub const DEFAULT_NOTIFICATION_TTL_MS: u32 = 5_000;
pub const DEFAULT_TITLE_SUFFIX: &str = " - Form";
pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every API endpoint.
    pub api_base: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    /// Lifetime of a notification toast before it dismisses itself.
    pub notification_ttl_ms: u32,
    /// Appended to every route title to build `document.title`.
    pub title_suffix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            title_suffix: DEFAULT_TITLE_SUFFIX.to_owned(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_token_key(mut self, token_key: &str) -> Self {
        self.token_key = token_key.to_owned();
        self
    }

    #[must_use]
    pub fn with_notification_ttl_ms(mut self, ttl_ms: u32) -> Self {
        self.notification_ttl_ms = ttl_ms;
        self
    }

    /// Full URL for an API endpoint such as `/forms/3`.
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.api_base)
    }

    /// Document title for a route title.
    pub fn document_title(&self, route_title: &str) -> String {
        format!("{route_title}{}", self.title_suffix)
    }
}
