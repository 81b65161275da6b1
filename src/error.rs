//! Error types shared by the network and session layers.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is retried. Pages map these to either a notification toast or
//! the generic error view; none of them should ever panic the WASM module.

/// Failure to get any HTTP response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be constructed (bad header, bad body).
    #[error("request build failed: {0}")]
    Build(String),

    /// The browser reported a network-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Reading the response body failed.
    #[error("response read failed: {0}")]
    Body(String),

    /// No browser environment (native builds and tests without a fake).
    #[error("http transport not available outside the browser")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx status other than 401.
    #[error("HTTP error: status {0}")]
    Status(u16),

    #[error("API response parse failed: {0}")]
    Decode(String),

    #[error("API request encode failed: {0}")]
    Encode(String),
}

/// User-facing session failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Échec de la connexion. Veuillez vérifier vos identifiants.")]
    LoginFailed,
}
