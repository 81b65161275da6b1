//! Durable bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client reads the token for every request and clears it on 401;
//! the session store writes it on login and clears it on logout. Both share
//! one `Arc<dyn TokenStore>` from the `AppContext`.
//!
//! TRADE-OFFS
//! ==========
//! `LocalTokenStore` is best-effort: storage errors (private mode, quota)
//! are logged and otherwise ignored, and native builds always read `None`.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use parking_lot::Mutex;

/// Synchronous key-value slot for the bearer token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-process token slot. Used by tests and as a fallback when the browser
/// refuses `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock() = None;
    }
}

/// Origin-scoped `localStorage` slot under a fixed key.
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the browser exposes `localStorage` at all.
    pub fn is_available() -> bool {
        #[cfg(feature = "csr")]
        {
            Self::storage().is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    #[cfg(feature = "csr")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = Self::storage()?;
            storage.get_item(&self.key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("failed to persist token under {}", self.key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}
