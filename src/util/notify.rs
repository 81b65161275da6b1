//! `notify()` for pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the reactive `NotificationState` signal. Each toast is removed by
//! its own timer after the configured lifetime unless the user closed it
//! first.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::notifications::{NotificationKind, NotificationState};

#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(state: RwSignal<NotificationState>, ttl_ms: u32) -> Self {
        Self { state, ttl_ms }
    }

    pub fn state(&self) -> RwSignal<NotificationState> {
        self.state
    }

    /// Show a toast that expires on its own.
    pub fn notify(&self, message: &str, kind: NotificationKind) -> Uuid {
        let mut id = Uuid::nil();
        self.state.update(|s| id = s.push(message, kind));
        self.schedule_expiry(id);
        id
    }

    pub fn error(&self, message: &str) -> Uuid {
        self.notify(message, NotificationKind::Error)
    }

    pub fn success(&self, message: &str) -> Uuid {
        self.notify(message, NotificationKind::Success)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.state.update(|s| {
            s.dismiss(id);
        });
    }

    fn schedule_expiry(&self, id: Uuid) {
        #[cfg(feature = "csr")]
        {
            let state = self.state;
            gloo_timers::callback::Timeout::new(self.ttl_ms, move || {
                let _ = state.try_update(|s| s.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, self.ttl_ms);
        }
    }
}
