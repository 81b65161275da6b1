//! Notification toast state.
//!
//! DESIGN
//! ======
//! Pure bookkeeping: which toasts are visible, in display order. The tray
//! component paints them and `util::notify::Notifier` owns the expiry
//! timers, so everything here is testable without a browser.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// CSS modifier class used by the tray (`notification error`, ...).
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, message: &str, kind: NotificationKind) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notification { id, message: message.to_owned(), kind });
        id
    }

    /// Remove a toast. Dismissing twice (close button, then timer) is fine.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
