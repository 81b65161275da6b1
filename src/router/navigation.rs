//! Navigation decisions and stale-result guarding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location change runs `decide` against the current session and takes
//! a fresh `NavTicket`. Page loaders hold on to their ticket and drop their
//! result if `NavigationTracker::is_current` says a newer navigation started
//! while they were awaiting the network.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::matcher::{RouteMatch, RouteTable};
use crate::state::auth::Session;

/// Sequence number of one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NavTicket(u64);

impl NavTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Monotonic navigation counter shared by the shell and page loaders.
#[derive(Clone, Debug, Default)]
pub struct NavigationTracker {
    seq: Arc<AtomicU64>,
}

impl NavigationTracker {
    /// Start a navigation; every earlier ticket becomes stale.
    pub fn begin(&self) -> NavTicket {
        NavTicket(self.seq.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: NavTicket) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket.0
    }
}

/// Terminal error screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    pub code: u16,
    pub message: &'static str,
}

impl ErrorInfo {
    pub const NOT_FOUND: Self = Self { code: 404, message: "Page non trouvée" };
    pub const FORBIDDEN: Self = Self { code: 403, message: "Accès non autorisé" };
    pub const GENERIC: Self = Self { code: 500, message: "Une erreur est survenue" };
}

/// What the shell should do for a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Render(RouteMatch),
    /// Auth gate tripped; navigate to `/login` instead.
    RedirectToLogin,
    Error(ErrorInfo),
}

/// Resolve `path` and apply the auth and admin gates, in that order.
pub fn decide(table: &RouteTable, path: &str, session: &Session) -> NavOutcome {
    let Some(matched) = table.resolve(path) else {
        return NavOutcome::Error(ErrorInfo::NOT_FOUND);
    };
    if matched.route.requires_auth && !session.is_authenticated() {
        return NavOutcome::RedirectToLogin;
    }
    if matched.route.requires_admin && !session.is_admin() {
        return NavOutcome::Error(ErrorInfo::FORBIDDEN);
    }
    NavOutcome::Render(matched)
}
