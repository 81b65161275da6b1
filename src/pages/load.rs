//! Page data loading tied to a navigation ticket.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages start their API calls when mounted. `spawn_guarded` awaits the call
//! and `deliver` hands the outcome to the page only if no newer navigation
//! started in the meantime. A `None` payload means the API client already
//! handled a 401, so the in-memory session is expired as well, stale or not.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::future::Future;

use crate::app::AppContext;
use crate::error::ApiError;
use crate::router::navigation::{NavTicket, NavigationTracker};

/// Data state of a page section.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed,
}

/// Collapse an API outcome into a section state.
pub fn settle<T>(result: Result<Option<T>, ApiError>) -> LoadState<T> {
    match result {
        Ok(Some(value)) => LoadState::Ready(value),
        Ok(None) => LoadState::Failed,
        Err(e) => {
            log::warn!("page load failed: {e}");
            LoadState::Failed
        }
    }
}

/// Route a finished load. A handled 401 always expires the session; the
/// result itself reaches `apply` only while `ticket` is still current.
/// Returns whether `apply` ran.
pub fn deliver<T, E, A>(
    navigation: &NavigationTracker,
    ticket: NavTicket,
    result: Result<Option<T>, ApiError>,
    expire: E,
    apply: A,
) -> bool
where
    E: FnOnce(),
    A: FnOnce(Result<Option<T>, ApiError>),
{
    if matches!(result, Ok(None)) {
        expire();
    }
    if !navigation.is_current(ticket) {
        log::debug!("dropping stale result of navigation #{}", ticket.seq());
        return false;
    }
    apply(result);
    true
}

/// Run `load` in the background and `deliver` its result.
pub fn spawn_guarded<T, F, A>(ctx: &AppContext, ticket: NavTicket, load: F, apply: A)
where
    T: 'static,
    F: Future<Output = Result<Option<T>, ApiError>> + 'static,
    A: FnOnce(Result<Option<T>, ApiError>) + 'static,
{
    #[cfg(feature = "csr")]
    {
        let navigation = ctx.navigation.clone();
        let sessions = ctx.sessions.clone();
        leptos::task::spawn_local(async move {
            let result = load.await;
            deliver(&navigation, ticket, result, || sessions.expire(), apply);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ctx, ticket, load, apply);
    }
}
