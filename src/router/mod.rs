//! Client-side routing.
//!
//! ARCHITECTURE
//! ============
//! `routes` holds the static table, `matcher` turns a path into a
//! `RouteMatch`, and `navigation` applies the session gates and tracks which
//! navigation is current. History, popstate and link interception come from
//! `leptos_router`; the shell in `app` feeds its location into `decide`.

pub mod matcher;
pub mod navigation;
pub mod routes;
