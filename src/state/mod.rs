//! Client state containers.
//!
//! DESIGN
//! ======
//! Plain Rust state with no Leptos types inside; `app` wraps what needs to be
//! reactive in signals and hands everything else around through `AppContext`.

pub mod auth;
pub mod notifications;
pub mod token_store;
