//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell mounts exactly one page per resolved route. Pages that load
//! data receive the navigation ticket of the navigation that mounted them and
//! load through `load::spawn_guarded`.

pub mod form_editor;
pub mod form_view;
pub mod forms;
pub mod home;
pub mod load;
pub mod login;
pub mod messages;
pub mod subsites;
pub mod tickets;
pub mod users;
