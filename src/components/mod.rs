//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the layout chrome (menu, user badge, toasts) and shared
//! page pieces while reading the `AppContext` from Leptos context. View-model
//! derivation lives in plain functions next to each component so it can be
//! tested without a DOM.

pub mod dynamic_form;
pub mod error_view;
pub mod notification_tray;
pub mod sidebar_menu;
pub mod user_badge;
