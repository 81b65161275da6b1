//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Everything except `download`, `notify` and `redirect`
//! is pure and tested natively.

pub mod download;
pub mod format;
pub mod html;
pub mod notify;
pub mod redirect;
pub mod validation;
