//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the seam to the browser's fetch, `api` layers base-path,
//! bearer-token and status handling on top of it, and `types` defines the
//! JSON schema shared with the server.

pub mod api;
pub mod transport;
pub mod types;
