//! Networking modules for the lead REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (including the kanban status `PATCH`), and
//! `types` defines the JSON schema shared with the server.

pub mod api;
pub mod types;
