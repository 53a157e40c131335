//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own lead business rules so route handlers can stay
//! focused on protocol translation and CSRF plumbing.

pub mod leads;
