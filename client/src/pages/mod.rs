//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and delegates rendering details to
//! `components`.

pub mod lead_form;
pub mod leads;
