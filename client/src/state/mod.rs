//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`leads` for pipeline data, `ui` for transient
//! chrome such as toasts) and provided as `RwSignal`s through context.

pub mod leads;
pub mod ui;
