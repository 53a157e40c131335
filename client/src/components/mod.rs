//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one `widgets` state machine in a signal, renders it,
//! and translates DOM events into state operations. Shared state (leads,
//! toasts, config) comes from Leptos context providers.

pub mod copy_button;
pub mod dropdown;
pub mod kanban_board;
pub mod multi_select;
pub mod tabs;
pub mod toast_stack;
