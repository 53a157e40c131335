//! Headless interaction state for the leadboard component library.
//!
//! Every widget here is a plain in-memory state machine. The `client` crate
//! renders each one declaratively and feeds DOM events back in, so the DOM is
//! a projection of this state rather than the state itself. Nothing in this
//! crate touches a browser API, which keeps all of it testable on the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`multi_select`] | Searchable multi-value combobox with chips and hidden form inputs |
//! | [`kanban`] | Drag-and-drop status board with optimistic moves |
//! | [`sync`] | Async seam for confirming kanban moves against a server |
//! | [`dropdown`] | Menu button open/close and keyboard navigation |
//! | [`tabs`] | Tab list selection with roving keyboard focus |
//! | [`toast`] | Notification stack with auto-dismiss and pause/resume |
//! | [`clipboard`] | Copy-button feedback with timed reset |
//! | [`keys`] | Browser key names parsed into a closed enum |
//! | [`subscription`] | Scoped teardown handles for document-level listeners |

pub mod clipboard;
pub mod dropdown;
pub mod kanban;
pub mod keys;
pub mod multi_select;
pub mod subscription;
pub mod sync;
pub mod tabs;
pub mod toast;
