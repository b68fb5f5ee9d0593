#![forbid(unsafe_code)]

//! Category sidebar widget and host integration for ERP list views.
//!
//! The sidebar fetches the category list through a host-provided
//! source, assembles it into a forest ([`catnav_core::assemble`]),
//! renders a clickable nested list, and reports selection changes to
//! registered observers. [`ListIntegration`] wires those events to the
//! host list view's reload, translating a selection into a
//! child-of filter.
//!
//! A separate, deliberately tiny policy ([`autosave::AutoSavePolicy`])
//! covers the one form-view behavior this module ships: saving an
//! inactive record of one specific type on every field change.

pub mod autosave;
pub mod integration;
pub mod mount;
pub mod render;
pub mod sidebar;

pub use autosave::{AutoSavePolicy, FormMode, FormSaver, FormState};
pub use integration::{HostListView, ListIntegration};
pub use mount::{HostLayout, MountTarget, resolve_mount};
pub use render::{node_label, render_tree};
pub use sidebar::{CategorySidebar, ClickTarget, FetchTicket};
