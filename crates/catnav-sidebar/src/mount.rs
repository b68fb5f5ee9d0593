//! Mount-target resolution.
//!
//! The original behavior searched live ancestor containers for an
//! insertion point; here the host describes which containers exist and
//! resolution is a pure function over that descriptor, so the fallback
//! chain is testable without a page.

/// Where the sidebar is mounted inside the host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountTarget {
    /// The dedicated left slot of the control panel.
    PrimaryToolbar,
    /// The control panel's generic toolbar container.
    AltToolbar,
    /// The control panel element itself.
    ControlPanel,
    /// Prepended directly inside the view root. Always available.
    ViewRoot,
}

/// Which mount candidates the host's current chrome offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostLayout {
    /// A dedicated left toolbar slot exists.
    pub has_primary_toolbar: bool,
    /// A generic toolbar container exists.
    pub has_alt_toolbar: bool,
    /// A control panel element exists.
    pub has_control_panel: bool,
}

/// First available target in the fallback chain: primary toolbar, then
/// the alternate toolbar, then the control panel, then the view root.
#[must_use]
pub fn resolve_mount(layout: HostLayout) -> MountTarget {
    if layout.has_primary_toolbar {
        MountTarget::PrimaryToolbar
    } else if layout.has_alt_toolbar {
        MountTarget::AltToolbar
    } else if layout.has_control_panel {
        MountTarget::ControlPanel
    } else {
        MountTarget::ViewRoot
    }
}
