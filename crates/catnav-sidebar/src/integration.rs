//! Glue between the sidebar and a host list view.

use std::cell::RefCell;
use std::rc::Rc;

use catnav_core::{CategoryFilter, SelectionChanged};

use crate::mount::{HostLayout, MountTarget, resolve_mount};
use crate::sidebar::CategorySidebar;

/// The host list view, as seen from this module.
///
/// The host owns data loading and its own chrome; `reload` is assumed
/// idempotent and safe to invoke on every selection change.
pub trait HostListView {
    /// Data-type name of the records the list displays.
    fn model_name(&self) -> &str;

    /// Which mount candidates currently exist in the host's chrome.
    fn layout(&self) -> HostLayout;

    /// Place the sidebar fragment at the resolved target.
    fn mount_sidebar(&mut self, target: MountTarget);

    /// Reload list data, optionally restricted to a category subtree.
    fn reload(&mut self, filter: Option<CategoryFilter>);
}

/// Attaches a [`CategorySidebar`] to list views of one data type.
#[derive(Debug, Clone)]
pub struct ListIntegration {
    governs: String,
}

impl ListIntegration {
    /// Create an integration governing the given data-type name.
    #[must_use]
    pub fn new(governs: impl Into<String>) -> Self {
        Self {
            governs: governs.into(),
        }
    }

    /// The data-type name this integration applies to.
    #[must_use]
    pub fn governs(&self) -> &str {
        &self.governs
    }

    /// Map a selection event to the reload filter the host should use.
    #[must_use]
    pub fn filter_for(event: &SelectionChanged) -> Option<CategoryFilter> {
        event.id.map(CategoryFilter::ChildOf)
    }

    /// Wire a sidebar into a matching host view.
    ///
    /// Does nothing and returns `false` when the host displays a
    /// different data type. Otherwise resolves the mount target, asks
    /// the host to mount the sidebar there, and registers a selection
    /// observer that reloads the host with the translated filter.
    pub fn attach<H: HostListView + 'static>(
        &self,
        sidebar: &mut CategorySidebar,
        host: &Rc<RefCell<H>>,
    ) -> bool {
        if host.borrow().model_name() != self.governs {
            return false;
        }
        let target = resolve_mount(host.borrow().layout());
        tracing::debug!(?target, model = %self.governs, "attaching category sidebar");
        host.borrow_mut().mount_sidebar(target);

        let host = Rc::clone(host);
        sidebar.on_selection(move |event| {
            host.borrow_mut().reload(Self::filter_for(&event));
        });
        true
    }
}
