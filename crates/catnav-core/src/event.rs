//! Events and filters exchanged with the host list view.

use crate::record::CategoryId;

/// Emitted by the sidebar whenever its selection changes.
///
/// `id: None` means the selection was cleared and the host should show
/// the unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The newly selected category, or `None` after a reset.
    pub id: Option<CategoryId>,
}

/// Filter predicate the host applies when reloading its list data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Matches the given category or any category whose ancestor chain
    /// includes it.
    ChildOf(CategoryId),
}
