//! Stateful category sidebar widget.
//!
//! The sidebar owns a retained fragment, the single optional selected
//! id, and a fetch generation counter. Fetching is split into
//! [`CategorySidebar::begin_fetch`] / [`CategorySidebar::apply_fetch`]
//! so a host may run the fetch wherever it likes and deliver the result
//! later; a response whose ticket no longer matches the current
//! generation is dropped instead of repopulating a reactivated widget.

use std::fmt;

use catnav_core::{CategoryId, CategoryRecord, CategorySource, FetchError, SelectionChanged, assemble};
use catnav_dom::{Element, Node};

use crate::render::{DATA_ID_ATTR, NODE_CLASS, SELECTED_CLASS, render_tree};

/// Class on the widget's root element.
pub const SIDEBAR_CLASS: &str = "category-sidebar";
/// Class on the header row above the tree.
pub const HEADER_CLASS: &str = "category-sidebar-header";
/// Class on the reset control in the header.
pub const RESET_CLASS: &str = "category-reset";

const HEADER_TITLE: &str = "Categories";
const RESET_LABEL: &str = "Reset";

/// Handle identifying one fetch attempt.
///
/// Produced by [`CategorySidebar::begin_fetch`]; only the ticket from
/// the most recent call is still live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What the delegated click handler learned about the clicked element.
///
/// The host installs one listener on the widget root and forwards the
/// target's classes and `data-category-id` value here, so dynamically
/// rendered nodes need no per-node binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    classes: Vec<String>,
    category_id: Option<CategoryId>,
}

impl ClickTarget {
    /// Describe a clicked element directly.
    #[must_use]
    pub fn new(classes: Vec<String>, category_id: Option<CategoryId>) -> Self {
        Self {
            classes,
            category_id,
        }
    }

    /// Read the relevant class list and id attribute off an element.
    #[must_use]
    pub fn from_element(element: &Element) -> Self {
        Self {
            classes: element.classes().to_vec(),
            category_id: element
                .attr_value(DATA_ID_ATTR)
                .and_then(|value| value.parse().ok()),
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }
}

type SelectionObserver = Box<dyn FnMut(SelectionChanged)>;

/// Hierarchical category filter sidebar.
pub struct CategorySidebar {
    selected: Option<CategoryId>,
    generation: u64,
    fragment: Element,
    observers: Vec<SelectionObserver>,
}

impl CategorySidebar {
    /// Create an inactive sidebar with an empty root element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: None,
            generation: 0,
            fragment: Element::new("div").class(SIDEBAR_CLASS),
            observers: Vec::new(),
        }
    }

    /// The currently selected category id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<CategoryId> {
        self.selected
    }

    /// The retained fragment, for mounting or serialization.
    #[must_use]
    pub fn fragment(&self) -> &Element {
        &self.fragment
    }

    /// Register an observer for selection changes.
    ///
    /// Observers are called synchronously, in registration order, on
    /// every [`select`](Self::select) and [`reset`](Self::reset).
    pub fn on_selection<F: FnMut(SelectionChanged) + 'static>(&mut self, observer: F) {
        self.observers.push(Box::new(observer));
    }

    /// Start a fetch attempt, invalidating any ticket issued earlier.
    #[must_use]
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "category fetch started");
        FetchTicket(self.generation)
    }

    /// Apply the outcome of a fetch attempt.
    ///
    /// A stale ticket is dropped without touching the widget. On
    /// success the fragment is rebuilt (header with reset control, then
    /// the rendered tree) and the selection is cleared. On failure the
    /// widget keeps its pre-fetch state and the error propagates to the
    /// caller.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CategoryRecord>, FetchError>,
    ) -> Result<(), FetchError> {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping stale category fetch response"
            );
            return Ok(());
        }
        let records = match result {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "category fetch failed");
                return Err(err);
            }
        };

        let forest = assemble(&records);
        self.selected = None;
        self.fragment.clear_children();
        let header = Element::new("div")
            .class(HEADER_CLASS)
            .child(Element::new("h4").text(HEADER_TITLE))
            .child(Element::new("button").class(RESET_CLASS).text(RESET_LABEL));
        self.fragment.push_child(Node::Element(header));
        self.fragment.push_child(Node::Element(render_tree(&forest)));
        tracing::debug!(nodes = forest.len(), "category sidebar rendered");
        Ok(())
    }

    /// Fetch and render in one synchronous call.
    pub fn activate(&mut self, source: &dyn CategorySource) -> Result<(), FetchError> {
        let ticket = self.begin_fetch();
        let result = source.fetch_categories_with_counts();
        self.apply_fetch(ticket, result)
    }

    /// Select a category: move the highlight, record the id, notify.
    pub fn select(&mut self, id: CategoryId) {
        self.clear_highlight();
        let wanted = id.to_string();
        if let Some(anchor) = self
            .fragment
            .find_mut(&mut |el| el.has_class(NODE_CLASS) && el.attr_value(DATA_ID_ATTR) == Some(wanted.as_str()))
        {
            anchor.add_class(SELECTED_CLASS);
        }
        self.selected = Some(id);
        tracing::debug!(id, "category selected");
        self.notify(SelectionChanged { id: Some(id) });
    }

    /// Clear the selection and highlight, notify with `id: None`.
    pub fn reset(&mut self) {
        self.clear_highlight();
        self.selected = None;
        tracing::debug!("category selection reset");
        self.notify(SelectionChanged { id: None });
    }

    /// Delegated click dispatch for the widget root.
    ///
    /// Returns whether the click addressed this widget (a node anchor
    /// or the reset control).
    pub fn handle_click(&mut self, target: &ClickTarget) -> bool {
        if target.has_class(RESET_CLASS) {
            self.reset();
            return true;
        }
        if target.has_class(NODE_CLASS)
            && let Some(id) = target.category_id
        {
            self.select(id);
            return true;
        }
        false
    }

    fn clear_highlight(&mut self) {
        self.fragment.walk_mut(&mut |el| el.remove_class(SELECTED_CLASS));
    }

    fn notify(&mut self, event: SelectionChanged) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

impl Default for CategorySidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CategorySidebar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategorySidebar")
            .field("selected", &self.selected)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
