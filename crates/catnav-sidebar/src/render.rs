//! Forest to element fragment.
//!
//! Purely structural: one `ul` per sibling group, one `li` per node
//! holding a clickable anchor, and a nested `ul` directly after the
//! anchor when the node has children. No event binding happens here;
//! the sidebar dispatches clicks by delegation on its root element.

use catnav_core::{CategoryNode, Forest};
use catnav_dom::Element;

/// Class on every `ul` level of the rendered tree.
pub const TREE_CLASS: &str = "category-tree";
/// Class on every clickable node anchor.
pub const NODE_CLASS: &str = "category-node";
/// Class marking the currently selected anchor.
pub const SELECTED_CLASS: &str = "selected";
/// Attribute carrying the node's category id.
pub const DATA_ID_ATTR: &str = "data-category-id";

/// Display text for a node: the bare name, or `name (count)` when the
/// count is nonzero.
#[must_use]
pub fn node_label(name: &str, count: u64) -> String {
    if count == 0 {
        name.to_owned()
    } else {
        format!("{name} ({count})")
    }
}

/// Render a forest into a nested list fragment.
///
/// Total over any forest [`catnav_core::assemble`] produces; sibling
/// order is preserved.
#[must_use]
pub fn render_tree(forest: &Forest) -> Element {
    render_level(forest.roots())
}

fn render_level(nodes: &[CategoryNode]) -> Element {
    let mut list = Element::new("ul").class(TREE_CLASS);
    for node in nodes {
        let anchor = Element::new("a")
            .class(NODE_CLASS)
            .attr(DATA_ID_ATTR, node.id().to_string())
            .text(node_label(node.name(), node.count()));
        let mut item = Element::new("li").child(anchor);
        if !node.children().is_empty() {
            item = item.child(render_level(node.children()));
        }
        list = list.child(item);
    }
    list
}
