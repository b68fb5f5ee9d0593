//! Element tree with builder construction and in-place mutation.

use smallvec::SmallVec;

/// A child of an [`Element`]: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Literal text content (escaped on serialization).
    Text(String),
}

/// One element in a retained fragment.
///
/// Construction is builder-style and consuming; highlight-style updates
/// after construction go through the `&mut self` class helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: SmallVec<[(String, String); 4]>,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: SmallVec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Classes, in the order they were added.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attributes, in the order they were first set.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Value of an attribute, if set.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether the class list contains `name`.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }

    /// Add a class in place; duplicates are ignored.
    pub fn add_class(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_class(&name) {
            self.classes.push(name);
        }
    }

    /// Remove a class in place; absent classes are ignored.
    pub fn remove_class(&mut self, name: &str) {
        self.classes.retain(|class| class != name);
    }

    /// Set an attribute in place, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Append a child node in place.
    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Drop all children.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Collected text of this element's direct and nested text runs.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        fn collect(element: &Element, out: &mut String) {
            for child in &element.children {
                match child {
                    Node::Text(text) => out.push_str(text),
                    Node::Element(el) => collect(el, out),
                }
            }
        }
        collect(self, &mut out);
        out
    }

    /// Visit this element and every descendant element, pre-order.
    pub fn walk<F: FnMut(&Element)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            if let Node::Element(el) = child {
                el.walk(f);
            }
        }
    }

    /// Visit this element and every descendant element mutably, pre-order.
    pub fn walk_mut<F: FnMut(&mut Element)>(&mut self, f: &mut F) {
        f(self);
        for child in &mut self.children {
            if let Node::Element(el) = child {
                el.walk_mut(f);
            }
        }
    }

    /// First element (self included, pre-order) matching the predicate.
    #[must_use]
    pub fn find<F: FnMut(&Element) -> bool>(&self, pred: &mut F) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        for child in &self.children {
            if let Node::Element(el) = child
                && let Some(found) = el.find(pred)
            {
                return Some(found);
            }
        }
        None
    }

    /// Mutable variant of [`Element::find`].
    pub fn find_mut<F: FnMut(&Element) -> bool>(&mut self, pred: &mut F) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(el) = child
                && let Some(found) = el.find_mut(pred)
            {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Element {
        Element::new("ul").class("tree").child(
            Element::new("li").child(
                Element::new("a")
                    .class("node")
                    .attr("data-id", "2")
                    .text("Drills"),
            ),
        )
    }

    #[test]
    fn builder_sets_tag_class_attr() {
        let el = Element::new("a").class("node").attr("data-id", "7");
        assert_eq!(el.tag(), "a");
        assert!(el.has_class("node"));
        assert_eq!(el.attr_value("data-id"), Some("7"));
        assert_eq!(el.attr_value("missing"), None);
    }

    #[test]
    fn add_class_deduplicates() {
        let mut el = Element::new("a");
        el.add_class("selected");
        el.add_class("selected");
        assert_eq!(el.classes(), ["selected"]);
        el.remove_class("selected");
        assert!(!el.has_class("selected"));
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut el = Element::new("a");
        el.set_attr("data-id", "1");
        el.set_attr("data-id", "2");
        assert_eq!(el.attrs().len(), 1);
        assert_eq!(el.attr_value("data-id"), Some("2"));
    }

    #[test]
    fn find_mut_reaches_nested_elements() {
        let mut root = sample();
        let anchor = root
            .find_mut(&mut |el| el.attr_value("data-id") == Some("2"))
            .unwrap();
        anchor.add_class("selected");
        let anchor = root.find(&mut |el| el.has_class("selected")).unwrap();
        assert_eq!(anchor.tag(), "a");
    }

    #[test]
    fn walk_visits_every_element_pre_order() {
        let root = sample();
        let mut tags = Vec::new();
        root.walk(&mut |el| tags.push(el.tag().to_owned()));
        assert_eq!(tags, ["ul", "li", "a"]);
    }

    #[test]
    fn text_content_flattens_nested_text() {
        let root = sample();
        assert_eq!(root.text_content(), "Drills");
    }
}
