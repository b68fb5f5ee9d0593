#![forbid(unsafe_code)]

//! Minimal retained element model for catnav widgets.
//!
//! Widgets build fragments out of [`Element`] values with a builder
//! API, mutate classes in place for highlight changes, and hand the
//! host an HTML string when it wants to inject the fragment into a
//! live page. The model is purely structural: no event binding, no
//! layout, no styling.
//!
//! # Example
//!
//! ```
//! use catnav_dom::Element;
//!
//! let list = Element::new("ul")
//!     .class("category-tree")
//!     .child(Element::new("li").text("Tools"));
//! assert_eq!(list.to_html(), r#"<ul class="category-tree"><li>Tools</li></ul>"#);
//! ```

pub mod element;
pub mod html;

pub use element::{Element, Node};
