#![forbid(unsafe_code)]

//! Data model and pure tree assembly for the catnav category sidebar.
//!
//! This crate turns the flat category payload an ERP backend produces
//! into an ordered forest of nodes, and defines the contracts the
//! stateful sidebar layer builds on: the data-source trait, the
//! selection event, and the hierarchical list filter.
//!
//! Nothing here touches I/O or UI; assembly is a pure function and is
//! deliberately lenient about malformed input (unresolvable parents
//! become roots, duplicate ids collapse last-write-wins).
//!
//! # Example
//!
//! ```
//! use catnav_core::{CategoryRecord, assemble};
//!
//! let records = vec![
//!     CategoryRecord::new(1, "Tools"),
//!     CategoryRecord::new(2, "Drills").with_parent(1).with_count(3),
//! ];
//! let forest = assemble(&records);
//! assert_eq!(forest.roots().len(), 1);
//! assert_eq!(forest.roots()[0].children()[0].name(), "Drills");
//! ```

pub mod event;
pub mod record;
pub mod source;
pub mod tree;

pub use event::{CategoryFilter, SelectionChanged};
pub use record::{CategoryId, CategoryRecord, ParentRef};
pub use source::{CategorySource, FetchError, parse_category_payload};
pub use tree::{CategoryNode, Forest, assemble};
