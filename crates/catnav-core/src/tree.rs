//! Flat records to an ordered forest.
//!
//! [`assemble`] is the only entry point: two passes over the input, no
//! I/O, no errors. Malformed input degrades instead of failing — an
//! unresolvable or self-referential parent makes the record a root, and
//! a duplicated id collapses to one node carrying the last record's
//! data at the first record's position.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::record::{CategoryId, CategoryRecord};

/// One node of the assembled hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    id: CategoryId,
    name: String,
    count: u64,
    children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Category id.
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item count (0 when the source reported none).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Child nodes, in input order.
    #[must_use]
    pub fn children(&self) -> &[CategoryNode] {
        &self.children
    }

    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::subtree_len).sum::<usize>()
    }

    fn walk<F: FnMut(&CategoryNode)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}

/// Ordered collection of root nodes.
///
/// Built once per fetch and immutable afterwards; the sidebar discards
/// it and assembles a fresh one on the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Forest {
    roots: Vec<CategoryNode>,
}

impl Forest {
    /// Root nodes, in input order.
    #[must_use]
    pub fn roots(&self) -> &[CategoryNode] {
        &self.roots
    }

    /// Whether the forest holds no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes across all roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.iter().map(CategoryNode::subtree_len).sum()
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk<F: FnMut(&CategoryNode)>(&self, mut f: F) {
        for root in &self.roots {
            root.walk(&mut f);
        }
    }

    /// Find a node by id anywhere in the forest.
    #[must_use]
    pub fn find(&self, id: CategoryId) -> Option<&CategoryNode> {
        fn descend(node: &CategoryNode, id: CategoryId) -> Option<&CategoryNode> {
            if node.id == id {
                return Some(node);
            }
            node.children.iter().find_map(|child| descend(child, id))
        }
        self.roots.iter().find_map(|root| descend(root, id))
    }
}

struct Entry {
    name: String,
    count: u64,
    parent: Option<CategoryId>,
}

/// Build an ordered forest from flat category records.
///
/// Sibling order and root order both follow input order. A parent id
/// that does not resolve to a known record (including a record naming
/// itself) leaves the node at the root level. Records caught in a
/// parent cycle stay reachable: the earliest member of each cycle is
/// promoted to a root at its input position and the cycle link back to
/// it is dropped, so every unique id appears exactly once and traversal
/// terminates.
#[must_use]
pub fn assemble(records: &[CategoryRecord]) -> Forest {
    // Pass 1: id lookup. Insertion keeps the first occurrence's position
    // while a duplicate id replaces the data (last write wins).
    let mut entries: IndexMap<CategoryId, Entry> = IndexMap::new();
    for record in records {
        entries.insert(
            record.id,
            Entry {
                name: record.name.clone(),
                count: record.count,
                parent: record.parent.resolve(),
            },
        );
    }

    // Pass 2: resolve each node into its parent's child list or the root list.
    let mut children_of: HashMap<CategoryId, Vec<CategoryId>> = HashMap::new();
    let mut roots: Vec<CategoryId> = Vec::new();
    for (&id, entry) in &entries {
        match entry.parent {
            Some(parent) if parent != id && entries.contains_key(&parent) => {
                children_of.entry(parent).or_default().push(id);
            }
            _ => roots.push(id),
        }
    }

    fn build(
        id: CategoryId,
        entries: &IndexMap<CategoryId, Entry>,
        children_of: &HashMap<CategoryId, Vec<CategoryId>>,
        placed: &mut HashSet<CategoryId>,
    ) -> CategoryNode {
        placed.insert(id);
        let entry = &entries[&id];
        let mut node = CategoryNode {
            id,
            name: entry.name.clone(),
            count: entry.count,
            children: Vec::new(),
        };
        if let Some(child_ids) = children_of.get(&id) {
            for &child in child_ids {
                if !placed.contains(&child) {
                    node.children.push(build(child, entries, children_of, placed));
                }
            }
        }
        node
    }

    // Anything not reachable from a proper root sits in a cycle island.
    let mut reachable: HashSet<CategoryId> = HashSet::new();
    let mut stack: Vec<CategoryId> = roots.clone();
    while let Some(id) = stack.pop() {
        if reachable.insert(id)
            && let Some(child_ids) = children_of.get(&id)
        {
            stack.extend(child_ids);
        }
    }

    // One pass in input order: proper roots build where they stand, and
    // the earliest member of each cycle island is promoted in place.
    let root_set: HashSet<CategoryId> = roots.iter().copied().collect();
    let mut placed = HashSet::new();
    let mut out = Vec::new();
    for &id in entries.keys() {
        if root_set.contains(&id) || (!reachable.contains(&id) && !placed.contains(&id)) {
            out.push(build(id, &entries, &children_of, &mut placed));
        }
    }

    Forest { roots: out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ParentRef;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn ids(nodes: &[CategoryNode]) -> Vec<CategoryId> {
        nodes.iter().map(CategoryNode::id).collect()
    }

    #[test]
    fn chain_of_three_nests() {
        let records = vec![
            CategoryRecord::new(1, "Tools"),
            CategoryRecord::new(2, "Drills").with_parent(1).with_count(3),
            CategoryRecord::new(3, "Bits").with_parent(2),
        ];
        let forest = assemble(&records);
        assert_eq!(forest.roots().len(), 1);
        let tools = &forest.roots()[0];
        assert_eq!((tools.id(), tools.count()), (1, 0));
        let drills = &tools.children()[0];
        assert_eq!((drills.name(), drills.count()), ("Drills", 3));
        assert_eq!(drills.children()[0].name(), "Bits");
    }

    #[test]
    fn unresolvable_parent_becomes_root() {
        let records = vec![
            CategoryRecord::new(1, "Tools"),
            CategoryRecord::new(2, "Orphan").with_parent(99),
        ];
        let forest = assemble(&records);
        assert_eq!(ids(forest.roots()), vec![1, 2]);
    }

    #[test]
    fn self_parent_becomes_root() {
        let records = vec![CategoryRecord::new(5, "Loop").with_parent(5)];
        let forest = assemble(&records);
        assert_eq!(ids(forest.roots()), vec![5]);
        assert!(forest.roots()[0].children().is_empty());
    }

    #[test]
    fn duplicate_id_collapses_last_write_wins() {
        let records = vec![
            CategoryRecord::new(1, "First").with_count(1),
            CategoryRecord::new(2, "Other"),
            CategoryRecord::new(1, "Second").with_count(9),
        ];
        let forest = assemble(&records);
        // One node for id 1, at its first position, with the later data.
        assert_eq!(ids(forest.roots()), vec![1, 2]);
        assert_eq!(forest.roots()[0].name(), "Second");
        assert_eq!(forest.roots()[0].count(), 9);
    }

    #[test]
    fn mutual_parents_each_appear_once() {
        let records = vec![
            CategoryRecord::new(1, "A").with_parent(2),
            CategoryRecord::new(2, "B").with_parent(1),
        ];
        let forest = assemble(&records);
        assert_eq!(forest.len(), 2);
        // The earliest cycle member is promoted to a root, the other
        // stays nested one level under it.
        assert_eq!(forest.roots().len(), 1);
        assert_eq!(forest.roots()[0].id(), 1);
        assert_eq!(ids(forest.roots()[0].children()), vec![2]);
        assert!(forest.roots()[0].children()[0].children().is_empty());
    }

    #[test]
    fn cycle_island_keeps_input_position() {
        let records = vec![
            CategoryRecord::new(1, "A").with_parent(2),
            CategoryRecord::new(2, "B").with_parent(1),
            CategoryRecord::new(3, "Plain"),
        ];
        let forest = assemble(&records);
        // The promoted cycle member stays ahead of the later plain root.
        assert_eq!(ids(forest.roots()), vec![1, 3]);
        assert_eq!(ids(forest.roots()[0].children()), vec![2]);

        let reordered = vec![
            CategoryRecord::new(3, "Plain"),
            CategoryRecord::new(1, "A").with_parent(2),
            CategoryRecord::new(2, "B").with_parent(1),
        ];
        let forest = assemble(&reordered);
        assert_eq!(ids(forest.roots()), vec![3, 1]);
    }

    #[test]
    fn sibling_order_matches_input_order() {
        let records = vec![
            CategoryRecord::new(10, "Root"),
            CategoryRecord::new(3, "c").with_parent(10),
            CategoryRecord::new(1, "a").with_parent(10),
            CategoryRecord::new(2, "b").with_parent(10),
        ];
        let forest = assemble(&records);
        assert_eq!(ids(forest.roots()[0].children()), vec![3, 1, 2]);
    }

    #[test]
    fn pair_parent_resolves_like_bare_id() {
        let mut child = CategoryRecord::new(2, "Drills");
        child.parent = ParentRef::Pair(1, "Tools".into());
        let records = vec![CategoryRecord::new(1, "Tools"), child];
        let forest = assemble(&records);
        assert_eq!(forest.roots()[0].children()[0].id(), 2);
    }

    #[test]
    fn find_locates_nested_nodes() {
        let records = vec![
            CategoryRecord::new(1, "Tools"),
            CategoryRecord::new(2, "Drills").with_parent(1),
        ];
        let forest = assemble(&records);
        assert_eq!(forest.find(2).map(CategoryNode::name), Some("Drills"));
        assert_eq!(forest.find(42), None);
    }

    fn record_strategy() -> impl Strategy<Value = CategoryRecord> {
        (
            0i64..16,
            "[a-z]{1,8}",
            proptest::option::of(0i64..16),
            0u64..50,
        )
            .prop_map(|(id, name, parent, count)| {
                let mut rec = CategoryRecord::new(id, name).with_count(count);
                if let Some(parent) = parent {
                    rec = rec.with_parent(parent);
                }
                rec
            })
    }

    proptest! {
        #[test]
        fn every_unique_id_appears_exactly_once(
            records in proptest::collection::vec(record_strategy(), 0..32)
        ) {
            let forest = assemble(&records);
            let mut seen = Vec::new();
            forest.walk(|node| seen.push(node.id()));
            let unique: std::collections::HashSet<CategoryId> =
                records.iter().map(|r| r.id).collect();
            prop_assert_eq!(seen.len(), unique.len());
            let seen_set: std::collections::HashSet<CategoryId> =
                seen.iter().copied().collect();
            prop_assert_eq!(seen_set, unique);
        }

        #[test]
        fn all_roots_when_no_parents(
            names in proptest::collection::vec("[a-z]{1,6}", 1..12)
        ) {
            let records: Vec<CategoryRecord> = names
                .iter()
                .enumerate()
                .map(|(i, name)| CategoryRecord::new(i as CategoryId, name.clone()))
                .collect();
            let forest = assemble(&records);
            let root_ids: Vec<CategoryId> = ids(forest.roots());
            let input_ids: Vec<CategoryId> = records.iter().map(|r| r.id).collect();
            prop_assert_eq!(root_ids, input_ids);
        }
    }
}
