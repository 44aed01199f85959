// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena construction and traversal.

use alloc::{vec, vec::Vec};
use smallvec::SmallVec;

use crate::node::{LineageNode, Nested};

/// Position of a node in a [`Hierarchy`] arena.
///
/// Indices are assigned in pre-order, so the root is always [`NodeIndex::ROOT`] and
/// a parent's index is lower than any of its descendants'. An index is only
/// meaningful for the hierarchy (or layout) that produced it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeIndex(pub(crate) u32);

impl NodeIndex {
    /// Index of the root node.
    pub const ROOT: Self = Self(0);

    /// Construct from an arena slot.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeIndex uses 32-bit indices by design."
    )]
    pub const fn new(slot: usize) -> Self {
        Self(slot as u32)
    }

    /// The arena slot.
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

/// A parent→child edge, identified by its endpoints.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Link {
    /// The parent end.
    pub source: NodeIndex,
    /// The child end.
    pub target: NodeIndex,
}

/// One annotated node in a [`Hierarchy`].
#[derive(Clone, Debug)]
pub struct HierarchyNode<'a, T = LineageNode> {
    data: &'a T,
    index: NodeIndex,
    depth: u32,
    parent: Option<NodeIndex>,
    children: SmallVec<[NodeIndex; 4]>,
}

impl<'a, T> HierarchyNode<'a, T> {
    /// The source record.
    pub fn data(&self) -> &'a T {
        self.data
    }

    /// This node's index in the arena.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Distance from the root; the root has depth 0.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Children in source order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A nested record flattened into a pre-order arena with depth and parent links.
///
/// The hierarchy borrows the source tree for its whole lifetime and never mutates it.
/// Building is a single iterative walk, so arbitrarily deep input cannot overflow
/// the stack.
///
/// ```rust
/// use lineage_hierarchy::{Hierarchy, LineageNode, NodeIndex};
///
/// let root = LineageNode::new("root").with_child(LineageNode::new("leaf"));
/// let tree = Hierarchy::new(&root);
///
/// let leaf = tree.get(NodeIndex::new(1));
/// assert_eq!(leaf.depth(), 1);
/// assert_eq!(leaf.parent(), Some(NodeIndex::ROOT));
/// assert!(core::ptr::eq(leaf.data(), &root.children[0]));
/// ```
#[derive(Clone, Debug)]
pub struct Hierarchy<'a, T = LineageNode> {
    nodes: Vec<HierarchyNode<'a, T>>,
    height: u32,
}

impl<'a, T: Nested> Hierarchy<'a, T> {
    /// Annotate `root` and every descendant.
    ///
    /// The input must be a tree: no record may be reachable from two parents.
    pub fn new(root: &'a T) -> Self {
        let mut nodes: Vec<HierarchyNode<'a, T>> = Vec::new();
        let mut height = 0;
        let mut stack: Vec<(&'a T, Option<NodeIndex>, u32)> = vec![(root, None, 0)];

        while let Some((data, parent, depth)) = stack.pop() {
            let index = NodeIndex::new(nodes.len());
            nodes.push(HierarchyNode {
                data,
                index,
                depth,
                parent,
                children: SmallVec::new(),
            });
            if let Some(p) = parent {
                nodes[p.get()].children.push(index);
            }
            height = height.max(depth);

            // Reverse so the first child is popped (and numbered) first.
            for child in data.children().iter().rev() {
                stack.push((child, Some(index), depth + 1));
            }
        }

        Self { nodes, height }
    }
}

impl<'a, T> Hierarchy<'a, T> {
    /// The root node.
    pub fn root(&self) -> &HierarchyNode<'a, T> {
        &self.nodes[0]
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a hierarchy contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest node.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Access a node; panics if `index` is out of range for this hierarchy.
    pub fn get(&self, index: NodeIndex) -> &HierarchyNode<'a, T> {
        self.nodes
            .get(index.get())
            .expect("NodeIndex from another hierarchy")
    }

    /// The parent of `index`, or `None` for the root.
    pub fn parent_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get(index).parent
    }

    /// The children of `index` in source order.
    pub fn children_of(&self, index: NodeIndex) -> &[NodeIndex] {
        &self.get(index).children
    }

    /// The depth of `index`.
    pub fn depth_of(&self, index: NodeIndex) -> u32 {
        self.get(index).depth
    }

    /// Nodes in pre-order (parent before children, children in source order).
    pub fn iter(&self) -> impl Iterator<Item = &HierarchyNode<'a, T>> + '_ {
        self.nodes.iter()
    }

    /// Node indices in post-order (children in source order, then parent).
    pub fn post_order(&self) -> PostOrder<'_, 'a, T> {
        PostOrder {
            tree: self,
            stack: vec![(NodeIndex::ROOT, 0)],
        }
    }

    /// Leaves in depth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = &HierarchyNode<'a, T>> + '_ {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    /// Every parent→child edge in pre-order of the child.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.nodes.iter().filter_map(|n| {
            n.parent.map(|source| Link {
                source,
                target: n.index,
            })
        })
    }

    /// Ancestors of `index`, nearest first, ending at the root. Excludes `index` itself.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut current = self.get(index).parent;
        core::iter::from_fn(move || {
            let id = current?;
            current = self.nodes[id.get()].parent;
            Some(id)
        })
    }

    /// The first node in pre-order whose record satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .find(|n| predicate(n.data))
            .map(|n| n.index)
    }
}

/// Post-order traversal over a [`Hierarchy`], returned by [`Hierarchy::post_order`].
#[derive(Debug)]
pub struct PostOrder<'h, 'a, T> {
    tree: &'h Hierarchy<'a, T>,
    /// Pending nodes with the position of the next child to descend into.
    stack: Vec<(NodeIndex, usize)>,
}

impl<T> Iterator for PostOrder<'_, '_, T> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        loop {
            let (id, next_child) = self.stack.last_mut()?;
            let children = &self.tree.nodes[id.get()].children;
            if let Some(&child) = children.get(*next_child) {
                *next_child += 1;
                self.stack.push((child, 0));
            } else {
                let id = *id;
                self.stack.pop();
                return Some(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sample() -> LineageNode {
        LineageNode::new("root")
            .with_child(
                LineageNode::new("a")
                    .with_child(LineageNode::new("a1"))
                    .with_child(LineageNode::new("a2")),
            )
            .with_child(LineageNode::new("b"))
            .with_child(LineageNode::new("c").with_child(LineageNode::new("c1")))
    }

    fn names<'a>(tree: &Hierarchy<'a>, ids: impl Iterator<Item = NodeIndex>) -> Vec<&'a str> {
        ids.map(|id| tree.get(id).data().name.as_str()).collect()
    }

    #[test]
    fn pre_order_indices_and_depths() {
        let root = sample();
        let tree = Hierarchy::new(&root);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 2);
        assert_eq!(
            names(&tree, tree.iter().map(HierarchyNode::index)),
            ["root", "a", "a1", "a2", "b", "c", "c1"]
        );
        let depths: Vec<_> = tree.iter().map(HierarchyNode::depth).collect();
        assert_eq!(depths, [0, 1, 2, 2, 1, 1, 2]);
    }

    #[test]
    fn children_keep_source_order_and_parents_link_back() {
        let root = sample();
        let tree = Hierarchy::new(&root);
        assert_eq!(
            names(&tree, tree.children_of(NodeIndex::ROOT).iter().copied()),
            ["a", "b", "c"]
        );
        for node in tree.iter() {
            for &child in node.children() {
                assert_eq!(tree.parent_of(child), Some(node.index()));
                assert_eq!(tree.depth_of(child), node.depth() + 1);
            }
        }
        assert_eq!(tree.root().parent(), None);
    }

    #[test]
    fn post_order_visits_children_before_parent() {
        let root = sample();
        let tree = Hierarchy::new(&root);
        assert_eq!(
            names(&tree, tree.post_order()),
            ["a1", "a2", "a", "b", "c1", "c", "root"]
        );
    }

    #[test]
    fn leaves_follow_depth_first_order() {
        let root = sample();
        let tree = Hierarchy::new(&root);
        let leaves: Vec<_> = tree.leaves().map(|n| n.data().name.as_str()).collect();
        assert_eq!(leaves, ["a1", "a2", "b", "c1"]);
    }

    #[test]
    fn links_and_ancestors() {
        let root = sample();
        let tree = Hierarchy::new(&root);
        assert_eq!(tree.links().count(), tree.len() - 1);

        let c1 = tree.find(|n| n.name == "c1").unwrap();
        assert_eq!(names(&tree, tree.ancestors(c1)), ["c", "root"]);
        assert_eq!(tree.ancestors(NodeIndex::ROOT).count(), 0);
        assert!(tree.find(|n| n.name == "missing").is_none());
    }

    #[test]
    fn single_node_hierarchy() {
        let root = LineageNode::new("alone");
        let tree = Hierarchy::new(&root);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.post_order().collect::<Vec<_>>(), [NodeIndex::ROOT]);
        assert!(core::ptr::eq(tree.root().data(), &root));
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let mut node = LineageNode::new("leaf");
        for i in 0..2_000 {
            node = LineageNode::new(alloc::format!("n{i}")).with_child(node);
        }
        let tree = Hierarchy::new(&node);
        assert_eq!(tree.len(), 2_001);
        assert_eq!(tree.height(), 2_000);
        assert_eq!(tree.post_order().count(), 2_001);
    }
}
