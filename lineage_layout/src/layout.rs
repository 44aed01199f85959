// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration, normalization, and the positioned result.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use lineage_hierarchy::{Hierarchy, HierarchyNode, LineageNode, NodeIndex};

use crate::separation::Separation;
use crate::tidy;

/// Tidy-tree layout parameters.
///
/// `size.width` is the primary (depth) extent and `size.height` the secondary
/// (sibling) extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TreeLayout {
    size: Size,
    separation: Separation,
}

/// Box extents that cannot hold a drawing collapse to zero.
fn usable_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

impl TreeLayout {
    /// Lay out into `size` with the default [`Separation`].
    ///
    /// Negative or non-finite dimensions are treated as zero.
    pub fn new(size: Size) -> Self {
        Self {
            size: Size::new(usable_extent(size.width), usable_extent(size.height)),
            separation: Separation::default(),
        }
    }

    /// Replace the separation rule.
    #[must_use]
    pub fn with_separation(mut self, separation: Separation) -> Self {
        self.separation = separation;
        self
    }

    /// The layout box.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The separation rule.
    pub fn separation(&self) -> Separation {
        self.separation
    }

    /// Position every node of `tree`.
    pub fn layout<'a, T>(&self, tree: Hierarchy<'a, T>) -> Layout<'a, T> {
        let raw = tidy::place(&tree, self.separation);

        // Extreme nodes; ties keep the first in pre-order.
        let mut left = NodeIndex::ROOT;
        let mut right = NodeIndex::ROOT;
        for node in tree.iter() {
            let i = node.index();
            if raw[i.get()] < raw[left.get()] {
                left = i;
            }
            if raw[i.get()] > raw[right.get()] {
                right = i;
            }
        }

        let inset = if left == right {
            1.0
        } else {
            self.separation.between(&tree, left, right) / 2.0
        };
        let tx = inset - raw[left.get()];
        // The denominator is the full extent plus one separation, always positive.
        let unit = self.size.height / (raw[right.get()] + inset + tx);
        let depth_step = self.size.width / f64::from(tree.height().max(1));

        let positions: Vec<Point> = tree
            .iter()
            .map(|n| {
                Point::new(
                    f64::from(n.depth()) * depth_step,
                    (raw[n.index().get()] + tx) * unit,
                )
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = positions.len(),
            height = tree.height(),
            unit,
            "tree laid out"
        );

        Layout {
            tree,
            positions,
            unit,
            size: self.size,
        }
    }
}

/// A hierarchy with a position for every node.
#[derive(Clone, Debug)]
pub struct Layout<'a, T = LineageNode> {
    tree: Hierarchy<'a, T>,
    positions: Vec<Point>,
    unit: f64,
    size: Size,
}

impl<'a, T> Layout<'a, T> {
    /// The annotated tree this layout positions.
    pub fn hierarchy(&self) -> &Hierarchy<'a, T> {
        &self.tree
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`: every layout contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of `index` as (primary, secondary).
    pub fn position(&self, index: NodeIndex) -> Point {
        *self
            .positions
            .get(index.get())
            .expect("NodeIndex from another layout")
    }

    /// The node at `index` with its position.
    pub fn node(&self, index: NodeIndex) -> LayoutNode<'_, 'a, T> {
        LayoutNode {
            node: self.tree.get(index),
            position: self.position(index),
        }
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> impl Iterator<Item = LayoutNode<'_, 'a, T>> + '_ {
        self.tree
            .iter()
            .zip(self.positions.iter().copied())
            .map(|(node, position)| LayoutNode { node, position })
    }

    /// Every parent→child edge with its endpoints.
    pub fn links(&self) -> impl Iterator<Item = LayoutLink> + '_ {
        self.tree.links().map(|link| LayoutLink {
            source: link.source,
            target: link.target,
            from: self.position(link.source),
            to: self.position(link.target),
        })
    }

    /// Layout-space length of one separation unit on the secondary axis.
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// The layout box this layout was computed for.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Tight bounds of all node positions.
    pub fn bounds(&self) -> Rect {
        let first = self.positions[0];
        self.positions
            .iter()
            .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p))
    }
}

/// A positioned edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutLink {
    /// The parent.
    pub source: NodeIndex,
    /// The child.
    pub target: NodeIndex,
    /// Parent position.
    pub from: Point,
    /// Child position.
    pub to: Point,
}

/// Borrowed view of one positioned node.
#[derive(Debug)]
pub struct LayoutNode<'l, 'a, T = LineageNode> {
    node: &'l HierarchyNode<'a, T>,
    position: Point,
}

impl<T> Clone for LayoutNode<'_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LayoutNode<'_, '_, T> {}

impl<'a, T> LayoutNode<'_, 'a, T> {
    /// The source record.
    pub fn data(&self) -> &'a T {
        self.node.data()
    }

    /// Arena index.
    pub fn index(&self) -> NodeIndex {
        self.node.index()
    }

    /// Distance from the root.
    pub fn depth(&self) -> u32 {
        self.node.depth()
    }

    /// The parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.node.parent()
    }

    /// Children in source order.
    pub fn children(&self) -> &[NodeIndex] {
        self.node.children()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Position as (primary, secondary).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Coordinate along the depth axis.
    pub fn primary(&self) -> f64 {
        self.position.x
    }

    /// Coordinate along the sibling axis.
    pub fn secondary(&self) -> f64 {
        self.position.y
    }
}
