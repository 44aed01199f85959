// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Layout: a tidy-tree layout engine for annotated hierarchies.
//!
//! Given a [`Hierarchy`](lineage_hierarchy::Hierarchy) and a layout box, [`TreeLayout`]
//! assigns every node a 2D position:
//!
//! - The **primary** axis follows depth. Every node at a given depth shares the same
//!   primary coordinate, spaced evenly so the root sits at 0 and the deepest level at
//!   the full primary extent.
//! - The **secondary** axis orders siblings. Leaves keep their depth-first order, each
//!   parent is centered between its first and last child, and adjacent nodes at the
//!   same depth keep at least one [`Separation`] apart, with a wider gap between nodes
//!   that do not share a parent.
//!
//! Positions are [`kurbo::Point`]s with `x` on the primary axis and `y` on the
//! secondary axis, which is directly drawable as a left-to-right tree.
//!
//! ## Algorithm
//!
//! The engine runs the linear-time Buchheim–Jünger–Leipert refinement of Walker's
//! algorithm in abstract separation units, then normalizes the result into the box:
//! the extreme nodes are inset by half their separation, and the scale factor between
//! separation units and layout space is reported as [`Layout::unit`].
//!
//! The layout is a pure function of tree shape and box size. It never fails: a
//! single node is centered on the secondary axis, and empty or degenerate boxes
//! collapse positions onto the affected axis instead of producing NaN.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use lineage_hierarchy::{Hierarchy, LineageNode, NodeIndex};
//! use lineage_layout::TreeLayout;
//!
//! let root = LineageNode::new("root")
//!     .with_child(LineageNode::new("a").with_child(LineageNode::new("a1")))
//!     .with_child(LineageNode::new("b").with_child(LineageNode::new("b1")));
//!
//! let layout = TreeLayout::new(Size::new(400.0, 300.0)).layout(Hierarchy::new(&root));
//! assert_eq!(layout.position(NodeIndex::ROOT).x, 0.0);
//! assert_eq!(layout.position(NodeIndex::ROOT).y, 150.0);
//! assert!(layout.nodes().filter(|n| n.depth() == 2).all(|n| n.primary() == 400.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod separation;
mod tidy;

pub use layout::{Layout, LayoutLink, LayoutNode, TreeLayout};
pub use separation::Separation;
