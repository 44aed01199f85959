// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Hierarchy: lineage records and an annotated, arena-backed tree.
//!
//! This crate is the first stage of the lineage visualization pipeline.
//!
//! - [`LineageNode`] is the immutable input record: a name, optional descriptive
//!   fields, an optional color, and ordered children.
//! - [`Hierarchy`] walks a nested record once and produces a pre-order arena in which
//!   every node knows its depth, its parent, and its children in original order.
//!
//! Downstream crates (layout, rendering) address nodes by [`NodeIndex`] and borrow
//! the original records; nothing here mutates or clones the input.
//!
//! ## Preconditions
//!
//! The input must be a rooted tree. A record reachable from two parents cannot be
//! expressed with owned children, so the only way to violate this is through a custom
//! [`Nested`] implementation; such input is not detected and produces an arena that
//! repeats the shared subtree.
//!
//! ## Example
//!
//! ```rust
//! use lineage_hierarchy::{Hierarchy, LineageNode};
//!
//! let root = LineageNode::new("root")
//!     .with_child(LineageNode::new("a").with_child(LineageNode::new("a1")))
//!     .with_child(LineageNode::new("b"));
//!
//! let tree = Hierarchy::new(&root);
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.height(), 2);
//!
//! let names: Vec<_> = tree.iter().map(|n| n.data().name.as_str()).collect();
//! assert_eq!(names, ["root", "a", "a1", "b"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hierarchy;
mod node;

pub use hierarchy::{Hierarchy, HierarchyNode, Link, NodeIndex, PostOrder};
pub use node::{DEFAULT_COLOR, LineageNode, Nested};
