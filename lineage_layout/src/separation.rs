// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lineage_hierarchy::{Hierarchy, NodeIndex};

/// Minimum secondary-axis distance between neighbouring nodes, in layout units.
///
/// Only nodes on the same depth are ever compared while laying out, so the rule
/// distinguishes just two cases: siblings and everything else.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Separation {
    /// Gap between nodes sharing a parent.
    pub sibling: f64,
    /// Gap between nodes with different parents.
    pub cousin: f64,
}

impl Default for Separation {
    fn default() -> Self {
        Self {
            sibling: 1.5,
            cousin: 2.5,
        }
    }
}

impl Separation {
    /// Create a separation rule.
    pub const fn new(sibling: f64, cousin: f64) -> Self {
        Self { sibling, cousin }
    }

    /// The gap required between `a` and `b`.
    pub fn between<T>(&self, tree: &Hierarchy<'_, T>, a: NodeIndex, b: NodeIndex) -> f64 {
        if tree.parent_of(a) == tree.parent_of(b) {
            self.sibling
        } else {
            self.cousin
        }
    }
}
