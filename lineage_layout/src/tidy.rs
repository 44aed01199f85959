// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buchheim–Jünger–Leipert tidy tree placement in separation units.
//!
//! This produces the unnormalized secondary coordinate of every node, with the root
//! at 0. The caller maps the result into the layout box.

use alloc::vec::Vec;

use lineage_hierarchy::{Hierarchy, NodeIndex};

use crate::separation::Separation;

/// Per-node scratch state for the two walks.
#[derive(Clone, Debug)]
struct Work {
    /// Preliminary coordinate.
    prelim: f64,
    /// Modifier applied to the whole subtree during the second walk.
    modifier: f64,
    /// Pending shift of this subtree (moved by `move_subtree`).
    shift: f64,
    /// Pending change of shift rate for intermediate siblings.
    change: f64,
    /// Contour thread for nodes whose subtree ends above a neighbour's.
    thread: Option<NodeIndex>,
    /// Ancestor pointer used to find the subtree to move on conflict.
    ancestor: NodeIndex,
    /// Default ancestor for this node's children while they are apportioned.
    default_ancestor: Option<NodeIndex>,
    /// Position among siblings.
    number: usize,
}

struct Placer<'t, 'a, T> {
    tree: &'t Hierarchy<'a, T>,
    separation: Separation,
    work: Vec<Work>,
}

/// Run both walks and return each node's coordinate, indexed by [`NodeIndex`].
pub(crate) fn place<T>(tree: &Hierarchy<'_, T>, separation: Separation) -> Vec<f64> {
    let mut work: Vec<Work> = tree
        .iter()
        .map(|n| Work {
            prelim: 0.0,
            modifier: 0.0,
            shift: 0.0,
            change: 0.0,
            thread: None,
            ancestor: n.index(),
            default_ancestor: None,
            number: 0,
        })
        .collect();
    for node in tree.iter() {
        for (number, child) in node.children().iter().enumerate() {
            work[child.get()].number = number;
        }
    }

    let mut placer = Placer {
        tree,
        separation,
        work,
    };
    for v in tree.post_order() {
        placer.first_walk(v);
    }
    placer.second_walk()
}

impl<T> Placer<'_, '_, T> {
    fn w(&self, v: NodeIndex) -> &Work {
        &self.work[v.get()]
    }

    fn w_mut(&mut self, v: NodeIndex) -> &mut Work {
        &mut self.work[v.get()]
    }

    fn separation(&self, a: NodeIndex, b: NodeIndex) -> f64 {
        self.separation.between(self.tree, a, b)
    }

    fn left_sibling(&self, v: NodeIndex) -> Option<NodeIndex> {
        let parent = self.tree.parent_of(v)?;
        let number = self.w(v).number;
        (number > 0).then(|| self.tree.children_of(parent)[number - 1])
    }

    fn next_left(&self, v: NodeIndex) -> Option<NodeIndex> {
        self.tree
            .children_of(v)
            .first()
            .copied()
            .or(self.w(v).thread)
    }

    fn next_right(&self, v: NodeIndex) -> Option<NodeIndex> {
        self.tree
            .children_of(v)
            .last()
            .copied()
            .or(self.w(v).thread)
    }

    /// Bottom-up pass: place `v` relative to its left sibling and merge contours.
    ///
    /// Children of `v` have already been visited.
    fn first_walk(&mut self, v: NodeIndex) {
        let left = self.left_sibling(v);
        let children = self.tree.children_of(v);

        if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
            self.execute_shifts(v);
            let midpoint = (self.w(first).prelim + self.w(last).prelim) / 2.0;
            if let Some(w) = left {
                let prelim = self.w(w).prelim + self.separation(v, w);
                let work = self.w_mut(v);
                work.prelim = prelim;
                work.modifier = prelim - midpoint;
            } else {
                self.w_mut(v).prelim = midpoint;
            }
        } else if let Some(w) = left {
            self.w_mut(v).prelim = self.w(w).prelim + self.separation(v, w);
        }

        if let Some(parent) = self.tree.parent_of(v) {
            let eldest = self.tree.children_of(parent)[0];
            let ancestor = self.w(parent).default_ancestor.unwrap_or(eldest);
            let ancestor = self.apportion(v, left, ancestor);
            self.w_mut(parent).default_ancestor = Some(ancestor);
        }
    }

    /// Push `v`'s subtree right until it clears every subtree to its left.
    ///
    /// Walks the inner and outer contours of both sides level by level; returns the
    /// updated default ancestor.
    fn apportion(
        &mut self,
        v: NodeIndex,
        left: Option<NodeIndex>,
        mut ancestor: NodeIndex,
    ) -> NodeIndex {
        let Some(w) = left else {
            return ancestor;
        };
        let parent = self
            .tree
            .parent_of(v)
            .expect("a node with a left sibling has a parent");

        // i/o: inner/outer contour; p/m: right (plus) side is `v`, left (minus) side is `w`.
        let mut vip = v;
        let mut vop = v;
        let mut vim = w;
        let mut vom = self.tree.children_of(parent)[0];
        let mut sip = self.w(vip).modifier;
        let mut sop = self.w(vop).modifier;
        let mut sim = self.w(vim).modifier;
        let mut som = self.w(vom).modifier;

        let mut next_im = self.next_right(vim);
        let mut next_ip = self.next_left(vip);
        while let (Some(im), Some(ip)) = (next_im, next_ip) {
            vim = im;
            vip = ip;
            vom = self
                .next_left(vom)
                .expect("outer contour reaches every inner contour level");
            vop = self
                .next_right(vop)
                .expect("outer contour reaches every inner contour level");
            self.w_mut(vop).ancestor = v;

            let shift = self.w(vim).prelim + sim - self.w(vip).prelim - sip
                + self.separation(vim, vip);
            if shift > 0.0 {
                let wm = self.next_ancestor(vim, v, ancestor);
                self.move_subtree(wm, v, shift);
                sip += shift;
                sop += shift;
            }

            sim += self.w(vim).modifier;
            sip += self.w(vip).modifier;
            som += self.w(vom).modifier;
            sop += self.w(vop).modifier;

            next_im = self.next_right(vim);
            next_ip = self.next_left(vip);
        }

        if let Some(im) = next_im
            && self.next_right(vop).is_none()
        {
            let work = self.w_mut(vop);
            work.thread = Some(im);
            work.modifier += sim - sop;
        }
        if let Some(ip) = next_ip
            && self.next_left(vom).is_none()
        {
            let work = self.w_mut(vom);
            work.thread = Some(ip);
            work.modifier += sip - som;
            ancestor = v;
        }

        ancestor
    }

    fn next_ancestor(&self, vim: NodeIndex, v: NodeIndex, ancestor: NodeIndex) -> NodeIndex {
        let candidate = self.w(vim).ancestor;
        if self.tree.parent_of(candidate) == self.tree.parent_of(v) {
            candidate
        } else {
            ancestor
        }
    }

    fn move_subtree(&mut self, wm: NodeIndex, wp: NodeIndex, shift: f64) {
        let subtrees = self.w(wp).number - self.w(wm).number;
        #[allow(
            clippy::cast_precision_loss,
            reason = "Sibling counts are far below 2^52."
        )]
        let change = shift / subtrees as f64;
        {
            let p = self.w_mut(wp);
            p.change -= change;
            p.shift += shift;
            p.prelim += shift;
            p.modifier += shift;
        }
        self.w_mut(wm).change += change;
    }

    /// Spread the shifts recorded by `move_subtree` over `v`'s children.
    fn execute_shifts(&mut self, v: NodeIndex) {
        let mut shift = 0.0;
        let mut change = 0.0;
        for &child in self.tree.children_of(v).iter().rev() {
            let work = &mut self.work[child.get()];
            work.prelim += shift;
            work.modifier += shift;
            change += work.change;
            shift += work.shift + change;
        }
    }

    /// Top-down pass: accumulate modifiers into final coordinates.
    fn second_walk(mut self) -> Vec<f64> {
        let mut x = Vec::with_capacity(self.work.len());
        // Pre-order arena: a parent's modifier is final before its children are reached.
        for node in self.tree.iter() {
            let v = node.index();
            let inherited = match node.parent() {
                Some(p) => self.w(p).modifier,
                // Anchor the root at 0.
                None => -self.w(v).prelim,
            };
            let work = self.w_mut(v);
            x.push(work.prelim + inherited);
            work.modifier += inherited;
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_hierarchy::LineageNode;

    fn leaves(n: usize) -> impl Iterator<Item = LineageNode> {
        (0..n).map(|i| LineageNode::new(alloc::format!("leaf{i}")))
    }

    #[test]
    fn siblings_are_spaced_by_sibling_gap() {
        let root = LineageNode::new("root").with_children(leaves(3));
        let tree = Hierarchy::new(&root);
        let x = place(&tree, Separation::default());
        assert_eq!(x, [0.0, -1.5, 0.0, 1.5]);
    }

    #[test]
    fn cousins_are_pushed_apart() {
        // Worked example: root → (a → a1), (b → b1).
        let root = LineageNode::new("root")
            .with_child(LineageNode::new("a").with_child(LineageNode::new("a1")))
            .with_child(LineageNode::new("b").with_child(LineageNode::new("b1")));
        let tree = Hierarchy::new(&root);
        let x = place(&tree, Separation::default());
        // Pre-order: root, a, a1, b, b1.
        assert_eq!(x, [0.0, -1.25, -1.25, 1.25, 1.25]);
    }

    #[test]
    fn intermediate_subtrees_are_spread() {
        // A deep first and last child with two leaves in between: the leaves end up
        // evenly spread once the outer subtrees are pushed apart.
        let wide = |name: &str| {
            LineageNode::new(name).with_child(
                LineageNode::new(alloc::format!("{name}-mid")).with_children(leaves(4)),
            )
        };
        let root = LineageNode::new("root")
            .with_child(wide("left"))
            .with_child(LineageNode::new("m1"))
            .with_child(LineageNode::new("m2"))
            .with_child(wide("right"));
        let tree = Hierarchy::new(&root);
        let x = place(&tree, Separation::default());

        let at = |name: &str| x[tree.find(|n| n.name == name).unwrap().get()];
        let (l, m1, m2, r) = (at("left"), at("m1"), at("m2"), at("right"));
        assert!(l < m1 && m1 < m2 && m2 < r, "sibling order is preserved");
        let step = (r - l) / 3.0;
        assert!((m1 - l - step).abs() < 1e-9, "m1 evenly spread");
        assert!((m2 - m1 - step).abs() < 1e-9, "m2 evenly spread");
    }
}
