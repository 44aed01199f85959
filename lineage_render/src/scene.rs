// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained list of drawn primitives.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;
use lineage_hierarchy::NodeIndex;

use crate::hit::{HitParams, HitScore, PreciseHitTest};
use crate::primitives::{Label, LinkPath, Marker, MarkerFlags, MarkerId};
use crate::surface::Surface;

/// What the reconciler drew last, in draw order.
///
/// The scene exists to answer hit tests and to be replaced wholesale on the next
/// reconcile; it is never patched incrementally except for marker flags.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    links: Vec<LinkPath>,
    markers: Vec<Marker>,
    labels: Vec<Label>,
    /// Hit target for every live marker.
    targets: HashMap<MarkerId, NodeIndex>,
    generation: u32,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every primitive and invalidate all outstanding [`MarkerId`]s.
    pub fn clear(&mut self) {
        self.links.clear();
        self.markers.clear();
        self.labels.clear();
        self.targets.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Append a link.
    pub fn push_link(&mut self, link: LinkPath) {
        self.links.push(link);
    }

    /// Append a marker for `node`; it is drawn above every earlier marker.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "MarkerId uses 32-bit slots, matching NodeIndex."
    )]
    pub fn push_marker(
        &mut self,
        node: NodeIndex,
        center: Point,
        fill: impl Into<alloc::string::String>,
    ) -> MarkerId {
        let id = MarkerId::new(self.markers.len() as u32, self.generation);
        self.markers.push(Marker {
            id,
            node,
            center,
            fill: fill.into(),
            flags: MarkerFlags::default(),
        });
        self.targets.insert(id, node);
        id
    }

    /// Append a label.
    pub fn push_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Links in draw order.
    pub fn links(&self) -> &[LinkPath] {
        &self.links
    }

    /// Markers in draw order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Labels in draw order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns `true` if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.markers.is_empty() && self.labels.is_empty()
    }

    /// Look up a live marker.
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.live(id).map(|slot| &self.markers[slot])
    }

    /// Look up a live marker mutably.
    pub fn marker_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.live(id).map(|slot| &mut self.markers[slot])
    }

    /// The node a live marker stands for.
    pub fn target(&self, id: MarkerId) -> Option<NodeIndex> {
        self.targets.get(&id).copied()
    }

    /// The marker drawn for `node`, if any.
    pub fn marker_for(&self, node: NodeIndex) -> Option<MarkerId> {
        self.markers.iter().find(|m| m.node == node).map(|m| m.id)
    }

    fn live(&self, id: MarkerId) -> Option<usize> {
        (id.generation() == self.generation && id.slot() < self.markers.len())
            .then_some(id.slot())
    }

    /// Find the marker under a layout-space point.
    ///
    /// Only [`MarkerFlags::PICKABLE`] markers take part. The closest hit wins; among
    /// equally close hits (for example two overlapping interiors), the topmost marker
    /// (drawn last) wins.
    pub fn hit_test(&self, point: Point, params: &HitParams) -> Option<MarkerId> {
        let mut best: Option<(MarkerId, HitScore)> = None;
        for marker in self.markers.iter().rev() {
            if !marker.flags.contains(MarkerFlags::PICKABLE) {
                continue;
            }
            let Some(score) = marker.circle().hit_test_local(point, params) else {
                continue;
            };
            if best.is_none_or(|(_, b)| score.cmp_distance(&b).is_lt()) {
                best = Some((marker.id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Draw everything onto `surface`, in order: links, then each marker followed by
    /// its labels.
    pub fn replay(&self, surface: &mut impl Surface) {
        for link in &self.links {
            surface.draw_link(link);
        }
        let mut labels = self.labels.iter().peekable();
        for marker in &self.markers {
            surface.draw_marker(marker);
            while let Some(label) = labels.next_if(|l| l.marker == marker.id) {
                surface.draw_label(label);
            }
        }
        for label in labels {
            surface.draw_label(label);
        }
    }
}
