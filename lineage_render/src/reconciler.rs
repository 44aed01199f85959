// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;

use kurbo::Size;
use lineage_hierarchy::{Hierarchy, LineageNode};
use lineage_layout::{Layout, TreeLayout};
use lineage_view2d::Margin;

use crate::primitives::{Label, LabelKind, LinkPath, MarkerFlags, MarkerId};
use crate::scene::Scene;
use crate::surface::Surface;

/// Rebuilds the drawing from scratch for a given root and viewport.
///
/// A reconcile lays the tree out inside the viewport minus the margin, clears the
/// surface, then draws every link followed by every marker with its labels. It
/// keeps the layout and the retained [`Scene`] so later pointer events can be
/// resolved without laying out again.
#[derive(Debug)]
pub struct Reconciler<'a> {
    margin: Margin,
    layout: Option<Layout<'a>>,
    scene: Scene,
    hovered: Option<MarkerId>,
    passes: usize,
}

impl Default for Reconciler<'_> {
    fn default() -> Self {
        Self::new(Margin::default())
    }
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler that reserves `margin` around the tree.
    pub fn new(margin: Margin) -> Self {
        Self {
            margin,
            layout: None,
            scene: Scene::new(),
            hovered: None,
            passes: 0,
        }
    }

    /// The reserved margin.
    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// Lay out `root` for `viewport` and redraw everything onto `surface`.
    pub fn reconcile(
        &mut self,
        root: &'a LineageNode,
        viewport: Size,
        surface: &mut impl Surface,
    ) -> &Layout<'a> {
        let layout = TreeLayout::new(self.margin.inset(viewport)).layout(Hierarchy::new(root));

        surface.clear();
        self.scene.clear();
        self.hovered = None;

        for link in layout.links() {
            self.scene.push_link(LinkPath::horizontal(
                link.source,
                link.target,
                link.from,
                link.to,
            ));
        }
        for node in layout.nodes() {
            let data = node.data();
            let center = node.position();
            let id = self
                .scene
                .push_marker(node.index(), center, data.color_or_default());
            self.scene.push_label(Label::beside(
                id,
                LabelKind::Name,
                data.name.clone(),
                center,
                node.is_leaf(),
            ));
            if let Some(translation) = data.translation.as_deref().filter(|t| !t.is_empty()) {
                self.scene.push_label(Label::beside(
                    id,
                    LabelKind::Translation,
                    translation.to_string(),
                    center,
                    node.is_leaf(),
                ));
            }
        }
        self.scene.replay(surface);
        self.passes += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            pass = self.passes,
            nodes = layout.len(),
            width = viewport.width,
            height = viewport.height,
            "reconciled"
        );

        self.layout.insert(layout)
    }

    /// The layout from the last reconcile.
    pub fn layout(&self) -> Option<&Layout<'a>> {
        self.layout.as_ref()
    }

    /// The primitives from the last reconcile.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of completed reconciles.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// The source record behind a live marker.
    pub fn node_for(&self, id: MarkerId) -> Option<&'a LineageNode> {
        let index = self.scene.target(id)?;
        Some(self.layout.as_ref()?.hierarchy().get(index).data())
    }

    /// The hovered marker, if any.
    pub fn hovered(&self) -> Option<MarkerId> {
        self.hovered
    }

    /// Move hover to `target`, restyling the previous and new markers.
    ///
    /// Returns `true` if hover changed.
    pub fn set_hover(&mut self, target: Option<MarkerId>, surface: &mut impl Surface) -> bool {
        if self.hovered == target {
            return false;
        }
        if let Some(old) = self.hovered.take()
            && let Some(marker) = self.scene.marker_mut(old)
        {
            marker.flags.remove(MarkerFlags::HOVERED);
            surface.restyle_marker(old, &marker.style());
        }
        if let Some(new) = target
            && let Some(marker) = self.scene.marker_mut(new)
        {
            marker.flags.insert(MarkerFlags::HOVERED);
            surface.restyle_marker(new, &marker.style());
            self.hovered = Some(new);
        }
        true
    }
}
