// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use lineage_hierarchy::LineageNode;
use lineage_layout::Layout;
use lineage_view2d::{Margin, ViewController, ViewTransform, WheelDeltaMode};

use crate::hit::HitParams;
use crate::primitives::MarkerId;
use crate::reconciler::Reconciler;
use crate::scene::Scene;
use crate::style;
use crate::surface::Surface;

bitflags::bitflags! {
    /// What changed since the last reconcile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Dirty: u8 {
        /// A different root was supplied.
        const DATA     = 0b0000_0001;
        /// The viewport was resized.
        const VIEWPORT = 0b0000_0010;
    }
}

/// An interactive tree visualization bound to one [`Surface`].
///
/// Data and viewport changes only mark the view dirty; the next [`frame`](Self::frame)
/// reconciles and resets the pan/zoom to the margin origin. Pointer and wheel input
/// changes the transform or the hover state and never lays out again. A click on a
/// marker calls `on_select` with the exact record behind it.
pub struct TreeView<'a, S, F> {
    surface: S,
    reconciler: Reconciler<'a>,
    view: ViewController<MarkerId>,
    data: Option<&'a LineageNode>,
    viewport: Size,
    dirty: Dirty,
    hit_params: HitParams,
    on_select: F,
}

impl<S: core::fmt::Debug, F> core::fmt::Debug for TreeView<'_, S, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeView")
            .field("surface", &self.surface)
            .field("reconciler", &self.reconciler)
            .field("view", &self.view)
            .field("data", &self.data.map(|d| &d.name))
            .field("viewport", &self.viewport)
            .field("dirty", &self.dirty)
            .field("hit_params", &self.hit_params)
            .finish_non_exhaustive()
    }
}

impl<'a, S: Surface, F: FnMut(&'a LineageNode)> TreeView<'a, S, F> {
    /// Create a view with the default margin and no data.
    pub fn new(surface: S, viewport: Size, on_select: F) -> Self {
        Self {
            surface,
            reconciler: Reconciler::default(),
            view: ViewController::new(),
            data: None,
            viewport,
            dirty: Dirty::VIEWPORT,
            hit_params: HitParams {
                // The outline is part of the marker.
                fill_tolerance: style::MARKER_STROKE_WIDTH / 2.0,
            },
            on_select,
        }
    }

    /// Replace the margin reserved around the tree.
    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.reconciler = Reconciler::new(margin);
        self.dirty |= Dirty::VIEWPORT;
        self
    }

    /// Show `root`. Passing the record already shown is a no-op.
    pub fn set_data(&mut self, root: &'a LineageNode) {
        if !self.data.is_some_and(|d| core::ptr::eq(d, root)) {
            self.data = Some(root);
            self.dirty |= Dirty::DATA;
        }
    }

    /// Change the viewport size.
    pub fn resize(&mut self, viewport: Size) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.dirty |= Dirty::VIEWPORT;
        }
    }

    /// Pending changes.
    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    /// Bring the surface up to date. Returns `true` if a reconcile ran.
    pub fn frame(&mut self) -> bool {
        if self.dirty.contains(Dirty::VIEWPORT) {
            self.surface.resize(self.viewport);
        }
        let reconciled = match self.data {
            Some(root) if !self.dirty.is_empty() => {
                self.reconciler
                    .reconcile(root, self.viewport, &mut self.surface);
                self.view.reset(self.reconciler.margin());
                self.dirty = Dirty::empty();
                true
            }
            _ => false,
        };
        self.surface
            .set_transform(self.view.transform().to_affine());
        reconciled
    }

    /// The marker under a screen point.
    pub fn marker_at(&self, screen: Point) -> Option<MarkerId> {
        let local = self.view.transform().invert(screen);
        self.reconciler.scene().hit_test(local, &self.hit_params)
    }

    /// The record under a screen point.
    pub fn node_at(&self, screen: Point) -> Option<&'a LineageNode> {
        self.reconciler.node_for(self.marker_at(screen)?)
    }

    /// Pointer moved: pan if dragging, otherwise update hover.
    pub fn on_pointer_move(&mut self, position: Point) {
        if self.view.on_pointer_move(position) {
            return;
        }
        if !self.view.is_panning() {
            let target = self.marker_at(position);
            self.reconciler.set_hover(target, &mut self.surface);
        }
    }

    /// Pointer pressed.
    pub fn on_pointer_down(&mut self, position: Point) {
        let target = self.marker_at(position);
        self.view.on_pointer_down(position, target);
    }

    /// Pointer released: a press that stayed on its marker selects it.
    pub fn on_pointer_up(&mut self, position: Point) {
        let target = self.marker_at(position);
        let Some(clicked) = self.view.on_pointer_up(position, target.as_ref()) else {
            return;
        };
        if let Some(node) = self.reconciler.node_for(clicked) {
            #[cfg(feature = "tracing")]
            tracing::debug!(name = %node.name, "node selected");
            (self.on_select)(node);
        }
    }

    /// Pointer left the surface: clear hover.
    pub fn on_pointer_leave(&mut self) {
        self.reconciler.set_hover(None, &mut self.surface);
    }

    /// Wheel zoom about `position`.
    pub fn on_wheel(&mut self, position: Point, delta_y: f64, mode: WheelDeltaMode, ctrl: bool) {
        self.view.on_wheel(position, delta_y, mode, ctrl);
    }

    /// Double-click zoom about `position`.
    pub fn on_double_click(&mut self, position: Point, shift: bool) {
        self.view.on_double_click(position, shift);
    }

    /// The live pan/zoom transform.
    pub fn transform(&self) -> ViewTransform {
        self.view.transform()
    }

    /// The layout from the last reconcile.
    pub fn layout(&self) -> Option<&Layout<'a>> {
        self.reconciler.layout()
    }

    /// The retained primitives from the last reconcile.
    pub fn scene(&self) -> &Scene {
        self.reconciler.scene()
    }

    /// The hovered marker, if any.
    pub fn hovered(&self) -> Option<MarkerId> {
        self.reconciler.hovered()
    }

    /// Number of reconciles so far.
    pub fn passes(&self) -> usize {
        self.reconciler.passes()
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give back the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
