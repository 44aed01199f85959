// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Render: turn a lineage tree into drawn primitives and keep them interactive.
//!
//! The pieces, bottom-up:
//!
//! - [`Surface`]: a retained drawing target (clear, set transform, draw link, marker
//!   or label, restyle marker). [`SvgSurface`] records into an SVG document.
//! - [`Scene`]: the primitives drawn by the last pass, with generational
//!   [`MarkerId`]s, a marker→node hit-target map, and a topmost-wins
//!   [`hit_test`](Scene::hit_test) built on [`PreciseHitTest`].
//! - [`Reconciler`]: lays the tree out inside the viewport minus a
//!   [`Margin`](lineage_view2d::Margin), clears, draws every link as a horizontal
//!   cubic, then every marker with its name and translation labels. It also owns the
//!   hover state, which never survives a reconcile.
//! - [`TreeView`]: the whole loop. `set_data` and `resize` mark the view [`Dirty`];
//!   [`frame`](TreeView::frame) reconciles when needed and applies the pan/zoom
//!   transform. Pointer input pans, zooms, hovers, and reports clicks to a selection
//!   callback with the exact record clicked.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use lineage_hierarchy::LineageNode;
//! use lineage_render::{SvgSurface, TreeView};
//!
//! let root = LineageNode::new("root").with_child(LineageNode::new("leaf"));
//! let mut picked = None;
//! {
//!     let viewport = Size::new(640.0, 480.0);
//!     let mut view = TreeView::new(SvgSurface::new(viewport), viewport, |n: &LineageNode| {
//!         picked = Some(n.name.clone());
//!     });
//!     view.set_data(&root);
//!     assert!(view.frame());
//!
//!     // Click the leaf's marker.
//!     let leaf = view.layout().unwrap().position(lineage_hierarchy::NodeIndex::new(1));
//!     let on_screen = view.transform().apply(leaf);
//!     view.on_pointer_down(on_screen);
//!     view.on_pointer_up(on_screen);
//!     assert!(view.surface().to_svg().contains("leaf"));
//! }
//! assert_eq!(picked.as_deref(), Some("leaf"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod primitives;
mod reconciler;
mod scene;
pub mod style;
mod surface;
mod svg;
mod view;

pub use hit::{HitParams, HitScore, PreciseHitTest};
pub use primitives::{Label, LabelKind, LinkPath, Marker, MarkerFlags, MarkerId, TextAnchor};
pub use reconciler::Reconciler;
pub use scene::Scene;
pub use surface::Surface;
pub use svg::SvgSurface;
pub use view::{Dirty, TreeView};
