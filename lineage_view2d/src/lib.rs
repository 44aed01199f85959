// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage View2D: the pan/zoom transform between a laid-out tree and the screen.
//!
//! - [`ViewTransform`]: `screen = layout * scale + translate`, with
//!   [`apply`](ViewTransform::apply), [`invert`](ViewTransform::invert) and
//!   [`to_affine`](ViewTransform::to_affine).
//! - [`ViewController`]: sole owner of the live transform. It pans, zooms about a
//!   screen point with the scale clamped to a [`ScaleExtent`] (`0.5..=3.0` by
//!   default), and resets to a [`Margin`] origin.
//! - Input adapters: wheel zoom ([`wheel_zoom_factor`]), double-click zoom, and
//!   drag-to-pan built on [`gesture::GestureState`], which tells drags apart from
//!   clicks.
//!
//! Changing the view never touches the layout; renderers read the transform at
//! draw time.
//!
//! ```rust
//! use kurbo::Point;
//! use lineage_view2d::{Margin, ViewController};
//!
//! let mut view: ViewController<u32> = ViewController::new();
//! view.reset(Margin::default());
//!
//! let focal = Point::new(400.0, 300.0);
//! let under = view.transform().invert(focal);
//! view.zoom_about(focal, 10.0);
//!
//! assert_eq!(view.transform().scale, 3.0);
//! let back = view.transform().apply(under);
//! assert!((back - focal).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
pub mod gesture;
mod transform;

pub use controller::{ViewController, WheelDeltaMode, wheel_zoom_factor};
pub use transform::{Margin, ScaleExtent, ViewTransform};
