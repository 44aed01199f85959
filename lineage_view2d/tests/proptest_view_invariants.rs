// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the view controller.
//!
//! 1. Zooming keeps the layout point under the focal point fixed.
//! 2. Scale stays inside the extent after any sequence of operations.
//! 3. `apply` and `invert` are inverse maps.

use kurbo::{Point, Vec2};
use lineage_view2d::{Margin, ViewController, ViewTransform, WheelDeltaMode};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Pan(Vec2),
    Zoom(Point, f64),
    Wheel(Point, f64, bool),
    PageWheel(Point, f64),
    DoubleClick(Point, bool),
    Reset,
}

fn point() -> impl Strategy<Value = Point> {
    (-2000.0f64..2000.0, -2000.0f64..2000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        point().prop_map(|p| Op::Pan(p.to_vec2())),
        (point(), 0.01f64..100.0).prop_map(|(p, f)| Op::Zoom(p, f)),
        (point(), -1000.0f64..1000.0, any::<bool>()).prop_map(|(p, d, c)| Op::Wheel(p, d, c)),
        (point(), -5000.0f64..5000.0).prop_map(|(p, d)| Op::PageWheel(p, d)),
        (point(), any::<bool>()).prop_map(|(p, s)| Op::DoubleClick(p, s)),
        Just(Op::Reset),
    ]
}

fn apply(view: &mut ViewController<u32>, op: &Op) {
    match *op {
        Op::Pan(d) => view.pan_by(d),
        Op::Zoom(p, f) => view.zoom_about(p, f),
        Op::Wheel(p, d, ctrl) => view.on_wheel(p, d, WheelDeltaMode::Pixel, ctrl),
        Op::PageWheel(p, d) => view.on_wheel(p, d, WheelDeltaMode::Page, false),
        Op::DoubleClick(p, shift) => view.on_double_click(p, shift),
        Op::Reset => view.reset(Margin::default()),
    }
}

proptest! {
    #[test]
    fn zoom_anchor_is_preserved(
        ops in proptest::collection::vec(op(), 0..20),
        focal in point(),
        factor in 0.01f64..100.0,
    ) {
        let mut view: ViewController<u32> = ViewController::new();
        for op in &ops {
            apply(&mut view, op);
        }
        let under = view.transform().invert(focal);
        view.zoom_about(focal, factor);
        let back = view.transform().apply(under);
        prop_assert!((back - focal).hypot() < 1e-6, "{back:?} != {focal:?}");
    }

    #[test]
    fn scale_stays_in_extent(ops in proptest::collection::vec(op(), 0..40)) {
        let mut view: ViewController<u32> = ViewController::new();
        for op in &ops {
            apply(&mut view, op);
            let scale = view.transform().scale;
            prop_assert!((0.5..=3.0).contains(&scale), "scale {scale} escaped");
        }
    }

    #[test]
    fn apply_and_invert_round_trip(
        translate in point(),
        scale in 0.5f64..3.0,
        p in point(),
    ) {
        let t = ViewTransform::new(translate.to_vec2(), scale);
        prop_assert!((t.invert(t.apply(p)) - p).hypot() < 1e-9);
        prop_assert!((t.to_affine() * p - t.apply(p)).hypot() < 1e-9);
    }
}
