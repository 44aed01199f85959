// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::gesture::{GestureResult, GestureState};
use crate::transform::{Margin, ScaleExtent, ViewTransform};

/// Unit of a wheel delta, as reported by the platform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WheelDeltaMode {
    /// Delta in pixels (trackpads, most mice on the web).
    #[default]
    Pixel,
    /// Delta in lines.
    Line,
    /// Delta in pages.
    Page,
}

/// Zoom factor for a wheel step: `2^(-delta_y * k)`.
///
/// `k` is 0.002 for pixels, 0.05 for lines and 1 for pages, ten times that while
/// `ctrl` is held (pinch gestures arrive as ctrl+wheel on most platforms).
pub fn wheel_zoom_factor(delta_y: f64, mode: WheelDeltaMode, ctrl: bool) -> f64 {
    let k = match mode {
        WheelDeltaMode::Pixel => 0.002,
        WheelDeltaMode::Line => 0.05,
        WheelDeltaMode::Page => 1.0,
    };
    let k = if ctrl { k * 10.0 } else { k };
    2.0_f64.powf(-delta_y * k)
}

/// Owner of the single mutable [`ViewTransform`].
///
/// All changes go through its methods; readers take a copy with
/// [`ViewController::transform`]. `K` identifies pointer targets (for example a marker
/// id), so that a press which does not turn into a pan can be reported as a click.
#[derive(Clone, Debug)]
pub struct ViewController<K> {
    transform: ViewTransform,
    extent: ScaleExtent,
    gesture: GestureState<K>,
}

impl<K: PartialEq + Clone> Default for ViewController<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq + Clone> ViewController<K> {
    /// Identity transform with the default [`ScaleExtent`].
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            extent: ScaleExtent::default(),
            gesture: GestureState::new(),
        }
    }

    /// Replace the scale bounds, clamping the current scale into them.
    #[must_use]
    pub fn with_extent(mut self, extent: ScaleExtent) -> Self {
        self.extent = extent;
        self.transform.scale = extent.clamp(self.transform.scale);
        self
    }

    /// Replace the press tracker's click distance.
    #[must_use]
    pub fn with_click_distance(mut self, distance: f64) -> Self {
        self.gesture.click_distance = distance;
        self
    }

    /// The current transform.
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// The scale bounds.
    pub fn extent(&self) -> ScaleExtent {
        self.extent
    }

    /// Translate by a screen-space delta. Panning is unbounded.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.transform.translate += delta;
    }

    /// Multiply the scale by `factor` about the screen point `focal`.
    ///
    /// The resulting scale is clamped to the extent, and the layout point under
    /// `focal` stays under it. Factors that overflow to infinity or underflow to
    /// zero land on the extent bounds; NaN and negative factors are ignored.
    pub fn zoom_about(&mut self, focal: Point, factor: f64) {
        let scaled = self.transform.scale * factor;
        if scaled.is_nan() || factor < 0.0 {
            return;
        }
        let anchor = self.transform.invert(focal);
        let scale = self.extent.clamp(scaled);
        self.transform = ViewTransform {
            translate: focal.to_vec2() - anchor.to_vec2() * scale,
            scale,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(scale, x = focal.x, y = focal.y, "zoom");
    }

    /// Initial placement: content origin at the margin's top-left, unit scale.
    pub fn reset(&mut self, margin: Margin) {
        self.transform = ViewTransform::new(margin.origin(), self.extent.clamp(1.0));
        self.gesture.cancel();
    }

    /// Zoom for a wheel event at `position`.
    pub fn on_wheel(&mut self, position: Point, delta_y: f64, mode: WheelDeltaMode, ctrl: bool) {
        self.zoom_about(position, wheel_zoom_factor(delta_y, mode, ctrl));
    }

    /// Zoom in ×2 about `position`, or out ×0.5 with `shift`.
    pub fn on_double_click(&mut self, position: Point, shift: bool) {
        self.zoom_about(position, if shift { 0.5 } else { 2.0 });
    }

    /// Begin a press over `target`, or over empty space with `None`.
    pub fn on_pointer_down(&mut self, position: Point, target: Option<K>) {
        self.gesture.on_down(target, position);
    }

    /// Track pointer movement. Returns `true` if the transform changed.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        match self.gesture.on_move(position) {
            Some(delta) => {
                self.pan_by(delta);
                true
            }
            None => false,
        }
    }

    /// End a press. Returns the clicked target, if the press was a click.
    pub fn on_pointer_up(&mut self, position: Point, target: Option<&K>) -> Option<K> {
        match self.gesture.on_up(target, position) {
            GestureResult::Click(k) => Some(k),
            GestureResult::Panned | GestureResult::Suppressed(_) => None,
        }
    }

    /// Returns `true` while a drag is panning the view.
    pub fn is_panning(&self) -> bool {
        self.gesture.is_panning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn reset_places_content_at_margin() {
        let mut view: ViewController<u32> = ViewController::new();
        view.pan_by(Vec2::new(50.0, 50.0));
        view.zoom_about(Point::ZERO, 2.0);
        view.reset(Margin::default());
        assert_eq!(
            view.transform(),
            ViewTransform::new(Vec2::new(120.0, 20.0), 1.0)
        );
    }

    #[test]
    fn pan_is_additive_and_unbounded() {
        let mut view: ViewController<u32> = ViewController::new();
        view.pan_by(Vec2::new(1e6, -1e6));
        view.pan_by(Vec2::new(1.0, 2.0));
        assert_eq!(view.transform().translate, Vec2::new(1e6 + 1.0, -1e6 + 2.0));
    }

    #[test]
    fn zoom_keeps_focal_point_fixed() {
        let mut view: ViewController<u32> = ViewController::new();
        view.reset(Margin::default());
        let focal = Point::new(300.0, 200.0);
        let under = view.transform().invert(focal);
        view.zoom_about(focal, 1.8);
        assert!(close(view.transform().apply(under), focal));
        assert_eq!(view.transform().scale, 1.8);
    }

    #[test]
    fn zoom_clamps_and_still_anchors() {
        let mut view: ViewController<u32> = ViewController::new();
        let focal = Point::new(40.0, 60.0);
        let under = view.transform().invert(focal);
        view.zoom_about(focal, 100.0);
        assert_eq!(view.transform().scale, 3.0);
        assert!(close(view.transform().apply(under), focal));
        view.zoom_about(focal, 1e-6);
        assert_eq!(view.transform().scale, 0.5);
        assert!(close(view.transform().apply(under), focal));
    }

    #[test]
    fn nan_and_negative_factors_are_ignored() {
        let mut view: ViewController<u32> = ViewController::new();
        let before = view.transform();
        for factor in [-2.0, -1e-9, f64::NAN, f64::NEG_INFINITY] {
            view.zoom_about(Point::new(3.0, 4.0), factor);
        }
        assert_eq!(view.transform(), before);
    }

    #[test]
    fn saturated_factors_land_on_the_extent_bounds() {
        let mut view: ViewController<u32> = ViewController::new();
        view.reset(Margin::default());
        let focal = Point::new(250.0, 180.0);
        let under = view.transform().invert(focal);

        view.zoom_about(focal, f64::INFINITY);
        assert_eq!(view.transform().scale, 3.0);
        assert!(close(view.transform().apply(under), focal));

        view.zoom_about(focal, 0.0);
        assert_eq!(view.transform().scale, 0.5);
        assert!(close(view.transform().apply(under), focal));
    }

    #[test]
    fn huge_page_wheel_deltas_zoom_to_the_limits() {
        let mut view: ViewController<u32> = ViewController::new();
        view.reset(Margin::default());
        let focal = Point::new(400.0, 300.0);
        let under = view.transform().invert(focal);

        assert!(wheel_zoom_factor(-3000.0, WheelDeltaMode::Page, false).is_infinite());
        view.on_wheel(focal, -3000.0, WheelDeltaMode::Page, false);
        assert_eq!(view.transform().scale, 3.0);
        assert!(close(view.transform().apply(under), focal));

        assert_eq!(wheel_zoom_factor(3000.0, WheelDeltaMode::Page, false), 0.0);
        view.on_wheel(focal, 3000.0, WheelDeltaMode::Page, false);
        assert_eq!(view.transform().scale, 0.5);
        assert!(close(view.transform().apply(under), focal));
    }

    #[test]
    fn wheel_policy() {
        assert_eq!(wheel_zoom_factor(0.0, WheelDeltaMode::Pixel, false), 1.0);
        assert!((wheel_zoom_factor(-500.0, WheelDeltaMode::Pixel, false) - 2.0).abs() < 1e-12);
        assert!((wheel_zoom_factor(20.0, WheelDeltaMode::Line, false) - 0.5).abs() < 1e-12);
        assert!((wheel_zoom_factor(-1.0, WheelDeltaMode::Page, false) - 2.0).abs() < 1e-12);
        assert!((wheel_zoom_factor(-50.0, WheelDeltaMode::Pixel, true) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn double_click_doubles_or_halves() {
        let mut view: ViewController<u32> = ViewController::new();
        view.on_double_click(Point::new(10.0, 10.0), false);
        assert_eq!(view.transform().scale, 2.0);
        view.on_double_click(Point::new(10.0, 10.0), true);
        assert_eq!(view.transform().scale, 1.0);
        view.on_wheel(Point::ZERO, -2000.0, WheelDeltaMode::Pixel, false);
        assert_eq!(view.transform().scale, 3.0);
    }

    #[test]
    fn drag_pans_and_click_reports_target() {
        let mut view: ViewController<u32> = ViewController::new();

        view.on_pointer_down(Point::new(10.0, 10.0), None);
        assert!(!view.on_pointer_move(Point::new(11.0, 10.0)));
        assert!(view.on_pointer_move(Point::new(40.0, 30.0)));
        assert!(view.is_panning());
        assert_eq!(view.on_pointer_up(Point::new(40.0, 30.0), None), None);
        assert_eq!(view.transform().translate, Vec2::new(30.0, 20.0));

        view.on_pointer_down(Point::new(5.0, 5.0), Some(9));
        assert_eq!(view.on_pointer_up(Point::new(6.0, 5.0), Some(&9)), Some(9));
        assert_eq!(view.transform().translate, Vec2::new(30.0, 20.0));
    }
}
