// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// A uniform scale followed by a translation: `screen = layout * scale + translate`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    /// Screen-space offset of the layout origin.
    pub translate: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// No pan, unit scale.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Create a transform.
    pub const fn new(translate: Vec2, scale: f64) -> Self {
        Self { translate, scale }
    }

    /// The equivalent affine map.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Map a layout-space point to screen space.
    pub fn apply(&self, layout: Point) -> Point {
        (layout.to_vec2() * self.scale + self.translate).to_point()
    }

    /// Map a screen-space point back to layout space.
    pub fn invert(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.translate) / self.scale).to_point()
    }
}

/// Inclusive bounds on [`ViewTransform::scale`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleExtent {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self { min: 0.5, max: 3.0 }
    }
}

impl ScaleExtent {
    /// Create an extent; `min` must not exceed `max`.
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min > 0.0 && min <= max, "invalid scale extent {min}..={max}");
        Self { min, max }
    }

    /// Clamp `scale` into the extent.
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies inside the extent.
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

/// Space reserved around the drawn tree for labels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Margin {
    /// Top inset.
    pub top: f64,
    /// Right inset.
    pub right: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Left inset.
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 120.0,
            bottom: 20.0,
            left: 120.0,
        }
    }
}

impl Margin {
    /// Create a margin.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The offset of the content origin from the viewport origin.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// The viewport minus this margin, saturating at zero.
    pub fn inset(&self, viewport: Size) -> Size {
        Size::new(
            (viewport.width - self.left - self.right).max(0.0),
            (viewport.height - self.top - self.bottom).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_matches_affine_and_inverts() {
        let t = ViewTransform::new(Vec2::new(120.0, 20.0), 2.0);
        let p = Point::new(10.0, -4.0);
        let screen = t.apply(p);
        assert_eq!(screen, Point::new(140.0, 12.0));
        assert_eq!(t.to_affine() * p, screen);
        assert_eq!(t.invert(screen), p);
    }

    #[test]
    fn scale_extent_clamps() {
        let extent = ScaleExtent::default();
        assert_eq!(extent.clamp(0.1), 0.5);
        assert_eq!(extent.clamp(9.0), 3.0);
        assert_eq!(extent.clamp(1.7), 1.7);
        assert!(extent.contains(3.0));
        assert!(!extent.contains(3.01));
    }

    #[test]
    fn margin_insets_saturate() {
        let margin = Margin::default();
        assert_eq!(
            margin.inset(Size::new(1000.0, 600.0)),
            Size::new(760.0, 560.0)
        );
        assert_eq!(margin.inset(Size::new(100.0, 10.0)), Size::ZERO);
        assert_eq!(margin.origin(), Vec2::new(120.0, 20.0));
    }
}
