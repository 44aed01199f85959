// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Narrow-phase hit testing for marker shapes.

use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Point};

/// Parameters for a precise hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Extra radius, in local units, within which a near miss still counts.
    pub fill_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            fill_tolerance: 0.0,
        }
    }
}

/// Score of a successful hit. Lower is better.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance outside the shape; 0 for interior points.
    pub distance: f64,
}

impl HitScore {
    /// An interior hit.
    pub const fn inside() -> Self {
        Self { distance: 0.0 }
    }

    /// Compare two scores, preferring smaller distance.
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Shapes that can answer "does this local-space point hit me?".
pub trait PreciseHitTest {
    /// Test `pt`, in the shape's own coordinates.
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}

/// A circle is a filled disk; the stroke is covered by `fill_tolerance`.
impl PreciseHitTest for Circle {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let d = pt - self.center;
        let dist = (d.x * d.x + d.y * d.y).sqrt();
        if dist <= self.radius + params.fill_tolerance {
            Some(HitScore {
                distance: (dist - self.radius).max(0.0),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_interior_edge_and_tolerance() {
        let c = Circle::new((10.0, 10.0), 8.0);
        let p = HitParams::default();
        assert_eq!(c.hit_test_local(Point::new(10.0, 10.0), &p), Some(HitScore::inside()));
        assert_eq!(c.hit_test_local(Point::new(18.0, 10.0), &p), Some(HitScore::inside()));
        assert!(c.hit_test_local(Point::new(19.0, 10.0), &p).is_none());

        let loose = HitParams {
            fill_tolerance: 1.0,
        };
        let near = c.hit_test_local(Point::new(19.0, 10.0), &loose);
        assert_eq!(near, Some(HitScore { distance: 1.0 }));
        assert_eq!(
            near.unwrap().cmp_distance(&HitScore::inside()),
            Ordering::Greater
        );
    }
}
