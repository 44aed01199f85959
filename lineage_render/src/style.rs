// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual constants for links, markers and labels.

/// Link stroke color.
pub const LINK_STROKE: &str = "#cbd5e1";
/// Link stroke width.
pub const LINK_WIDTH: f64 = 1.5;
/// Link opacity.
pub const LINK_OPACITY: f64 = 0.6;

/// Marker radius at rest.
pub const MARKER_RADIUS: f64 = 8.0;
/// Marker radius while hovered.
pub const MARKER_HOVER_RADIUS: f64 = 10.0;
/// Marker outline at rest.
pub const MARKER_STROKE: &str = "#fff";
/// Marker outline while hovered.
pub const MARKER_HOVER_STROKE: &str = "#fcd34d";
/// Marker outline width.
pub const MARKER_STROKE_WIDTH: f64 = 2.0;

/// Horizontal distance from a marker center to its labels.
pub const LABEL_OFFSET: f64 = 12.0;
/// Baseline shift of the name label, in ems; roughly centers it on the marker.
pub const NAME_DY_EM: f64 = 0.31;
/// Baseline shift of the translation label, in ems; one line below the name.
pub const TRANSLATION_DY_EM: f64 = 1.4;

/// Name label fill.
pub const NAME_FILL: &str = "#334155";
/// Halo drawn behind the name for legibility over links.
pub const NAME_HALO: &str = "#fdfbf7";
/// Halo stroke width.
pub const NAME_HALO_WIDTH: f64 = 3.0;
/// Name font stack.
pub const NAME_FONT: &str = "'Noto Serif SC', serif";
/// Name font size in pixels.
pub const NAME_SIZE: f64 = 12.0;

/// Translation label fill.
pub const TRANSLATION_FILL: &str = "#64748b";
/// Translation font stack.
pub const TRANSLATION_FONT: &str = "'Inter', sans-serif";
/// Translation font size in pixels.
pub const TRANSLATION_SIZE: f64 = 10.0;

/// Canvas background.
pub const BACKGROUND: &str = "#fdfbf7";

/// Resolved marker appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle<'s> {
    /// Circle radius.
    pub radius: f64,
    /// Fill color.
    pub fill: &'s str,
    /// Outline color.
    pub stroke: &'static str,
    /// Outline width.
    pub stroke_width: f64,
}

impl<'s> MarkerStyle<'s> {
    /// The resting style for a marker filled with `fill`.
    pub fn base(fill: &'s str) -> Self {
        Self {
            radius: MARKER_RADIUS,
            fill,
            stroke: MARKER_STROKE,
            stroke_width: MARKER_STROKE_WIDTH,
        }
    }

    /// The hovered style for a marker filled with `fill`.
    pub fn hovered(fill: &'s str) -> Self {
        Self {
            radius: MARKER_HOVER_RADIUS,
            stroke: MARKER_HOVER_STROKE,
            ..Self::base(fill)
        }
    }
}
