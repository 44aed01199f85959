// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawn primitives: links, markers and labels.

use alloc::string::String;

use kurbo::{BezPath, Circle, Point};
use lineage_hierarchy::NodeIndex;

use crate::style::{self, MarkerStyle};

/// Identifier for a marker in a [`Scene`](crate::Scene) (generational).
///
/// Ids from before the last reconcile never resolve again.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MarkerId(pub(crate) u32, pub(crate) u32);

impl MarkerId {
    pub(crate) const fn new(slot: u32, generation: u32) -> Self {
        Self(slot, generation)
    }

    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Marker state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MarkerFlags: u8 {
        /// Marker participates in hit testing.
        const PICKABLE = 0b0000_0001;
        /// Pointer is over the marker.
        const HOVERED  = 0b0000_0010;
    }
}

impl Default for MarkerFlags {
    fn default() -> Self {
        Self::PICKABLE
    }
}

/// A parent→child connector.
#[derive(Clone, Debug)]
pub struct LinkPath {
    /// Parent node.
    pub source: NodeIndex,
    /// Child node.
    pub target: NodeIndex,
    /// Path in layout space.
    pub path: BezPath,
}

impl LinkPath {
    /// A horizontal S-curve from `from` to `to`.
    ///
    /// Both control points sit at the horizontal midpoint, so the curve leaves and
    /// enters its endpoints horizontally.
    pub fn horizontal(source: NodeIndex, target: NodeIndex, from: Point, to: Point) -> Self {
        let mx = (from.x + to.x) / 2.0;
        let mut path = BezPath::new();
        path.move_to(from);
        path.curve_to(Point::new(mx, from.y), Point::new(mx, to.y), to);
        Self {
            source,
            target,
            path,
        }
    }
}

/// A node marker.
#[derive(Clone, Debug)]
pub struct Marker {
    /// Scene id.
    pub id: MarkerId,
    /// The node this marker stands for.
    pub node: NodeIndex,
    /// Center in layout space.
    pub center: Point,
    /// Fill color.
    pub fill: String,
    /// State flags.
    pub flags: MarkerFlags,
}

impl Marker {
    /// The style implied by the current flags.
    pub fn style(&self) -> MarkerStyle<'_> {
        if self.flags.contains(MarkerFlags::HOVERED) {
            MarkerStyle::hovered(&self.fill)
        } else {
            MarkerStyle::base(&self.fill)
        }
    }

    /// The circle as currently drawn.
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.style().radius)
    }

    /// Returns `true` while hovered.
    pub fn is_hovered(&self) -> bool {
        self.flags.contains(MarkerFlags::HOVERED)
    }
}

/// Horizontal text alignment relative to the label position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text ends at the position.
    End,
}

impl TextAnchor {
    /// The SVG `text-anchor` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Which line of a node's caption a label is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelKind {
    /// The node name.
    Name,
    /// The translation, one line below the name.
    Translation,
}

/// A text label attached to a marker.
#[derive(Clone, Debug)]
pub struct Label {
    /// Owning marker.
    pub marker: MarkerId,
    /// Which line this is.
    pub kind: LabelKind,
    /// Text content.
    pub text: String,
    /// Anchor point in layout space.
    pub position: Point,
    /// Alignment at `position`.
    pub anchor: TextAnchor,
    /// Baseline shift in ems.
    pub dy_em: f64,
}

impl Label {
    /// Place a caption line beside a marker at `center`.
    ///
    /// Internal nodes are captioned on the left, leaves on the right.
    pub fn beside(
        marker: MarkerId,
        kind: LabelKind,
        text: String,
        center: Point,
        is_leaf: bool,
    ) -> Self {
        let (dx, anchor) = if is_leaf {
            (style::LABEL_OFFSET, TextAnchor::Start)
        } else {
            (-style::LABEL_OFFSET, TextAnchor::End)
        };
        let dy_em = match kind {
            LabelKind::Name => style::NAME_DY_EM,
            LabelKind::Translation => style::TRANSLATION_DY_EM,
        };
        Self {
            marker,
            kind,
            text,
            position: Point::new(center.x + dx, center.y),
            anchor,
            dy_em,
        }
    }
}
