// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that records primitives and serializes them as an SVG document.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use kurbo::{Affine, BezPath, PathEl, Point, Size};

use crate::primitives::{Label, LabelKind, LinkPath, Marker, MarkerId};
use crate::style::{self, MarkerStyle};
use crate::surface::Surface;

#[derive(Clone, Debug)]
struct DrawnMarker {
    id: MarkerId,
    center: Point,
    radius: f64,
    fill: String,
    stroke: &'static str,
    stroke_width: f64,
}

#[derive(Clone, Debug)]
enum Item {
    Link(String),
    Marker(DrawnMarker),
    Label(Label),
}

/// Records drawn primitives and writes them out as standalone SVG.
///
/// ```
/// use kurbo::{Point, Size};
/// use lineage_hierarchy::NodeIndex;
/// use lineage_render::{Scene, SvgSurface};
///
/// let mut scene = Scene::new();
/// scene.push_marker(NodeIndex::ROOT, Point::new(10.0, 20.0), "#be123c");
///
/// let mut svg = SvgSurface::new(Size::new(200.0, 100.0));
/// scene.replay(&mut svg);
/// let doc = svg.to_svg();
/// assert!(doc.starts_with("<svg"));
/// assert!(doc.contains(r##"<circle cx="10" cy="20" r="8" fill="#be123c""##));
/// ```
#[derive(Clone, Debug)]
pub struct SvgSurface {
    viewport: Size,
    transform: Affine,
    items: Vec<Item>,
    clears: usize,
}

impl SvgSurface {
    /// Create an empty surface for a viewport.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            transform: Affine::IDENTITY,
            items: Vec::new(),
            clears: 0,
        }
    }

    /// Change the document size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// The document size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The current content transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// How many times the surface has been cleared, which is once per reconcile.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Number of drawn links.
    pub fn link_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, Item::Link(_)))
            .count()
    }

    /// Number of drawn markers.
    pub fn marker_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, Item::Marker(_)))
            .count()
    }

    /// Text of every drawn label, in draw order.
    pub fn label_texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().filter_map(|i| match i {
            Item::Label(l) => Some(l.text.as_str()),
            _ => None,
        })
    }

    /// The current style of a drawn marker.
    pub fn marker_style(&self, id: MarkerId) -> Option<MarkerStyle<'_>> {
        self.drawn_marker(id).map(|m| MarkerStyle {
            radius: m.radius,
            fill: &m.fill,
            stroke: m.stroke,
            stroke_width: m.stroke_width,
        })
    }

    fn drawn_marker(&self, id: MarkerId) -> Option<&DrawnMarker> {
        self.items.iter().find_map(|i| match i {
            Item::Marker(m) if m.id == id => Some(m),
            _ => None,
        })
    }

    /// Serialize the recorded content.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out)
            .expect("writing to a String cannot fail");
        out
    }

    /// Serialize the recorded content into any [`fmt::Write`].
    pub fn write_svg(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let Size { width, height } = self.viewport;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            out,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            style::BACKGROUND
        )?;
        let [a, b, c, d, e, f] = self.transform.as_coeffs();
        writeln!(out, r#"<g transform="matrix({a} {b} {c} {d} {e} {f})">"#)?;
        for item in &self.items {
            match item {
                Item::Link(d) => writeln!(
                    out,
                    r#"<path class="link" d="{d}" fill="none" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
                    style::LINK_STROKE,
                    style::LINK_WIDTH,
                    style::LINK_OPACITY
                )?,
                Item::Marker(m) => writeln!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                    m.center.x,
                    m.center.y,
                    m.radius,
                    Escaped(&m.fill),
                    m.stroke,
                    m.stroke_width
                )?,
                Item::Label(l) => write_label(out, l)?,
            }
        }
        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")
    }
}

fn write_label(out: &mut impl fmt::Write, label: &Label) -> fmt::Result {
    let Point { x, y } = label.position;
    let anchor = label.anchor.as_str();
    let dy = label.dy_em;
    let text = Escaped(&label.text);
    match label.kind {
        LabelKind::Name => {
            let common = format!(
                r#"x="{x}" y="{y}" dy="{dy}em" text-anchor="{anchor}" font-family="{}" font-size="{}" font-weight="bold""#,
                Escaped(style::NAME_FONT),
                style::NAME_SIZE
            );
            // Halo first so the fill sits on top of it.
            writeln!(
                out,
                r#"<text {common} fill="none" stroke="{}" stroke-width="{}">{text}</text>"#,
                style::NAME_HALO,
                style::NAME_HALO_WIDTH
            )?;
            writeln!(
                out,
                r#"<text {common} fill="{}">{text}</text>"#,
                style::NAME_FILL
            )
        }
        LabelKind::Translation => writeln!(
            out,
            r#"<text x="{x}" y="{y}" dy="{dy}em" text-anchor="{anchor}" font-family="{}" font-size="{}" fill="{}" style="text-transform:uppercase;letter-spacing:0.05em">{text}</text>"#,
            Escaped(style::TRANSLATION_FONT),
            style::TRANSLATION_SIZE,
            style::TRANSLATION_FILL
        ),
    }
}

/// Write SVG path data.
fn write_path_data(out: &mut impl fmt::Write, path: &BezPath) -> fmt::Result {
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => write!(out, "M{},{}", p.x, p.y)?,
            PathEl::LineTo(p) => write!(out, "L{},{}", p.x, p.y)?,
            PathEl::QuadTo(p1, p2) => write!(out, "Q{},{} {},{}", p1.x, p1.y, p2.x, p2.y)?,
            PathEl::CurveTo(p1, p2, p3) => write!(
                out,
                "C{},{} {},{} {},{}",
                p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            )?,
            PathEl::ClosePath => out.write_char('Z')?,
        }
    }
    Ok(())
}

/// Escapes XML special characters on display.
struct Escaped<'s>(&'s str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.items.clear();
        self.clears += 1;
    }

    fn resize(&mut self, viewport: Size) {
        self.set_viewport(viewport);
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn draw_link(&mut self, link: &LinkPath) {
        let mut d = String::new();
        write_path_data(&mut d, &link.path).expect("writing to a String cannot fail");
        self.items.push(Item::Link(d));
    }

    fn draw_marker(&mut self, marker: &Marker) {
        let style = marker.style();
        self.items.push(Item::Marker(DrawnMarker {
            id: marker.id,
            center: marker.center,
            radius: style.radius,
            fill: marker.fill.clone(),
            stroke: style.stroke,
            stroke_width: style.stroke_width,
        }));
    }

    fn draw_label(&mut self, label: &Label) {
        self.items.push(Item::Label(label.clone()));
    }

    fn restyle_marker(&mut self, id: MarkerId, style: &MarkerStyle<'_>) {
        for item in &mut self.items {
            if let Item::Marker(m) = item
                && m.id == id
            {
                m.radius = style.radius;
                m.stroke = style.stroke;
                m.stroke_width = style.stroke_width;
                if m.fill != style.fill {
                    m.fill = style.fill.into();
                }
            }
        }
    }
}
