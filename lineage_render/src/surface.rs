// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size};

use crate::primitives::{Label, LinkPath, Marker, MarkerId};
use crate::style::MarkerStyle;

/// A retained drawing target.
///
/// Primitives are given in layout space; the surface applies the view transform
/// from [`set_transform`](Surface::set_transform) when it paints. Restyling a marker
/// must not move or reorder it.
pub trait Surface {
    /// Remove everything drawn so far.
    fn clear(&mut self);

    /// The viewport changed size.
    fn resize(&mut self, viewport: Size);

    /// Set the layout→screen transform for all content.
    fn set_transform(&mut self, transform: Affine);

    /// Draw a link.
    fn draw_link(&mut self, link: &LinkPath);

    /// Draw a marker.
    fn draw_marker(&mut self, marker: &Marker);

    /// Draw a label.
    fn draw_label(&mut self, label: &Label);

    /// Change the appearance of a previously drawn marker.
    fn restyle_marker(&mut self, id: MarkerId, style: &MarkerStyle<'_>);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn resize(&mut self, viewport: Size) {
        (**self).resize(viewport);
    }

    fn set_transform(&mut self, transform: Affine) {
        (**self).set_transform(transform);
    }

    fn draw_link(&mut self, link: &LinkPath) {
        (**self).draw_link(link);
    }

    fn draw_marker(&mut self, marker: &Marker) {
        (**self).draw_marker(marker);
    }

    fn draw_label(&mut self, label: &Label) {
        (**self).draw_label(label);
    }

    fn restyle_marker(&mut self, id: MarkerId, style: &MarkerStyle<'_>) {
        (**self).restyle_marker(id, style);
    }
}
