//! Render pass: one arc draw instruction per grid cell.
//!
//! Arcs are produced by an iterator so a full pass needs no allocation.
//! [`collect_arcs`] gathers them into a fixed-capacity buffer when the
//! drawing surface wants a slice.

use crate::geometry::DiscGeometry;
use crate::resolve::resolve_color;
use crate::types::{GridCell, RenderError};
use heapless::Vec;
use palette::Srgb;

/// A stroked arc for one grid cell.
///
/// The arc is inscribed in a square whose top-left corner sits at
/// `(inset, inset)` and whose sides are `diameter` long. Angles are in
/// degrees, clockwise from the positive x axis in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Cell this arc draws.
    pub cell: GridCell,

    /// Angle at which the arc starts.
    pub start_angle: f32,

    /// Angular length of the arc.
    pub sweep_angle: f32,

    /// Offset of the bounding square from both control edges.
    pub inset: f32,

    /// Side length of the bounding square.
    pub diameter: f32,

    /// Stroke width, equal to the track width.
    pub stroke_width: f32,

    /// Fill color, as resolved for `cell`.
    pub color: Srgb<u8>,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ArcSegment {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ArcSegment(cell: {}, start: {}, sweep: {}, inset: {}, diameter: {}, rgb: ({=u8}, {=u8}, {=u8}))",
            self.cell,
            self.start_angle,
            self.sweep_angle,
            self.inset,
            self.diameter,
            self.color.red,
            self.color.green,
            self.color.blue
        )
    }
}

/// Iterator over every arc of a disc, outer track first.
#[derive(Debug, Clone)]
pub struct Arcs {
    geometry: DiscGeometry,
    selection_width: f32,
    next: usize,
}

impl Arcs {
    /// Creates a render pass over `geometry`.
    ///
    /// `selection_padding` is the extra room, beyond one track width, kept
    /// free around the disc for the selection marker. Negative or non-finite
    /// padding is treated as zero.
    pub fn new(geometry: DiscGeometry, selection_padding: f32) -> Self {
        let selection_padding = if selection_padding.is_finite() {
            selection_padding.max(0.0)
        } else {
            0.0
        };
        Self {
            geometry,
            selection_width: geometry.color_track_width() + selection_padding,
            next: 0,
        }
    }

    fn arc(&self, index: usize) -> ArcSegment {
        let sectors_count = self.geometry.sectors_count();
        let tracks_count = self.geometry.tracks_count();
        let width = self.geometry.color_track_width();
        let size = self.geometry.radius() * 2.0;

        let sector = (index % sectors_count as usize) as u32;
        let track = (index / sectors_count as usize) as u32;
        let sweep_angle = 360.0 / sectors_count as f32;
        let depth = track as f32 * width;

        ArcSegment {
            cell: GridCell::new(sector, track),
            start_angle: sweep_angle * sector as f32,
            sweep_angle,
            inset: depth + width / 2.0 + self.selection_width / 2.0,
            diameter: (size - depth * 2.0 - width - self.selection_width).max(0.0),
            stroke_width: width,
            color: resolve_color(sector, track, sectors_count, tracks_count),
        }
    }
}

impl Iterator for Arcs {
    type Item = ArcSegment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.geometry.cell_count() {
            return None;
        }
        let arc = self.arc(self.next);
        self.next += 1;
        Some(arc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.geometry.cell_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Arcs {}

/// Returns a render pass over every cell of `geometry`.
#[inline]
pub fn arcs(geometry: DiscGeometry, selection_padding: f32) -> Arcs {
    Arcs::new(geometry, selection_padding)
}

/// Collects a full render pass into a buffer holding up to `N` arcs.
///
/// # Errors
/// * `CapacityExceeded` - The disc has more than `N` cells
pub fn collect_arcs<const N: usize>(
    geometry: DiscGeometry,
    selection_padding: f32,
) -> Result<Vec<ArcSegment, N>, RenderError> {
    let required = geometry.cell_count();
    if required > N {
        return Err(RenderError::CapacityExceeded {
            required,
            capacity: N,
        });
    }

    let mut buffer = Vec::new();
    for arc in arcs(geometry, selection_padding) {
        buffer.push(arc).map_err(|_| RenderError::CapacityExceeded {
            required,
            capacity: N,
        })?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_geometry() -> DiscGeometry {
        DiscGeometry::new(140.0, 20.0, 5, 24).unwrap()
    }

    #[test]
    fn emits_one_arc_per_cell_track_major() {
        let mut pass = arcs(default_geometry(), 5.0);
        assert_eq!(pass.len(), 120);

        let first = pass.next().unwrap();
        assert_eq!(first.cell, GridCell::new(0, 0));
        let second = pass.next().unwrap();
        assert_eq!(second.cell, GridCell::new(1, 0));

        let last = pass.last().unwrap();
        assert_eq!(last.cell, GridCell::new(23, 4));
    }

    #[test]
    fn outer_arc_layout() {
        let arc = arcs(default_geometry(), 5.0).next().unwrap();
        assert_eq!(arc.start_angle, 0.0);
        assert_eq!(arc.sweep_angle, 15.0);
        // 20 / 2 + (20 + 5) / 2
        assert_eq!(arc.inset, 22.5);
        // 280 - 20 - 25
        assert_eq!(arc.diameter, 235.0);
        assert_eq!(arc.stroke_width, 20.0);
    }

    #[test]
    fn inner_tracks_shrink_by_two_track_widths() {
        let pass: Vec<ArcSegment, 120> = collect_arcs(default_geometry(), 5.0).unwrap();
        let outer = pass[0];
        let next = pass[24];
        assert_eq!(next.cell.track, 1);
        assert_eq!(outer.diameter - next.diameter, 40.0);
        assert_eq!(next.inset - outer.inset, 20.0);
    }

    #[test]
    fn collapsed_disc_floors_diameter() {
        let geometry = default_geometry().with_radius(0.0);
        assert!(arcs(geometry, 5.0).all(|arc| arc.diameter == 0.0));
    }

    #[test]
    fn invalid_padding_is_treated_as_zero() {
        let unpadded = arcs(default_geometry(), 0.0).next().unwrap();
        for padding in [-10.0, f32::NAN, f32::INFINITY] {
            let arc = arcs(default_geometry(), padding).next().unwrap();
            assert_eq!(arc, unpadded, "padding {} changed the layout", padding);
        }
    }

    #[test]
    fn collect_rejects_small_buffer() {
        let result = collect_arcs::<100>(default_geometry(), 5.0);
        assert!(matches!(
            result,
            Err(RenderError::CapacityExceeded {
                required: 120,
                capacity: 100
            })
        ));
    }
}
