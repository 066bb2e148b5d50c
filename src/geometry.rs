//! Disc geometry.

use crate::locate::locate;
use crate::resolve::resolve_cell;
use crate::types::{GeometryError, GridCell};
use palette::Srgb;

/// Immutable layout of a segmented color disc.
///
/// Rebuild it (see [`DiscGeometry::with_radius`]) whenever the control is
/// resized, then pass it by value to the locator and resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiscGeometry {
    radius: f32,
    color_track_width: f32,
    tracks_count: u32,
    sectors_count: u32,
}

impl DiscGeometry {
    /// Creates a validated disc geometry.
    ///
    /// A radius smaller than the combined track width is accepted; pointer
    /// positions then simply clamp onto the available tracks.
    ///
    /// # Errors
    /// * `ZeroTracks` / `ZeroSectors` - A count is zero
    /// * `InvalidTrackWidth` - Track width is not finite or not positive
    /// * `InvalidRadius` - Radius is not finite or negative
    pub fn new(
        radius: f32,
        color_track_width: f32,
        tracks_count: u32,
        sectors_count: u32,
    ) -> Result<Self, GeometryError> {
        if tracks_count == 0 {
            return Err(GeometryError::ZeroTracks);
        }
        if sectors_count == 0 {
            return Err(GeometryError::ZeroSectors);
        }
        if !color_track_width.is_finite() || color_track_width <= 0.0 {
            return Err(GeometryError::InvalidTrackWidth);
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius);
        }

        Ok(Self {
            radius,
            color_track_width,
            tracks_count,
            sectors_count,
        })
    }

    /// Returns the same disc with a new radius.
    ///
    /// Layout-derived radii are never rejected: negative or non-finite values
    /// collapse to zero.
    #[must_use]
    pub fn with_radius(self, radius: f32) -> Self {
        let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        Self { radius, ..self }
    }

    /// Returns the same disc sized for a square control `size` pixels wide.
    #[must_use]
    pub fn for_size(self, size: f32) -> Self {
        self.with_radius(size / 2.0)
    }

    /// Outer radius in pixels.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Width of one track in pixels.
    #[inline]
    pub fn color_track_width(&self) -> f32 {
        self.color_track_width
    }

    /// Number of concentric tracks.
    #[inline]
    pub fn tracks_count(&self) -> u32 {
        self.tracks_count
    }

    /// Number of sectors per track.
    #[inline]
    pub fn sectors_count(&self) -> u32 {
        self.sectors_count
    }

    /// Radius at which the innermost track ends.
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.color_track_width * self.tracks_count as f32
    }

    /// Number of cells (and rendered arcs) on the disc.
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.tracks_count as usize).saturating_mul(self.sectors_count as usize)
    }

    /// Locates the grid cell under a pointer.
    #[inline]
    pub fn locate(&self, x: f32, y: f32) -> GridCell {
        locate(
            x,
            y,
            self.radius,
            self.tracks_count,
            self.sectors_count,
            self.color_track_width,
        )
    }

    /// Resolves a grid cell to its color.
    #[inline]
    pub fn color_at(&self, cell: GridCell) -> Srgb<u8> {
        resolve_cell(cell, self.sectors_count, self.tracks_count)
    }

    /// Color under a pointer.
    #[inline]
    pub fn pick(&self, x: f32, y: f32) -> Srgb<u8> {
        self.color_at(self.locate(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_configuration() {
        assert_eq!(DiscGeometry::new(140.0, 20.0, 0, 24), Err(GeometryError::ZeroTracks));
        assert_eq!(DiscGeometry::new(140.0, 20.0, 5, 0), Err(GeometryError::ZeroSectors));
        assert_eq!(
            DiscGeometry::new(140.0, 0.0, 5, 24),
            Err(GeometryError::InvalidTrackWidth)
        );
        assert_eq!(
            DiscGeometry::new(140.0, f32::INFINITY, 5, 24),
            Err(GeometryError::InvalidTrackWidth)
        );
        assert_eq!(
            DiscGeometry::new(-1.0, 20.0, 5, 24),
            Err(GeometryError::InvalidRadius)
        );
        assert!(DiscGeometry::new(0.0, 20.0, 5, 24).is_ok());
    }

    #[test]
    fn resize_rederives_radius() {
        let geometry = DiscGeometry::new(0.0, 20.0, 5, 24).unwrap().for_size(280.0);
        assert_eq!(geometry.radius(), 140.0);
        assert_eq!(geometry.inner_radius(), 40.0);
        assert_eq!(geometry.cell_count(), 120);

        assert_eq!(geometry.with_radius(-3.0).radius(), 0.0);
        assert_eq!(geometry.with_radius(f32::NAN).radius(), 0.0);
    }

    #[test]
    fn cell_count_saturates_for_huge_grids() {
        let geometry = DiscGeometry::new(140.0, 20.0, u32::MAX, u32::MAX).unwrap();
        assert_eq!(
            geometry.cell_count(),
            (u32::MAX as usize).saturating_mul(u32::MAX as usize)
        );
    }

    #[test]
    fn pick_combines_locate_and_resolve() {
        let geometry = DiscGeometry::new(140.0, 20.0, 5, 24).unwrap();
        let cell = geometry.locate(140.0, 0.0);
        assert_eq!(cell, GridCell::new(18, 0));
        assert_eq!(geometry.pick(140.0, 0.0), geometry.color_at(cell));
    }
}
