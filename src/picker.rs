//! Ring color picker controller.
//!
//! Provides [`RingPicker`], which holds the disc layout for the current
//! control size, turns pointer events into picked colors, and exposes the
//! render pass for the same layout. Also defines the [`ColorSink`] trait that
//! receives picked colors.

use crate::geometry::DiscGeometry;
use crate::render::{self, ArcSegment, Arcs, collect_arcs};
use crate::types::{GeometryError, GridCell, PointerEvent, RenderError};
use crate::{
    DEFAULT_COLOR_TRACK_WIDTH, DEFAULT_SECTORS_COUNT, DEFAULT_SELECTION_PADDING,
    DEFAULT_TRACKS_COUNT,
};
use heapless::Vec;
use palette::Srgb;

/// Receiver for colors picked on the ring.
///
/// Implement this for whatever consumes the selection (a preview swatch, a
/// model update, a channel to another task).
pub trait ColorSink {
    /// Called once for every pointer-down or pointer-move on the ring.
    ///
    /// Calls are not coalesced: dragging inside one cell reports the same
    /// color again.
    fn picked_color(&mut self, color: Srgb<u8>);
}

impl<F: FnMut(Srgb<u8>)> ColorSink for F {
    fn picked_color(&mut self, color: Srgb<u8>) {
        self(color)
    }
}

/// Segmented ring color picker.
///
/// # Type Parameters
/// * `S` - Sink receiving picked colors
pub struct RingPicker<S: ColorSink> {
    sink: S,
    geometry: DiscGeometry,
    selection_padding: f32,
    selected: GridCell,
}

impl<S: ColorSink> RingPicker<S> {
    /// Rederives the disc for a control `size` pixels wide.
    ///
    /// The selection is kept; it is a grid cell and does not depend on size.
    pub fn resize(&mut self, size: f32) {
        self.geometry = self.geometry.for_size(size);

        #[cfg(feature = "defmt")]
        defmt::debug!("ring resized: radius={}", self.geometry.radius());
    }

    /// Handles a pointer event.
    ///
    /// Down and move events locate the cell under the pointer, store it as
    /// the selection and report its color to the sink. Other actions are
    /// ignored.
    ///
    /// # Returns
    /// * `Some(cell)` - The newly selected cell
    /// * `None` - Event ignored
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<GridCell> {
        if !event.action.picks() {
            return None;
        }

        let cell = self.geometry.locate(event.x, event.y);
        let color = self.geometry.color_at(cell);
        self.selected = cell;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "picked sector={} track={} rgb=({=u8}, {=u8}, {=u8})",
            cell.sector,
            cell.track,
            color.red,
            color.green,
            color.blue
        );

        self.sink.picked_color(color);
        Some(cell)
    }

    /// Returns a render pass over the whole ring.
    pub fn arcs(&self) -> Arcs {
        render::arcs(self.geometry, self.selection_padding)
    }

    /// Collects the render pass into a buffer of up to `N` arcs.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The ring has more than `N` cells
    pub fn collect_arcs<const N: usize>(&self) -> Result<Vec<ArcSegment, N>, RenderError> {
        collect_arcs(self.geometry, self.selection_padding)
    }

    /// Returns the currently selected cell.
    pub fn selected(&self) -> GridCell {
        self.selected
    }

    /// Returns the color of the currently selected cell.
    pub fn selected_color(&self) -> Srgb<u8> {
        self.geometry.color_at(self.selected)
    }

    /// Returns the current disc geometry.
    pub fn geometry(&self) -> DiscGeometry {
        self.geometry
    }

    /// Returns the padding reserved around the ring for the selection marker.
    pub fn selection_padding(&self) -> f32 {
        self.selection_padding
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the picker and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Builder for a validated [`RingPicker`].
#[derive(Debug, Clone, Copy)]
pub struct RingPickerBuilder {
    color_track_width: f32,
    tracks_count: u32,
    sectors_count: u32,
    selection_padding: f32,
    size: f32,
}

impl RingPickerBuilder {
    /// Creates a builder with the default ring layout.
    pub fn new() -> Self {
        Self {
            color_track_width: DEFAULT_COLOR_TRACK_WIDTH,
            tracks_count: DEFAULT_TRACKS_COUNT,
            sectors_count: DEFAULT_SECTORS_COUNT,
            selection_padding: DEFAULT_SELECTION_PADDING,
            size: 0.0,
        }
    }

    /// Sets the width of one track in pixels.
    pub fn color_track_width(mut self, width: f32) -> Self {
        self.color_track_width = width;
        self
    }

    /// Sets the number of concentric tracks.
    pub fn tracks_count(mut self, count: u32) -> Self {
        self.tracks_count = count;
        self
    }

    /// Sets the number of sectors per track.
    pub fn sectors_count(mut self, count: u32) -> Self {
        self.sectors_count = count;
        self
    }

    /// Sets the room kept free around the ring, beyond one track width, for
    /// the selection marker.
    pub fn selection_padding(mut self, padding: f32) -> Self {
        self.selection_padding = padding;
        self
    }

    /// Sets the initial control size in pixels.
    ///
    /// Defaults to zero, which collapses the ring until the first
    /// [`RingPicker::resize`].
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Builds and validates the picker.
    ///
    /// # Errors
    /// * `ZeroTracks` / `ZeroSectors` - A count is zero
    /// * `InvalidTrackWidth` - Track width is not finite or not positive
    /// * `InvalidRadius` - Initial size is not finite or negative
    /// * `InvalidSelectionPadding` - Padding is not finite or negative
    pub fn build<S: ColorSink>(self, sink: S) -> Result<RingPicker<S>, GeometryError> {
        if !self.selection_padding.is_finite() || self.selection_padding < 0.0 {
            return Err(GeometryError::InvalidSelectionPadding);
        }

        let geometry = DiscGeometry::new(
            self.size / 2.0,
            self.color_track_width,
            self.tracks_count,
            self.sectors_count,
        )?;

        Ok(RingPicker {
            sink,
            geometry,
            selection_padding: self.selection_padding,
            selected: GridCell::default(),
        })
    }
}

impl Default for RingPickerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
