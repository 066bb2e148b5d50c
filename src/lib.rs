#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DiscGeometry`**: Immutable ring layout (radius, track width, track and sector counts)
//! - **`GridCell`**: A (sector, track) cell of the ring; track 0 is the outermost
//! - **`locate`**: Maps a pointer position to the grid cell under it
//! - **`resolve_color`**: Maps a grid cell to its color (hue from the sector, shade from the track)
//! - **`ColorRange`**: One of the six segments of the hue wheel
//! - **`Arcs`**: Render pass yielding one `ArcSegment` draw instruction per cell
//! - **`RingPicker`**: Controller tying resize, pointer events and rendering together
//! - **`ColorSink`**: Trait to implement for whatever receives picked colors
//!
//! Picked and rendered colors are `Srgb<u8>`. Both paths go through the same
//! resolver, so the color reported for a touch is always the color drawn for
//! the cell it lands in.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod geometry;
pub mod locate;
pub mod picker;
pub mod range;
pub mod render;
pub mod resolve;
pub mod types;

pub use geometry::DiscGeometry;
pub use locate::locate;
pub use picker::{ColorSink, RingPicker, RingPickerBuilder};
pub use range::ColorRange;
pub use render::{ArcSegment, Arcs, arcs, collect_arcs};
pub use resolve::{resolve_cell, resolve_color};
pub use types::{GeometryError, GridCell, PointerAction, PointerEvent, RenderError};

/// Default width of one track in pixels.
pub const DEFAULT_COLOR_TRACK_WIDTH: f32 = 20.0;

/// Default number of concentric tracks.
pub const DEFAULT_TRACKS_COUNT: u32 = 5;

/// Default number of sectors per track.
pub const DEFAULT_SECTORS_COUNT: u32 = 24;

/// Default room, beyond one track width, reserved around the ring for the
/// selection marker.
pub const DEFAULT_SELECTION_PADDING: f32 = 5.0;

/// Number of arcs in a default ring render pass.
pub const DEFAULT_CELL_COUNT: usize = (DEFAULT_TRACKS_COUNT * DEFAULT_SECTORS_COUNT) as usize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_fits_default_buffer() {
        let geometry = DiscGeometry::new(
            140.0,
            DEFAULT_COLOR_TRACK_WIDTH,
            DEFAULT_TRACKS_COUNT,
            DEFAULT_SECTORS_COUNT,
        )
        .unwrap();
        assert_eq!(geometry.cell_count(), DEFAULT_CELL_COUNT);
        assert!(collect_arcs::<DEFAULT_CELL_COUNT>(geometry, DEFAULT_SELECTION_PADDING).is_ok());
    }
}
