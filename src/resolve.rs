//! Grid cell to color resolution.
//!
//! Both the pointer path and the render pass call [`resolve_color`], which
//! is what keeps the picked color identical to the drawn one.

use crate::range::ColorRange;
use crate::types::GridCell;
use palette::Srgb;

/// Darkness reached at the innermost depth (halves every channel).
pub const MAX_DARKNESS: f32 = 0.5;

/// Resolves a grid cell to its color.
///
/// The sector picks the hue: `sector / sectors_count` is the progress around
/// the six-segment wheel. The track picks the shade: `track / tracks_count`
/// is the depth, which fades every channel linearly toward black, down to
/// half brightness at the center.
///
/// A sector equal to `sectors_count` resolves to the same color as sector 0.
/// Zero counts are treated as progress 0 rather than dividing by zero.
pub fn resolve_color(sector: u32, track: u32, sectors_count: u32, tracks_count: u32) -> Srgb<u8> {
    let angle_progress = progress(sector, sectors_count);
    let depth_progress = progress(track, tracks_count).clamp(0.0, 1.0);

    let (range_progress, range) = ColorRange::from_progress(f64::from(angle_progress));
    let hue = range.color(range_progress);

    let darkness = MAX_DARKNESS * depth_progress;
    Srgb::new(
        darken(hue.red, darkness),
        darken(hue.green, darkness),
        darken(hue.blue, darkness),
    )
}

/// Resolves a [`GridCell`] to its color.
#[inline]
pub fn resolve_cell(cell: GridCell, sectors_count: u32, tracks_count: u32) -> Srgb<u8> {
    resolve_color(cell.sector, cell.track, sectors_count, tracks_count)
}

/// Fades a channel toward black by `darkness` (0.0 keeps it, 1.0 is black).
#[inline]
pub fn darken(channel: u8, darkness: f32) -> u8 {
    let channel = f32::from(channel);
    libm::roundf(channel - channel * darkness).clamp(0.0, 255.0) as u8
}

#[inline]
fn progress(index: u32, count: u32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 / count as f32
}
