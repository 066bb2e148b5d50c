//! Pointer position to grid cell.

use crate::types::GridCell;

/// Maps a pointer position onto the sector/track grid of a disc.
///
/// The disc is centered at `(radius, radius)`, i.e. its control is the
/// square circumscribing it. Tracks occupy the outer band of width
/// `color_track_width * tracks_count`; track 0 is the outermost. Sectors are
/// counted clockwise in screen coordinates starting at the positive x axis.
///
/// Nothing is rejected. Positions outside the band clamp onto the nearest
/// track, sector indices clamp to `0..=sectors_count` (the full-turn index is
/// kept, not wrapped), and zero counts fall back to index 0. A band of zero
/// width puts pointers beyond it on the outermost track and everything
/// within it on the innermost one.
pub fn locate(
    x: f32,
    y: f32,
    radius: f32,
    tracks_count: u32,
    sectors_count: u32,
    color_track_width: f32,
) -> GridCell {
    let dx = x - radius;
    let dy = y - radius;
    let length = libm::sqrtf(dx * dx + dy * dy);

    let offset = radius - color_track_width * tracks_count as f32;
    let band = radius - offset;
    let track_progress = if band > 0.0 {
        ((length - offset) / band).clamp(0.0, 1.0)
    } else if length > offset {
        1.0
    } else {
        0.0
    };

    let angle = angle_progress(x, y, radius);

    let sector = libm::round(f64::from(sectors_count) * angle) as i64;
    let track = libm::roundf(tracks_count as f32 * (1.0 - track_progress)) as i64;

    GridCell {
        sector: sector.clamp(0, i64::from(sectors_count)) as u32,
        track: track.clamp(0, i64::from(tracks_count.saturating_sub(1))) as u32,
    }
}

/// Angular progress of a pointer around the disc center, in `[0, 1)`.
pub fn angle_progress(x: f32, y: f32, radius: f32) -> f64 {
    let degrees = f64::from(libm::atan2f(y - radius, x - radius)).to_degrees();
    libm::fmod(degrees + 360.0, 360.0) / 360.0
}
