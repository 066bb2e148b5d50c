//! Color space helpers for resolved ring colors.
//!
//! The ring works in 8-bit sRGB. These helpers hand the same colors to code
//! that thinks in floating point RGB or in HSV, e.g. to show the hue in
//! degrees next to the picked swatch.

use palette::{FromColor, Hsv, Srgb};

/// Converts an 8-bit color to `Srgb<f32>` (0.0-1.0 range).
#[inline]
pub fn to_float(color: Srgb<u8>) -> Srgb {
    color.into_format()
}

/// Converts an 8-bit color to HSV.
#[inline]
pub fn hsv_of(color: Srgb<u8>) -> Hsv {
    Hsv::from_color(to_float(color))
}

/// Hue of an 8-bit color in degrees, in `[0, 360)`.
#[inline]
pub fn hue_degrees(color: Srgb<u8>) -> f32 {
    hsv_of(color).hue.into_positive_degrees()
}
