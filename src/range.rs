//! Six-segment hue wheel.
//!
//! The wheel is split into six equal segments. Within each segment two
//! channels are pinned at 0 or 255 and the third ramps linearly, so the
//! whole wheel runs red, yellow, green, cyan, blue, purple and back to red.

use palette::Srgb;

/// One of the six segments of the hue wheel, in wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorRange {
    /// Green ramps up. `[0, 1/6)`
    RedToYellow,

    /// Red ramps down. `[1/6, 2/6)`
    YellowToGreen,

    /// Blue ramps up. `[2/6, 3/6)`
    GreenToCyan,

    /// Green ramps down. `[3/6, 4/6)`
    CyanToBlue,

    /// Red ramps up. `[4/6, 5/6)`
    BlueToPurple,

    /// Blue ramps down. `[5/6, 1]`
    PurpleToRed,
}

impl ColorRange {
    /// All segments in wheel order.
    pub const ALL: [ColorRange; 6] = [
        ColorRange::RedToYellow,
        ColorRange::YellowToGreen,
        ColorRange::GreenToCyan,
        ColorRange::CyanToBlue,
        ColorRange::BlueToPurple,
        ColorRange::PurpleToRed,
    ];

    /// Position of this segment on the wheel, 0 through 5.
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            ColorRange::RedToYellow => 0,
            ColorRange::YellowToGreen => 1,
            ColorRange::GreenToCyan => 2,
            ColorRange::CyanToBlue => 3,
            ColorRange::BlueToPurple => 4,
            ColorRange::PurpleToRed => 5,
        }
    }

    /// Splits a wheel progress into its segment and the progress within it.
    ///
    /// Segment boundaries are half-open, so a progress sitting exactly on
    /// `k/6` starts segment `k`. Anything at or past `5/6`, including a full
    /// turn of 1.0, lands in [`ColorRange::PurpleToRed`]. The returned range
    /// progress is `progress * 6 - index` and is not clamped.
    pub fn from_progress(progress: f64) -> (f64, ColorRange) {
        let range = (1..6u8)
            .find(|&k| progress < f64::from(f32::from(k) / 6.0))
            .map_or(ColorRange::PurpleToRed, |k| Self::ALL[usize::from(k - 1)]);

        (progress * 6.0 - f64::from(range.index()), range)
    }

    /// Fully saturated color at `range_progress` within this segment.
    ///
    /// Ramped channels are rounded to the nearest integer and clamped to the
    /// 8-bit range.
    pub fn color(self, range_progress: f64) -> Srgb<u8> {
        let up = ramp(range_progress);
        let down = ramp(1.0 - range_progress);

        let (red, green, blue) = match self {
            ColorRange::RedToYellow => (255, up, 0),
            ColorRange::YellowToGreen => (down, 255, 0),
            ColorRange::GreenToCyan => (0, 255, up),
            ColorRange::CyanToBlue => (0, down, 255),
            ColorRange::BlueToPurple => (up, 0, 255),
            ColorRange::PurpleToRed => (255, 0, down),
        };

        Srgb::new(red, green, blue)
    }
}

/// Scales a unit progress onto a channel value.
#[inline]
fn ramp(progress: f64) -> u8 {
    libm::round(255.0 * progress).clamp(0.0, 255.0) as u8
}
