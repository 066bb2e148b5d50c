//! Core types shared by the locator, resolver and picker.

/// A cell of the sector/track grid.
///
/// `sector` may equal the sector count: pointer angles that round up to a
/// full turn are clamped onto that index rather than wrapped to zero. The
/// resolver gives it the same color as sector 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridCell {
    /// Angular slice, counted clockwise from the positive x axis.
    pub sector: u32,

    /// Concentric ring, 0 being the outermost.
    pub track: u32,
}

impl GridCell {
    /// Creates a grid cell.
    #[inline]
    pub const fn new(sector: u32, track: u32) -> Self {
        Self { sector, track }
    }

    /// Wraps the full-turn sector back onto sector 0.
    ///
    /// Rendering only ever emits sectors `0..sectors_count`, so use this to
    /// find the drawn arc for a located cell.
    #[must_use]
    pub const fn normalized(self, sectors_count: u32) -> Self {
        if sectors_count == 0 || self.sector < sectors_count {
            self
        } else {
            Self {
                sector: self.sector % sectors_count,
                track: self.track,
            }
        }
    }
}

/// Kind of pointer event delivered by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerAction {
    /// Pointer pressed.
    Down,

    /// Pointer dragged while pressed.
    Move,

    /// Pointer released.
    Up,

    /// Gesture cancelled by the toolkit.
    Cancel,
}

impl PointerAction {
    /// Returns true for the actions that pick a color.
    #[inline]
    pub const fn picks(self) -> bool {
        matches!(self, PointerAction::Down | PointerAction::Move)
    }
}

/// A pointer sample in the control's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    /// Creates a pointer event.
    #[inline]
    pub const fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    /// Pointer-down at `(x, y)`.
    #[inline]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    /// Pointer-move at `(x, y)`.
    #[inline]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    /// Pointer-up at `(x, y)`.
    #[inline]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }
}

/// Disc configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Track count is zero.
    ZeroTracks,

    /// Sector count is zero.
    ZeroSectors,

    /// Track width is zero, negative or not finite.
    InvalidTrackWidth,

    /// Radius is negative or not finite.
    InvalidRadius,

    /// Selection padding is negative or not finite.
    InvalidSelectionPadding,
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GeometryError::ZeroTracks => {
                write!(f, "disc must have at least one track")
            }
            GeometryError::ZeroSectors => {
                write!(f, "disc must have at least one sector")
            }
            GeometryError::InvalidTrackWidth => {
                write!(f, "track width must be a finite, positive number of pixels")
            }
            GeometryError::InvalidRadius => {
                write!(f, "radius must be a finite, non-negative number of pixels")
            }
            GeometryError::InvalidSelectionPadding => {
                write!(
                    f,
                    "selection padding must be a finite, non-negative number of pixels"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}

/// Render pass errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// The output buffer cannot hold every arc of the disc.
    CapacityExceeded {
        /// Number of arcs the disc renders.
        required: usize,
        /// Capacity of the buffer.
        capacity: usize,
    },
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::CapacityExceeded { required, capacity } => {
                write!(
                    f,
                    "render buffer too small: disc has {} arcs, capacity is {}",
                    required, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {}
