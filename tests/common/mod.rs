//! Shared test infrastructure for simple-ring-picker integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use simple_ring_picker::{ColorSink, DiscGeometry, RingPicker, RingPickerBuilder};

// ============================================================================
// Mock Sink
// ============================================================================

/// Mock sink that records every picked color
pub struct MockSink {
    last_color: Option<Srgb<u8>>,
    color_history: heapless::Vec<Srgb<u8>, 64>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            last_color: None,
            color_history: heapless::Vec::new(),
        }
    }

    pub fn last_color(&self) -> Option<Srgb<u8>> {
        self.last_color
    }

    pub fn color_history(&self) -> &[Srgb<u8>] {
        &self.color_history
    }
}

impl ColorSink for MockSink {
    fn picked_color(&mut self, color: Srgb<u8>) {
        self.last_color = Some(color);
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub const SIZE: f32 = 280.0;
pub const RADIUS: f32 = 140.0;
pub const TRACK_WIDTH: f32 = 20.0;
pub const TRACKS: u32 = 5;
pub const SECTORS: u32 = 24;

/// The default 5x24 ring in a 280px control
pub fn default_geometry() -> DiscGeometry {
    DiscGeometry::new(RADIUS, TRACK_WIDTH, TRACKS, SECTORS).unwrap()
}

/// A picker with the default ring, already sized
pub fn default_picker() -> RingPicker<MockSink> {
    RingPickerBuilder::new().size(SIZE).build(MockSink::new()).unwrap()
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Point at `radius` from the disc center, `degrees` clockwise from +x on screen
pub fn polar_point(degrees: f32, radius: f32) -> (f32, f32) {
    let radians = degrees.to_radians();
    (RADIUS + radius * radians.cos(), RADIUS + radius * radians.sin())
}

/// Channels as an array, for per-channel comparisons
pub fn channels(color: Srgb<u8>) -> [u8; 3] {
    [color.red, color.green, color.blue]
}
