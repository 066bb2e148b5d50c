//! Integration tests for colors module

mod common;
use common::*;

use palette::Srgb;
use simple_ring_picker::{colors, resolve_color};

#[test]
fn to_float_scales_channels() {
    let color = colors::to_float(Srgb::new(255, 0, 51));
    assert!((color.red - 1.0).abs() < 1e-6);
    assert!(color.green.abs() < 1e-6);
    assert!((color.blue - 0.2).abs() < 1e-6);
}

#[test]
fn sector_hue_follows_the_wheel() {
    for sector in 0..SECTORS {
        let expected = 360.0 / SECTORS as f32 * sector as f32;
        let hue = colors::hue_degrees(resolve_color(sector, 0, SECTORS, TRACKS));
        assert!(
            (hue - expected).abs() < 0.5,
            "sector {} has hue {}, expected {}",
            sector,
            hue,
            expected
        );
    }
}

#[test]
fn tracks_keep_hue_and_saturation() {
    for sector in [1, 5, 9, 13, 17, 21] {
        let outer = colors::hsv_of(resolve_color(sector, 0, SECTORS, TRACKS));
        for track in 1..TRACKS {
            let inner = colors::hsv_of(resolve_color(sector, track, SECTORS, TRACKS));
            let drift = (inner.hue.into_positive_degrees() - outer.hue.into_positive_degrees()).abs();
            assert!(drift < 1.0, "sector {} hue drifted {} at track {}", sector, drift, track);
            assert!((inner.saturation - 1.0).abs() < 1e-6);
        }
    }
}

#[test]
fn track_value_fades_to_half_brightness() {
    for track in 0..TRACKS {
        let expected = 1.0 - 0.5 * track as f32 / TRACKS as f32;
        let value = colors::hsv_of(resolve_color(3, track, SECTORS, TRACKS)).value;
        assert!(
            (value - expected).abs() < 0.005,
            "track {} has value {}, expected {}",
            track,
            value,
            expected
        );
    }
}
