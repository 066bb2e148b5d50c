#!/usr/bin/env rust-script
//! Palette dump for simple-ring-picker
//!
//! Prints every cell of a ring as a hex color grid (one row per track, outer
//! track first) followed by the arc layout of each track. Handy for checking
//! a track/sector configuration before wiring it into a UI.
//!
//! Usage:
//!   cargo run --bin ring_palette_dump -- [tracks] [sectors] [track-width] [size]
//!
//! Defaults to the standard 5 x 24 ring, 20px tracks, in a 280px control.

use std::env;
use std::process::ExitCode;

use simple_ring_picker::{
    DEFAULT_COLOR_TRACK_WIDTH, DEFAULT_SECTORS_COUNT, DEFAULT_SELECTION_PADDING,
    DEFAULT_TRACKS_COUNT, DiscGeometry, GeometryError, arcs, colors,
};

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T, String> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("argument {} ({:?}) is not a valid number", index + 1, raw)),
        None => Ok(default),
    }
}

fn geometry_from_args() -> Result<DiscGeometry, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let tracks = arg(&args, 0, DEFAULT_TRACKS_COUNT)?;
    let sectors = arg(&args, 1, DEFAULT_SECTORS_COUNT)?;
    let width = arg(&args, 2, DEFAULT_COLOR_TRACK_WIDTH)?;
    let size: f32 = arg(&args, 3, 280.0)?;

    DiscGeometry::new(size / 2.0, width, tracks, sectors)
        .map_err(|err: GeometryError| err.to_string())
}

fn print_grid(geometry: DiscGeometry) {
    println!(
        "=== {} tracks x {} sectors ===",
        geometry.tracks_count(),
        geometry.sectors_count()
    );
    println!();

    let mut current_track = None;
    for arc in arcs(geometry, DEFAULT_SELECTION_PADDING) {
        if current_track != Some(arc.cell.track) {
            if current_track.is_some() {
                println!();
            }
            print!("track {:>2}:", arc.cell.track);
            current_track = Some(arc.cell.track);
        }
        let color = arc.color;
        print!(" #{:02x}{:02x}{:02x}", color.red, color.green, color.blue);
    }
    println!();
    println!();
}

fn print_hues(geometry: DiscGeometry) {
    println!("=== Outer track hues ===");
    println!();
    for arc in arcs(geometry, DEFAULT_SELECTION_PADDING).take(geometry.sectors_count() as usize) {
        println!(
            "sector {:>3}: start {:>7.2} deg, hue {:>7.2} deg",
            arc.cell.sector,
            arc.start_angle,
            colors::hue_degrees(arc.color)
        );
    }
    println!();
}

fn print_layout(geometry: DiscGeometry) {
    println!("=== Arc layout ===");
    println!();
    println!("radius {:.1}px, inner radius {:.1}px", geometry.radius(), geometry.inner_radius());
    for arc in arcs(geometry, DEFAULT_SELECTION_PADDING).step_by(geometry.sectors_count() as usize) {
        println!(
            "track {:>2}: inset {:>7.2}px, diameter {:>7.2}px, stroke {:>5.2}px",
            arc.cell.track, arc.inset, arc.diameter, arc.stroke_width
        );
    }
}

fn main() -> ExitCode {
    let geometry = match geometry_from_args() {
        Ok(geometry) => geometry,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    print_grid(geometry);
    print_hues(geometry);
    print_layout(geometry);
    ExitCode::SUCCESS
}
