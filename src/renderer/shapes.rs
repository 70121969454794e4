//! Triangle tessellation for 2D primitives
//!
//! Output vertices are in field coordinates; the pipeline maps them to NDC.

use std::f64::consts::TAU;

use glam::DVec2;

use super::frame::Color;
use super::vertex::Vertex;

/// Segments used for a circle of radius 10 or less
const MIN_CIRCLE_SEGMENTS: u32 = 24;
/// Upper bound on circle segments
const MAX_CIRCLE_SEGMENTS: u32 = 96;

/// Segment count giving roughly 2.5 field units per edge
pub fn circle_segments(radius: f64) -> u32 {
    ((TAU * radius / 2.5).ceil() as u32).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

/// Filled circle as a triangle fan expanded to a triangle list
pub fn circle(center: DVec2, radius: f64, color: Color, out: &mut Vec<Vertex>) {
    let segments = circle_segments(radius);
    out.reserve(segments as usize * 3);

    let rim = |i: u32| {
        let angle = i as f64 / segments as f64 * TAU;
        Vertex::from_field(center + radius * DVec2::from_angle(angle), color)
    };

    let hub = Vertex::from_field(center, color);
    for i in 0..segments {
        out.push(hub);
        out.push(rim(i));
        out.push(rim(i + 1));
    }
}

/// Axis-aligned filled rectangle (two triangles)
pub fn rect(origin: DVec2, size: DVec2, color: Color, out: &mut Vec<Vertex>) {
    let far = origin + size;
    let corner = |x: f64, y: f64| Vertex::from_field(DVec2::new(x, y), color);

    out.extend_from_slice(&[
        corner(origin.x, origin.y),
        corner(far.x, origin.y),
        corner(far.x, far.y),
        corner(origin.x, origin.y),
        corner(far.x, far.y),
        corner(origin.x, far.y),
    ]);
}
