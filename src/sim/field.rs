//! Procedural obstacle field
//!
//! Obstacles sit in horizontal bands `BAND_SPACING` apart. The band index plus
//! how many bands have already scrolled past picks a repeatable horizontal
//! position, so the whole field is a pure function of the scroll offset.

use glam::DVec2;

use crate::consts::*;

/// Scale applied to `sin(seed)` before taking the fractional part
const SCATTER: f64 = 10_000.0;

/// Repeatable value in `[0, 1)` for an integer seed.
///
/// Not statistically strong; it only needs to look scattered.
#[inline]
pub fn pseudo_random(seed: i64) -> f64 {
    let v = (seed as f64).sin() * SCATTER;
    let frac = v - v.floor();
    // A tiny negative `v` rounds `v - floor(v)` up to exactly 1.0
    if frac >= 1.0 { 0.0 } else { frac }
}

/// Number of bands scrolled past at `scroll_offset`
#[inline]
pub fn group_offset(scroll_offset: f64) -> i64 {
    (scroll_offset / BAND_SPACING).floor() as i64
}

/// Obstacle centers for the given scroll offset.
///
/// Always `OBSTACLE_COUNT + 2` entries so the field stays full while a band
/// crosses the top or bottom edge. Low indices start below the visible area.
pub fn build_field(scroll_offset: f64) -> Vec<DVec2> {
    let group = group_offset(scroll_offset);
    let band_y = scroll_offset % BAND_SPACING;

    (0..OBSTACLE_COUNT + 2)
        .map(|i| {
            let x = GAME_SIZE * pseudo_random(i as i64 + group);
            let y = GAME_SIZE + band_y - BAND_SPACING * i as f64;
            DVec2::new(x, y)
        })
        .collect()
}
