//! Circle-circle collision detection

use glam::DVec2;

/// True when two circles of the given radii overlap.
///
/// Touching circles (distance exactly equal to the sum of radii) do not count.
#[inline]
pub fn circles_overlap(a: DVec2, a_radius: f64, b: DVec2, b_radius: f64) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Index of the first obstacle that overlaps the player, if any
pub fn first_hit(player: DVec2, obstacles: &[DVec2], radius: f64) -> Option<usize> {
    obstacles
        .iter()
        .position(|&o| circles_overlap(player, radius, o, radius))
}
