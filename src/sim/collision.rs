//! Cat/laser contact detection
//!
//! Both shapes are treated as circles, but the threshold only counts half of
//! the laser radius. The cat has to cover most of the dot, not just graze it.

use glam::Vec2;

/// Result of a cat/laser contact check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactResult {
    /// Whether this check counts as a new hit
    pub hit: bool,
    /// Center-to-center distance
    pub distance: f32,
    /// Distance below which the shapes count as touching
    pub threshold: f32,
}

impl ContactResult {
    /// Shapes overlap, whether or not the laser is locked
    pub fn overlapping(&self) -> bool {
        self.distance < self.threshold
    }
}

/// Contact distance: `cat_size / 2 + laser_radius * 0.5`
#[inline]
pub fn hit_threshold(cat_size: f32, laser_radius: f32) -> f32 {
    cat_size / 2.0 + laser_radius * 0.5
}

/// Check whether the cat at `cat_pos` scores on the laser.
///
/// A locked laser never reports a hit, even while overlapping.
pub fn cat_laser_contact(
    cat_pos: Vec2,
    cat_size: f32,
    laser_pos: Vec2,
    laser_radius: f32,
    locked: bool,
) -> ContactResult {
    let distance = cat_pos.distance(laser_pos);
    let threshold = hit_threshold(cat_size, laser_radius);

    let mut result = ContactResult {
        hit: false,
        distance,
        threshold,
    };
    result.hit = !locked && result.overlapping();
    result
}
