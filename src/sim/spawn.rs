//! Random laser placement

use glam::Vec2;
use rand::Rng;

/// Inclusive per-axis range a laser center may occupy.
///
/// Each axis spans `[radius + margin + padding, size - radius - margin -
/// padding]`. Axes too small to hold that range collapse to their center.
pub fn placement_bounds(size: Vec2, radius: f32, margin: f32, padding: f32) -> (Vec2, Vec2) {
    let inset = radius + margin + padding;
    let axis = |extent: f32| {
        let lo = inset;
        let hi = extent - inset;
        if lo > hi {
            (extent / 2.0, extent / 2.0)
        } else {
            (lo, hi)
        }
    };

    let (x_lo, x_hi) = axis(size.x);
    let (y_lo, y_hi) = axis(size.y);
    (Vec2::new(x_lo, y_lo), Vec2::new(x_hi, y_hi))
}

/// Uniform random position inside [`placement_bounds`], each axis drawn
/// independently
pub fn random_position<R: Rng>(
    rng: &mut R,
    size: Vec2,
    radius: f32,
    margin: f32,
    padding: f32,
) -> Vec2 {
    let (lo, hi) = placement_bounds(size, radius, margin, padding);
    Vec2::new(rng.random_range(lo.x..=hi.x), rng.random_range(lo.y..=hi.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_bounds_inset() {
        let (lo, hi) = placement_bounds(Vec2::new(400.0, 800.0), 20.0, 10.0, 60.0);
        assert_eq!(lo, Vec2::new(90.0, 90.0));
        assert_eq!(hi, Vec2::new(310.0, 710.0));
    }

    #[test]
    fn test_narrow_axis_collapses_to_center() {
        let (lo, hi) = placement_bounds(Vec2::new(100.0, 800.0), 20.0, 10.0, 60.0);
        assert_eq!(lo.x, 50.0);
        assert_eq!(hi.x, 50.0);
        assert_eq!(lo.y, 90.0);
    }

    #[test]
    fn test_positions_stay_inside() {
        let mut rng = Pcg32::seed_from_u64(7);
        let size = Vec2::new(390.0, 844.0);
        let (lo, hi) = placement_bounds(size, 20.0, 10.0, 60.0);
        for _ in 0..1000 {
            let p = random_position(&mut rng, size, 20.0, 10.0, 60.0);
            assert!(p.x >= lo.x && p.x <= hi.x);
            assert!(p.y >= lo.y && p.y <= hi.y);
        }
    }
}
