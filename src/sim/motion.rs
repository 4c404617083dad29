//! Tilt-to-position mapping
//!
//! Two movement models share the same inputs:
//! - Seeking: tilt picks an aim point, the cat eases toward it each tick
//! - Velocity: tilt is a per-tick displacement, so tilt magnitude sets speed
//!
//! Both clamp the result so the cat never leaves the viewport.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tuning::Tuning;
use crate::clamp_to_bounds;

/// One device orientation sample (radians)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attitude {
    /// Forward/back tilt, drives the vertical axis
    pub pitch: f32,
    /// Left/right tilt, drives the horizontal axis
    pub roll: f32,
}

impl Attitude {
    /// Device lying flat
    pub const LEVEL: Self = Self {
        pitch: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f32, roll: f32) -> Self {
        Self { pitch, roll }
    }

    /// Screen-space tilt vector: roll on x, pitch on y
    #[inline]
    pub fn tilt(&self) -> Vec2 {
        Vec2::new(self.roll, self.pitch)
    }

    /// Both angles are real numbers (no NaN or infinity)
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.roll.is_finite()
    }

    /// Inverse of [`Attitude::tilt`]
    #[inline]
    pub fn from_tilt(tilt: Vec2) -> Self {
        Self {
            pitch: tilt.y,
            roll: tilt.x,
        }
    }
}

/// Which movement model drives the cat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementMode {
    /// Menu is showing, nothing moves
    #[default]
    Unselected,
    /// Easy: ease toward a tilt-derived aim point
    Seeking,
    /// Difficult: tilt is velocity
    Velocity,
}

impl MovementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementMode::Unselected => "Menu",
            MovementMode::Seeking => "Easy",
            MovementMode::Velocity => "Difficult",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "seeking" | "seek" => Some(MovementMode::Seeking),
            "difficult" | "hard" | "velocity" => Some(MovementMode::Velocity),
            "menu" | "none" | "unselected" => Some(MovementMode::Unselected),
            _ => None,
        }
    }

    /// True once a mode has been picked from the menu
    pub fn is_playing(&self) -> bool {
        !matches!(self, MovementMode::Unselected)
    }
}

/// Aim point for seeking mode: viewport center offset by the tilt
#[inline]
pub fn seek_aim(viewport: Vec2, attitude: Attitude, tuning: &Tuning) -> Vec2 {
    viewport / 2.0 + attitude.tilt() * tuning.seek_gain()
}

/// One exponential-smoothing step toward `aim`
#[inline]
pub fn seek_step(prev: Vec2, aim: Vec2, damping: f32) -> Vec2 {
    prev + (aim - prev) * damping
}

/// Undamped per-tick velocity for velocity mode
#[inline]
pub fn tilt_velocity(attitude: Attitude, tuning: &Tuning) -> Vec2 {
    attitude.tilt() * tuning.velocity_gain()
}

/// One velocity-mode step: the damped velocity is added directly
#[inline]
pub fn velocity_step(prev: Vec2, velocity: Vec2, damping: f32) -> Vec2 {
    prev + velocity * damping
}

/// Advance the cat by one sample.
///
/// Returns `prev` unchanged when no sample is available, the sample is not
/// finite, or no mode is selected.
pub fn update_position(
    prev: Vec2,
    attitude: Option<Attitude>,
    viewport: Vec2,
    mode: MovementMode,
    tuning: &Tuning,
) -> Vec2 {
    let Some(attitude) = attitude.filter(Attitude::is_finite) else {
        return prev;
    };

    let next = match mode {
        MovementMode::Unselected => return prev,
        MovementMode::Seeking => {
            let aim = seek_aim(viewport, attitude, tuning);
            seek_step(prev, aim, tuning.damping)
        }
        MovementMode::Velocity => {
            let velocity = tilt_velocity(attitude, tuning);
            velocity_step(prev, velocity, tuning.damping)
        }
    };

    clamp_to_bounds(next, viewport, tuning.cat_margin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(400.0, 800.0);

    #[test]
    fn test_seek_step_moves_fraction_of_gap() {
        let next = seek_step(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0), 0.15);
        assert!((next.x - 115.0).abs() < 1e-4);
        assert!((next.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_velocity_step_displacement() {
        let prev = Vec2::new(100.0, 100.0);
        let next = velocity_step(prev, Vec2::new(40.0, 0.0), 0.15);
        assert!(((next - prev).x - 6.0).abs() < 1e-4);
        assert_eq!((next - prev).y, 0.0);
    }

    #[test]
    fn test_level_device_seeks_center() {
        let tuning = Tuning::default();
        let aim = seek_aim(VIEWPORT, Attitude::LEVEL, &tuning);
        assert_eq!(aim, Vec2::new(200.0, 400.0));
    }

    #[test]
    fn test_roll_drives_x_and_pitch_drives_y() {
        let tuning = Tuning::default();
        let v = tilt_velocity(Attitude::new(0.5, -0.25), &tuning);
        assert!(v.x < 0.0);
        assert!(v.y > 0.0);
    }

    #[test]
    fn test_velocity_mode_level_device_holds() {
        let tuning = Tuning::default();
        let prev = Vec2::new(150.0, 300.0);
        let next = update_position(
            prev,
            Some(Attitude::LEVEL),
            VIEWPORT,
            MovementMode::Velocity,
            &tuning,
        );
        assert_eq!(next, prev);
    }

    #[test]
    fn test_missing_sample_holds_position() {
        let tuning = Tuning::default();
        let prev = Vec2::new(123.0, 456.0);
        for mode in [MovementMode::Seeking, MovementMode::Velocity] {
            assert_eq!(update_position(prev, None, VIEWPORT, mode, &tuning), prev);
        }
    }

    #[test]
    fn test_non_finite_sample_is_ignored() {
        let tuning = Tuning::default();
        let prev = Vec2::new(150.0, 300.0);
        let bad = [
            Attitude::new(f32::NAN, 0.1),
            Attitude::new(0.1, f32::NAN),
            Attitude::new(f32::INFINITY, 0.0),
            Attitude::new(0.0, f32::NEG_INFINITY),
        ];
        for mode in [MovementMode::Seeking, MovementMode::Velocity] {
            for attitude in bad {
                let next = update_position(prev, Some(attitude), VIEWPORT, mode, &tuning);
                assert_eq!(next, prev, "{mode:?} moved on {attitude:?}");
            }
        }
    }

    #[test]
    fn test_cat_recovers_after_nan_sample() {
        let tuning = Tuning::default();
        for mode in [MovementMode::Seeking, MovementMode::Velocity] {
            let mut pos = VIEWPORT / 2.0;
            pos = update_position(pos, Some(Attitude::new(f32::NAN, 0.1)), VIEWPORT, mode, &tuning);
            for _ in 0..60 {
                pos = update_position(pos, Some(Attitude::new(0.2, 0.2)), VIEWPORT, mode, &tuning);
            }
            assert!(pos.is_finite(), "{mode:?} ended at {pos:?}");
            assert!(pos.x >= tuning.cat_margin() && pos.x <= VIEWPORT.x - tuning.cat_margin());
            assert!(pos.y >= tuning.cat_margin() && pos.y <= VIEWPORT.y - tuning.cat_margin());
        }
    }

    #[test]
    fn test_unselected_never_moves() {
        let tuning = Tuning::default();
        let prev = Vec2::new(10.0, 10.0);
        let next = update_position(
            prev,
            Some(Attitude::new(1.0, 1.0)),
            VIEWPORT,
            MovementMode::Unselected,
            &tuning,
        );
        assert_eq!(next, prev);
    }

    #[test]
    fn test_hard_tilt_is_clamped() {
        let tuning = Tuning::default();
        let mut pos = VIEWPORT / 2.0;
        for _ in 0..500 {
            pos = update_position(
                pos,
                Some(Attitude::new(3.0, 3.0)),
                VIEWPORT,
                MovementMode::Velocity,
                &tuning,
            );
        }
        let margin = tuning.cat_margin();
        assert_eq!(pos, Vec2::new(VIEWPORT.x - margin, VIEWPORT.y - margin));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(MovementMode::from_str("Easy"), Some(MovementMode::Seeking));
        assert_eq!(MovementMode::from_str("velocity"), Some(MovementMode::Velocity));
        assert_eq!(MovementMode::from_str("menu"), Some(MovementMode::Unselected));
        assert_eq!(MovementMode::from_str("sideways"), None);
    }
}
