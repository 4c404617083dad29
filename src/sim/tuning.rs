//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a settings file can
//! override it without touching the movement or collision code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Numeric knobs for movement, collision and respawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Tilt multiplier shared by both movement modes
    pub sensitivity: f32,
    /// Aim offset per radian of tilt (seeking mode)
    pub seek_scale: f32,
    /// Velocity per radian of tilt (velocity mode)
    pub velocity_scale: f32,
    /// Per-tick smoothing factor in (0, 1)
    pub damping: f32,
    /// Cat icon edge length
    pub cat_size: f32,
    /// Laser dot radius
    pub laser_radius: f32,
    /// Extra gap between a spawned laser and the viewport edge
    pub spawn_margin: f32,
    /// Seconds the laser stays locked after a hit
    pub respawn_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sensitivity: SENSITIVITY,
            seek_scale: SEEK_SCALE,
            velocity_scale: VELOCITY_SCALE,
            damping: DAMPING,
            cat_size: CAT_SIZE,
            laser_radius: LASER_RADIUS,
            spawn_margin: SPAWN_MARGIN,
            respawn_delay: RESPAWN_DELAY,
        }
    }
}

impl Tuning {
    /// Distance the cat center keeps from every viewport edge
    #[inline]
    pub fn cat_margin(&self) -> f32 {
        self.cat_size / 2.0
    }

    /// Padding added around spawned lasers so they keep clear of the cat's
    /// reach near the edges
    #[inline]
    pub fn spawn_padding(&self) -> f32 {
        self.cat_size
    }

    /// Pixels of seeking aim per radian of tilt
    #[inline]
    pub fn seek_gain(&self) -> f32 {
        self.sensitivity * self.seek_scale
    }

    /// Pixels per tick of velocity per radian of tilt
    #[inline]
    pub fn velocity_gain(&self) -> f32 {
        self.sensitivity * self.velocity_scale
    }
}
