//! Laser Cat - tilt the device, chase the dot
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, hit/respawn, scoring)
//! - `platform`: Motion, renderer, audio and viewport seams
//! - `session`: Drives the simulation from a motion source
//! - `settings`: Data-driven game tuning
//! - `hud`: Score/mode text shown over the playfield

pub mod audio;
pub mod hud;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use hud::Hud;
pub use session::Session;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Motion sample rate (Hz)
    pub const SAMPLE_HZ: f32 = 60.0;
    /// Seconds between motion samples
    pub const SAMPLE_DT: f32 = 1.0 / SAMPLE_HZ;

    /// Cat icon edge length (pixels)
    pub const CAT_SIZE: f32 = 60.0;
    /// Laser dot radius (pixels)
    pub const LASER_RADIUS: f32 = 20.0;
    /// Extra spacing between the laser and the viewport edge
    pub const SPAWN_MARGIN: f32 = 10.0;

    /// Tilt multiplier shared by both movement modes
    pub const SENSITIVITY: f32 = 1.0;
    /// Pixels of aim offset per radian of tilt (seeking mode)
    pub const SEEK_SCALE: f32 = 300.0;
    /// Pixels per tick of velocity per radian of tilt (velocity mode)
    pub const VELOCITY_SCALE: f32 = 40.0;
    /// Per-tick smoothing/attenuation factor, in (0, 1)
    pub const DAMPING: f32 = 0.15;

    /// Post-hit lock window before the laser respawns (seconds)
    pub const RESPAWN_DELAY: f32 = 0.5;

    /// Default viewport for headless runs
    pub const DEFAULT_VIEWPORT: (f32, f32) = (390.0, 844.0);
}

/// Clamp a point into `[margin, size - margin]` on each axis.
///
/// If the viewport is narrower than twice the margin the axis collapses to
/// its center instead of inverting the range.
#[inline]
pub fn clamp_to_bounds(pos: Vec2, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        clamp_axis(pos.x, size.x, margin),
        clamp_axis(pos.y, size.y, margin),
    )
}

#[inline]
fn clamp_axis(value: f32, extent: f32, margin: f32) -> f32 {
    let lo = margin;
    let hi = extent - margin;
    if lo > hi {
        extent / 2.0
    } else {
        value.clamp(lo, hi)
    }
}
