//! Platform abstraction layer
//!
//! The simulation never touches a sensor, a screen or a speaker directly.
//! Hosts plug those in through these traits:
//! - Motion samples (`MotionSource`)
//! - Frame drawing (`Renderer`)
//! - Hit sound (`AudioCue`)
//! - Drawable size (`ViewportProvider`)

pub mod headless;

use glam::Vec2;
use serde::Serialize;

use crate::hud::Hud;
use crate::sim::{Attitude, LaserColor};

pub use headless::{FixedViewport, LogRenderer, LoggingCue, NoMotion, ScriptedMotion};

/// Delivers attitude samples while started
pub trait MotionSource {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_active(&self) -> bool;
    /// Latest sample, or `None` if the sensor has nothing to give
    fn sample(&mut self) -> Option<Attitude>;
}

/// Draws one frame of game state
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Plays the hit sound
pub trait AudioCue {
    /// Load `asset` so later plays start instantly
    fn prime(&mut self, asset: &str) -> Result<(), AudioError>;
    /// Rewind and play the primed asset at `volume` (0.0 - 1.0)
    fn play_from_start(&mut self, volume: f32);
}

/// Reports the current drawable size
pub trait ViewportProvider {
    fn size(&self) -> Vec2;
}

/// Why a sound asset could not be primed
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("sound asset not found: {asset}")]
    NotFound { asset: String },
    #[error("sound asset {asset} unreadable: {source}")]
    Unreadable {
        asset: String,
        #[source]
        source: std::io::Error,
    },
    #[error("sound asset {asset} is empty")]
    Empty { asset: String },
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub cat_pos: Vec2,
    pub cat_size: f32,
    pub laser_pos: Vec2,
    pub laser_radius: f32,
    pub laser_color: LaserColor,
    pub hud: Hud,
}
