//! Headless collaborators for the native binary and tests

use std::path::Path;

use glam::Vec2;

use super::{AudioCue, AudioError, Frame, MotionSource, Renderer, ViewportProvider};
use crate::sim::Attitude;

/// Replays a fixed list of samples
#[derive(Debug, Clone, Default)]
pub struct ScriptedMotion {
    samples: Vec<Attitude>,
    cursor: usize,
    looping: bool,
    active: bool,
}

impl ScriptedMotion {
    /// Play `samples` once, then report nothing
    pub fn once(samples: Vec<Attitude>) -> Self {
        Self {
            samples,
            ..Default::default()
        }
    }

    /// Play `samples` forever
    pub fn looping(samples: Vec<Attitude>) -> Self {
        Self {
            samples,
            looping: true,
            ..Default::default()
        }
    }

    /// A device lying flat on the table
    pub fn level() -> Self {
        Self::looping(vec![Attitude::LEVEL])
    }
}

impl MotionSource for ScriptedMotion {
    fn start(&mut self) {
        self.active = true;
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn sample(&mut self) -> Option<Attitude> {
        if !self.active || self.samples.is_empty() {
            return None;
        }
        if self.cursor >= self.samples.len() {
            if !self.looping {
                return None;
            }
            self.cursor = 0;
        }
        let sample = self.samples[self.cursor];
        self.cursor += 1;
        Some(sample)
    }
}

/// A device without motion hardware
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMotion;

impl MotionSource for NoMotion {
    fn start(&mut self) {
        log::warn!("Motion sensor unavailable - cat will not move");
    }

    fn stop(&mut self) {}

    fn is_active(&self) -> bool {
        false
    }

    fn sample(&mut self) -> Option<Attitude> {
        None
    }
}

/// Logs frames at trace level and keeps the last one
#[derive(Debug, Clone, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub last: Option<Frame>,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        log::trace!(
            "frame {}: cat ({:.1}, {:.1}) laser ({:.1}, {:.1}) {} | {}",
            self.frames,
            frame.cat_pos.x,
            frame.cat_pos.y,
            frame.laser_pos.x,
            frame.laser_pos.y,
            frame.laser_color.as_str(),
            frame.hud
        );
        self.last = Some(frame.clone());
    }
}

/// Checks that the asset exists, then counts plays instead of making noise
#[derive(Debug, Clone, Default)]
pub struct LoggingCue {
    pub asset: Option<String>,
    pub plays: u32,
}

impl AudioCue for LoggingCue {
    fn prime(&mut self, asset: &str) -> Result<(), AudioError> {
        let path = Path::new(asset);
        let meta = std::fs::metadata(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AudioError::NotFound {
                    asset: asset.to_string(),
                }
            } else {
                AudioError::Unreadable {
                    asset: asset.to_string(),
                    source,
                }
            }
        })?;
        if meta.len() == 0 {
            return Err(AudioError::Empty {
                asset: asset.to_string(),
            });
        }
        self.asset = Some(asset.to_string());
        Ok(())
    }

    fn play_from_start(&mut self, volume: f32) {
        self.plays += 1;
        log::debug!(
            "play {} at volume {:.2}",
            self.asset.as_deref().unwrap_or("<none>"),
            volume
        );
    }
}

/// A viewport that never resizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub Vec2);

impl Default for FixedViewport {
    fn default() -> Self {
        let (w, h) = crate::consts::DEFAULT_VIEWPORT;
        Self(Vec2::new(w, h))
    }
}

impl ViewportProvider for FixedViewport {
    fn size(&self) -> Vec2 {
        self.0
    }
}
