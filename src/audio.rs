//! Hit sound playback
//!
//! Wraps whatever [`AudioCue`] the host provides with volume/mute handling.
//! A missing or broken asset only costs the sound, never the hit.

use crate::platform::AudioCue;

/// Audio manager for the game
pub struct HitAudio<C: AudioCue> {
    cue: C,
    primed: bool,
    master_volume: f32,
    muted: bool,
}

impl<C: AudioCue> HitAudio<C> {
    pub fn new(cue: C) -> Self {
        Self {
            cue,
            primed: false,
            master_volume: 0.8,
            muted: false,
        }
    }

    /// Load the hit sound, if one is configured.
    ///
    /// Returns whether a sound is ready to play.
    pub fn prime(&mut self, asset: Option<&str>) -> bool {
        self.primed = match asset {
            Some(asset) => match self.cue.prime(asset) {
                Ok(()) => {
                    log::info!("Hit sound ready: {asset}");
                    true
                }
                Err(err) => {
                    log::warn!("{err} - hits will be silent");
                    false
                }
            },
            None => false,
        };
        self.primed
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Play the hit sound from the start; silent if unprimed or muted
    pub fn play_hit(&mut self) {
        let vol = self.effective_volume();
        if !self.primed || vol <= 0.0 {
            return;
        }
        self.cue.play_from_start(vol);
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    pub fn cue(&self) -> &C {
        &self.cue
    }
}
