//! Session driver
//!
//! Owns the game state and the host collaborators. Each motion sample runs
//! exactly one tick, then feedback goes out to audio and the renderer.

use crate::audio::HitAudio;
use crate::hud::Hud;
use crate::platform::{AudioCue, Frame, MotionSource, Renderer, ViewportProvider};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, MovementMode, TickInput, tick};

/// A running game bound to its motion source, renderer, audio and viewport
pub struct Session<M, R, A, V>
where
    M: MotionSource,
    R: Renderer,
    A: AudioCue,
    V: ViewportProvider,
{
    state: GameState,
    settings: Settings,
    motion: M,
    renderer: R,
    audio: HitAudio<A>,
    viewport: V,
    autopilot: bool,
}

impl<M, R, A, V> Session<M, R, A, V>
where
    M: MotionSource,
    R: Renderer,
    A: AudioCue,
    V: ViewportProvider,
{
    pub fn new(settings: Settings, seed: u64, motion: M, renderer: R, cue: A, viewport: V) -> Self {
        let state = GameState::new(seed, viewport.size(), settings.tuning);
        let mut audio = HitAudio::new(cue);
        audio.set_master_volume(settings.volume);
        audio.set_muted(settings.muted);

        Self {
            state,
            settings,
            motion,
            renderer,
            audio,
            viewport,
            autopilot: false,
        }
    }

    /// Steer toward the laser instead of following raw samples
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Leave the menu (or switch modes): reset and start the sensor feed
    pub fn select_mode(&mut self, mode: MovementMode) {
        if !mode.is_playing() {
            self.back_to_menu();
            return;
        }

        self.state.set_viewport(self.viewport.size());
        self.state.select_mode(mode);
        self.audio.prime(self.settings.hit_sound.as_deref());
        self.motion.start();
        self.render();
    }

    /// Stop the sensor feed and show the menu
    pub fn back_to_menu(&mut self) {
        self.motion.stop();
        self.state.select_mode(MovementMode::Unselected);
        self.render();
    }

    /// Handle one motion sample period
    pub fn step(&mut self) -> Vec<GameEvent> {
        self.state.set_viewport(self.viewport.size());

        let attitude = if self.motion.is_active() {
            self.motion.sample()
        } else {
            None
        };
        let input = TickInput {
            attitude,
            select_mode: None,
            autopilot: self.autopilot,
        };

        let events = tick(&mut self.state, &input, self.settings.sample_dt());
        for event in &events {
            if matches!(event, GameEvent::Hit { .. }) {
                self.audio.play_hit();
            }
        }

        self.render();
        events
    }

    /// Run `seconds` worth of samples, returning the number of hits scored
    pub fn run_for(&mut self, seconds: f32) -> u32 {
        let steps = (seconds * self.settings.sample_hz).round().max(0.0) as u64;
        let before = self.state.score.hits;
        for _ in 0..steps {
            self.step();
        }
        self.state.score.hits.saturating_sub(before)
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        Frame {
            cat_pos: self.state.cat.pos,
            cat_size: self.state.cat.size,
            laser_pos: self.state.laser.pos,
            laser_radius: self.state.laser.radius,
            laser_color: self.state.laser.color,
            hud: Hud::from_state(&self.state),
        }
    }

    fn render(&mut self) {
        let frame = self.frame();
        self.renderer.draw(&frame);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn motion(&self) -> &M {
        &self.motion
    }

    pub fn audio(&self) -> &HitAudio<A> {
        &self.audio
    }
}
