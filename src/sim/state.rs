//! Game state and core simulation types
//!
//! A single owner holds every mutable field. Renderers read a snapshot after
//! each tick; nothing else writes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::motion::MovementMode;
use super::score::ScoreTracker;
use super::spawn::random_position;
use super::timer::Timers;
use super::tuning::Tuning;
use crate::clamp_to_bounds;

/// Laser feedback color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaserColor {
    /// Waiting to be caught (red)
    #[default]
    Idle,
    /// Just caught, inside the lock window (green)
    Hit,
}

impl LaserColor {
    /// Linear RGB for renderers
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            LaserColor::Idle => [1.0, 0.0, 0.0],
            LaserColor::Hit => [0.0, 1.0, 0.0],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LaserColor::Idle => "red",
            LaserColor::Hit => "green",
        }
    }
}

/// The player's cat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub pos: Vec2,
    /// Icon edge length
    pub size: f32,
}

/// The laser dot the cat chases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub pos: Vec2,
    pub radius: f32,
    pub color: LaserColor,
    /// Set for the post-hit window; blocks further hits
    pub locked: bool,
}

/// Work scheduled for later on the simulation clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// Move the laser somewhere new and unlock it
    Respawn,
}

/// Things that happened during a tick, for audio/visual feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mode was picked and the session reset
    ModeSelected(MovementMode),
    /// The cat caught the laser
    Hit {
        hits: u32,
        /// Seconds since the previous hit (None on the first)
        interval: Option<f64>,
    },
    /// The lock window ended and the laser moved
    Respawned { pos: Vec2 },
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Laser placement RNG
    #[serde(skip)]
    rng: Pcg32,
    /// Drawable area
    pub viewport: Vec2,
    /// Active movement model
    pub mode: MovementMode,
    pub cat: Cat,
    pub laser: Laser,
    pub score: ScoreTracker,
    /// Pending deferred actions
    pub timers: Timers<Deferred>,
    /// Simulation clock (seconds since mode selection)
    pub clock: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new game state sitting on the mode menu
    pub fn new(seed: u64, viewport: Vec2, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            mode: MovementMode::Unselected,
            cat: Cat {
                pos: viewport / 2.0,
                size: tuning.cat_size,
            },
            laser: Laser {
                pos: viewport / 2.0,
                radius: tuning.laser_radius,
                color: LaserColor::Idle,
                locked: false,
            },
            score: ScoreTracker::new(),
            timers: Timers::new(),
            clock: 0.0,
            time_ticks: 0,
            tuning,
        };

        state.place_laser();
        state
    }

    /// Start a fresh session in `mode`.
    ///
    /// Everything session-scoped resets: cat back to center, score cleared,
    /// pending respawns dropped, laser unlocked at a new spot.
    pub fn select_mode(&mut self, mode: MovementMode) {
        self.mode = mode;
        self.cat.pos = self.viewport / 2.0;
        self.score = ScoreTracker::new();
        self.timers.clear();
        self.clock = 0.0;
        self.time_ticks = 0;
        self.laser.color = LaserColor::Idle;
        self.laser.locked = false;
        self.place_laser();

        log::info!("Mode selected: {}", mode.as_str());
    }

    /// Move the laser to a fresh random spot (does not touch the lock)
    pub fn place_laser(&mut self) {
        self.laser.pos = random_position(
            &mut self.rng,
            self.viewport,
            self.laser.radius,
            self.tuning.spawn_margin,
            self.tuning.spawn_padding(),
        );
    }

    /// Lock window over: reset color, move, unlock
    pub fn respawn_laser(&mut self) {
        self.laser.color = LaserColor::Idle;
        self.place_laser();
        self.laser.locked = false;
        log::info!(
            "Laser respawned at ({:.0}, {:.0})",
            self.laser.pos.x,
            self.laser.pos.y
        );
    }

    /// Track a new drawable size, pulling both shapes back inside it
    pub fn set_viewport(&mut self, viewport: Vec2) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.cat.pos = clamp_to_bounds(self.cat.pos, viewport, self.tuning.cat_margin());
        self.laser.pos = clamp_to_bounds(
            self.laser.pos,
            viewport,
            self.laser.radius + self.tuning.spawn_margin,
        );
    }
}
