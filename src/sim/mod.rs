//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - No rendering, audio or sensor dependencies

pub mod collision;
pub mod motion;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;
pub mod tuning;

pub use collision::{ContactResult, cat_laser_contact, hit_threshold};
pub use motion::{Attitude, MovementMode, update_position};
pub use score::{NO_AVERAGE, ScoreTracker, format_average};
pub use spawn::{placement_bounds, random_position};
pub use state::{Cat, Deferred, GameEvent, GameState, Laser, LaserColor};
pub use tick::{TickInput, autopilot_attitude, tick};
pub use timer::Timers;
pub use tuning::Tuning;
