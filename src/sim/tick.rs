//! Per-sample simulation step
//!
//! One motion sample in, one tick out: due timers, cat movement, contact
//! check, then the hit handler.

use glam::Vec2;

use super::collision::cat_laser_contact;
use super::motion::{Attitude, MovementMode, update_position};
use super::state::{Deferred, GameEvent, GameState, LaserColor};

/// Largest tilt the autopilot will ever report (radians)
const AUTOPILOT_MAX_TILT: f32 = 1.0;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest motion sample; `None` when the sensor is unavailable
    pub attitude: Option<Attitude>,
    /// Pick a mode (resets the session before this tick runs)
    pub select_mode: Option<MovementMode>,
    /// Demo mode - steer toward the laser instead of using the sample.
    /// Still needs a sample to be present, so a dead sensor stays dead.
    pub autopilot: bool,
}

/// Advance the game state by one motion sample.
///
/// `dt` is the time since the previous sample, in seconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(mode) = input.select_mode {
        state.select_mode(mode);
        events.push(GameEvent::ModeSelected(mode));
    }

    // Menu showing, nothing runs
    if !state.mode.is_playing() {
        return events;
    }

    state.time_ticks += 1;
    state.clock += f64::from(dt);

    for deferred in state.timers.drain_due(state.clock) {
        match deferred {
            Deferred::Respawn => {
                state.respawn_laser();
                events.push(GameEvent::Respawned {
                    pos: state.laser.pos,
                });
            }
        }
    }

    let attitude = if input.autopilot {
        input.attitude.map(|_| autopilot_attitude(state))
    } else {
        input.attitude
    };

    state.cat.pos = update_position(
        state.cat.pos,
        attitude,
        state.viewport,
        state.mode,
        &state.tuning,
    );

    let contact = cat_laser_contact(
        state.cat.pos,
        state.cat.size,
        state.laser.pos,
        state.laser.radius,
        state.laser.locked,
    );
    if contact.hit {
        events.push(handle_hit(state));
    }

    events
}

/// Idle -> Hit: lock, flash, score, and schedule the respawn
fn handle_hit(state: &mut GameState) -> GameEvent {
    state.laser.locked = true;
    state.laser.color = LaserColor::Hit;

    let interval = state.score.record_hit(state.clock);
    state.timers.schedule(
        state.clock,
        f64::from(state.tuning.respawn_delay),
        Deferred::Respawn,
    );

    log::debug!(
        "Hit #{} at {:.2}s (interval {:?})",
        state.score.hits,
        state.clock,
        interval
    );

    GameEvent::Hit {
        hits: state.score.hits,
        interval,
    }
}

/// Tilt that moves the cat toward the laser under the current mode
pub fn autopilot_attitude(state: &GameState) -> Attitude {
    let tuning = &state.tuning;
    let tilt = match state.mode {
        MovementMode::Unselected => Vec2::ZERO,
        MovementMode::Seeking => {
            // Aim point lands on the laser
            let gain = tuning.seek_gain();
            if gain.abs() < f32::EPSILON {
                Vec2::ZERO
            } else {
                (state.laser.pos - state.viewport / 2.0) / gain
            }
        }
        MovementMode::Velocity => {
            // Cover the remaining gap in one step, capped by max tilt below
            let gain = tuning.velocity_gain() * tuning.damping;
            if gain.abs() < f32::EPSILON {
                Vec2::ZERO
            } else {
                (state.laser.pos - state.cat.pos) / gain
            }
        }
    };

    Attitude::from_tilt(tilt.clamp(
        Vec2::splat(-AUTOPILOT_MAX_TILT),
        Vec2::splat(AUTOPILOT_MAX_TILT),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SAMPLE_DT;
    use crate::sim::tuning::Tuning;

    fn playing(mode: MovementMode) -> GameState {
        let mut state = GameState::new(12345, Vec2::new(390.0, 844.0), Tuning::default());
        state.select_mode(mode);
        state
    }

    fn level() -> TickInput {
        TickInput {
            attitude: Some(Attitude::LEVEL),
            ..Default::default()
        }
    }

    #[test]
    fn test_menu_ignores_samples() {
        let mut state = GameState::new(1, Vec2::new(390.0, 844.0), Tuning::default());
        let start = state.cat.pos;
        let input = TickInput {
            attitude: Some(Attitude::new(1.0, 1.0)),
            ..Default::default()
        };
        let events = tick(&mut state, &input, SAMPLE_DT);
        assert!(events.is_empty());
        assert_eq!(state.cat.pos, start);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_select_mode_via_input() {
        let mut state = GameState::new(1, Vec2::new(390.0, 844.0), Tuning::default());
        let input = TickInput {
            select_mode: Some(MovementMode::Velocity),
            ..Default::default()
        };
        let events = tick(&mut state, &input, SAMPLE_DT);
        assert_eq!(events[0], GameEvent::ModeSelected(MovementMode::Velocity));
        assert_eq!(state.mode, MovementMode::Velocity);
    }

    #[test]
    fn test_sustained_overlap_scores_once() {
        let mut state = playing(MovementMode::Velocity);
        // Park the laser on the cat; a level device keeps the cat still
        state.laser.pos = state.cat.pos;

        let mut hits = 0;
        let ticks = (state.tuning.respawn_delay / SAMPLE_DT) as usize - 2;
        for _ in 0..ticks {
            for event in tick(&mut state, &level(), SAMPLE_DT) {
                if matches!(event, GameEvent::Hit { .. }) {
                    hits += 1;
                }
            }
        }

        assert_eq!(hits, 1);
        assert_eq!(state.score.hits, 1);
        assert!(state.laser.locked);
        assert_eq!(state.laser.color, LaserColor::Hit);
    }

    #[test]
    fn test_respawn_after_delay_unlocks() {
        let mut state = playing(MovementMode::Velocity);
        state.laser.pos = state.cat.pos;
        tick(&mut state, &level(), SAMPLE_DT);
        assert!(state.laser.locked);

        // Corner is out of reach of every spawn spot
        state.cat.pos = Vec2::splat(state.tuning.cat_margin());

        let mut respawned = None;
        for _ in 0..60 {
            for event in tick(&mut state, &level(), SAMPLE_DT) {
                if let GameEvent::Respawned { pos } = event {
                    respawned = Some(pos);
                }
            }
            if respawned.is_some() {
                break;
            }
        }

        let pos = respawned.expect("laser should respawn within a second");
        assert_eq!(pos, state.laser.pos);
        assert_eq!(state.laser.color, LaserColor::Idle);
        // Locked exactly for the delay window
        let hit_time = SAMPLE_DT as f64;
        assert!(state.clock - hit_time >= f64::from(state.tuning.respawn_delay) - 1e-6);
        assert!(state.clock - hit_time < f64::from(state.tuning.respawn_delay + SAMPLE_DT));
    }

    #[test]
    fn test_missing_sensor_keeps_cat_still() {
        let mut state = playing(MovementMode::Seeking);
        state.cat.pos = Vec2::new(100.0, 100.0);
        let input = TickInput {
            attitude: None,
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &input, SAMPLE_DT);
        }
        assert_eq!(state.cat.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_autopilot_catches_laser() {
        for mode in [MovementMode::Seeking, MovementMode::Velocity] {
            let mut state = playing(mode);
            let input = TickInput {
                attitude: Some(Attitude::LEVEL),
                autopilot: true,
                ..Default::default()
            };
            for _ in 0..(60 * 30) {
                tick(&mut state, &input, SAMPLE_DT);
            }
            assert!(state.score.hits >= 3, "{mode:?} only scored {}", state.score.hits);
            assert!(state.score.average().is_some());
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing(MovementMode::Seeking);
        let mut state2 = playing(MovementMode::Seeking);

        let inputs = [
            TickInput {
                attitude: Some(Attitude::new(0.2, -0.4)),
                ..Default::default()
            },
            TickInput {
                attitude: Some(Attitude::LEVEL),
                autopilot: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, SAMPLE_DT);
                tick(&mut state2, input, SAMPLE_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.cat, state2.cat);
        assert_eq!(state1.laser, state2.laser);
        assert_eq!(state1.score, state2.score);
    }
}
