//! Hit count and average time between hits

use serde::{Deserialize, Serialize};

/// Placeholder shown while no average exists
pub const NO_AVERAGE: &str = "--";

/// Session scoring state. Only the hit handler writes to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    /// Number of hits this session
    pub hits: u32,
    /// Clock time (seconds) of the most recent hit
    pub last_hit: Option<f64>,
    /// Sum of all inter-hit intervals (seconds)
    pub total_interval: f64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit at clock time `now`.
    ///
    /// Returns the interval since the previous hit, or `None` for the first
    /// hit of the session.
    pub fn record_hit(&mut self, now: f64) -> Option<f64> {
        let interval = self.last_hit.map(|last| now - last);
        if let Some(interval) = interval {
            self.total_interval += interval;
        }
        self.hits += 1;
        self.last_hit = Some(now);
        interval
    }

    /// Mean seconds between hits, defined once there are two hits
    pub fn average(&self) -> Option<f64> {
        if self.hits > 1 {
            Some(self.total_interval / f64::from(self.hits - 1))
        } else {
            None
        }
    }

    /// Average formatted for the HUD
    pub fn average_text(&self) -> String {
        format_average(self.average())
    }
}

/// One decimal below ten seconds, whole seconds above, `--` when undefined
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) if avg < 10.0 => format!("{avg:.1} s"),
        Some(avg) => format!("{} s", avg.round() as i64),
        None => NO_AVERAGE.to_string(),
    }
}
