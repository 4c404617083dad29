//! Deferred actions keyed on the simulation clock
//!
//! `schedule(delay, payload)` stands in for a platform dispatcher's
//! "run this later". Due alarms come back out of [`Timers::drain_due`] in
//! due-time order, ties broken by scheduling order.

use serde::{Deserialize, Serialize};

/// A pending alarm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm<T> {
    /// Clock time (seconds) at which the alarm fires
    pub due: f64,
    seq: u64,
    pub payload: T,
}

/// Set of pending alarms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timers<T> {
    pending: Vec<Alarm<T>>,
    next_seq: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `payload` once the clock reaches `now + delay`
    pub fn schedule(&mut self, now: f64, delay: f64, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Alarm {
            due: now + delay.max(0.0),
            seq,
            payload,
        });
    }

    /// Remove and return every alarm due at or before `now`
    pub fn drain_due(&mut self, now: f64) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|alarm| alarm.due <= now);
        self.pending = pending;

        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|alarm| alarm.payload).collect()
    }

    /// Drop every pending alarm
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Earliest pending due time
    pub fn next_due(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|alarm| alarm.due)
            .min_by(|a, b| a.total_cmp(b))
    }
}
