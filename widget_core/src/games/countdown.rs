//! Countdown timer: a fixed-duration timer with start, pause, and reset.

use serde::{Deserialize, Serialize};

/// A countdown on the same logical-millisecond clock the timer queue uses.
///
/// The timer holds the remaining time and, while running, the instant it was
/// last observed. `tick(now)` folds elapsed time into the remainder; hitting
/// zero stops the timer, and a finished timer only restarts through `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTimer {
    duration_ms: u64,
    remaining_ms: u64,
    started_at: Option<u64>,
}

impl Default for CountdownTimer {
    /// The 30-second timer the games page ships with.
    fn default() -> Self {
        Self::new(30_000)
    }
}

impl CountdownTimer {
    /// A stopped timer with the full duration remaining.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            remaining_ms: duration_ms,
            started_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_ms == 0
    }

    /// Remaining time as of the last `tick`/`pause`.
    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Start (or resume) the countdown. Returns false when already running
    /// or already finished.
    pub fn start(&mut self, now: u64) -> bool {
        if self.is_running() || self.is_finished() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Freeze the remaining time. Returns false when not running.
    pub fn pause(&mut self, now: u64) -> bool {
        if !self.is_running() {
            return false;
        }
        self.tick(now);
        self.started_at = None;
        true
    }

    /// Advance the countdown to `now` and return the remaining time.
    /// Stops automatically when the remainder reaches zero.
    pub fn tick(&mut self, now: u64) -> u64 {
        if let Some(started_at) = self.started_at {
            let elapsed = now.saturating_sub(started_at);
            if elapsed >= self.remaining_ms {
                self.remaining_ms = 0;
                self.started_at = None;
            } else {
                self.remaining_ms -= elapsed;
                self.started_at = Some(now);
            }
        }
        self.remaining_ms
    }

    /// Back to the full duration, stopped.
    pub fn reset(&mut self) {
        self.remaining_ms = self.duration_ms;
        self.started_at = None;
    }
}
