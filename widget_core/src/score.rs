//! Session score tracking shared by the mini-games.

use serde::{Deserialize, Serialize};

/// Result of a single round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Loss,
    Tie,
}

/// Win/loss/tie counters for one play session.
///
/// Counters only ever increase; [`Score::reset`] is the single explicit
/// exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Score {
    /// Create a fresh all-zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump exactly one counter for the given outcome.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win => self.wins += 1,
            RoundOutcome::Loss => self.losses += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
    }

    /// Total number of rounds recorded.
    pub fn total_rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_one_counter() {
        let mut score = Score::new();

        score.record(RoundOutcome::Win);
        assert_eq!(score, Score { wins: 1, losses: 0, ties: 0 });

        score.record(RoundOutcome::Loss);
        score.record(RoundOutcome::Tie);
        assert_eq!(score.total_rounds(), 3);
    }

    #[test]
    fn test_reset() {
        let mut score = Score::new();
        score.record(RoundOutcome::Win);
        score.reset();
        assert_eq!(score, Score::new());
    }
}
