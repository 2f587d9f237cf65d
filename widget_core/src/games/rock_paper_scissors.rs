//! Rock-paper-scissors against a uniformly random bot.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::score::{RoundOutcome, Score};

/// A throwable hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors)
                | (Hand::Scissors, Hand::Paper)
                | (Hand::Paper, Hand::Rock)
        )
    }

    /// Draw a hand uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hand::Rock => write!(f, "Rock"),
            Hand::Paper => write!(f, "Paper"),
            Hand::Scissors => write!(f, "Scissors"),
        }
    }
}

/// Everything the UI needs to narrate one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player: Hand,
    pub bot: Hand,
    pub outcome: RoundOutcome,
}

/// Score-keeping rock-paper-scissors session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RockPaperScissors {
    score: Score,
}

impl RockPaperScissors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Play a round against a randomly drawn bot hand.
    pub fn play<R: Rng>(&mut self, player: Hand, rng: &mut R) -> RoundResult {
        let bot = Hand::random(rng);
        self.play_against(player, bot)
    }

    /// The deterministic core: resolve a round against a known bot hand and
    /// record it. Exactly one score counter increments per call.
    pub fn play_against(&mut self, player: Hand, bot: Hand) -> RoundResult {
        let outcome = if player == bot {
            RoundOutcome::Tie
        } else if player.beats(bot) {
            RoundOutcome::Win
        } else {
            RoundOutcome::Loss
        };
        self.score.record(outcome);
        RoundResult { player, bot, outcome }
    }

    /// Scores persist for the session; resetting is always explicit.
    pub fn reset_score(&mut self) {
        self.score.reset();
    }
}
