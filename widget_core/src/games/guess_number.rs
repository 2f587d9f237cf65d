//! Guess-the-number: higher/lower hints against a hidden target.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Response to a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessFeedback {
    /// The target is higher than the guess.
    Higher,
    /// The target is lower than the guess.
    Lower,
    /// Solved, with the total number of guesses it took.
    Correct { attempts: u32 },
    /// The round already ended; the guess was ignored.
    AlreadyWon,
}

/// A single guess-the-number round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessNumber {
    target: u32,
    min: u32,
    max: u32,
    attempts: u32,
    solved: bool,
}

impl GuessNumber {
    /// Start a round with a uniformly drawn target in `min..=max`.
    /// Reversed bounds are swapped rather than rejected.
    pub fn start<R: Rng>(min: u32, max: u32, rng: &mut R) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            target: rng.gen_range(min..=max),
            min,
            max,
            attempts: 0,
            solved: false,
        }
    }

    /// Inclusive bounds the target was drawn from.
    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Check a guess. Guesses after the round is won are no-ops.
    pub fn guess(&mut self, value: u32) -> GuessFeedback {
        if self.solved {
            return GuessFeedback::AlreadyWon;
        }
        self.attempts += 1;

        match value.cmp(&self.target) {
            std::cmp::Ordering::Less => GuessFeedback::Higher,
            std::cmp::Ordering::Greater => GuessFeedback::Lower,
            std::cmp::Ordering::Equal => {
                self.solved = true;
                GuessFeedback::Correct { attempts: self.attempts }
            }
        }
    }

    /// Redraw the target and clear the attempt count.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::start(self.min, self.max, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    #[test]
    fn test_hints_point_toward_target() {
        let mut game = GuessNumber::start(1, 100, &mut rng());
        let (min, max) = game.bounds();
        let target = (min..=max)
            .find(|&candidate| {
                let mut probe = game.clone();
                probe.guess(candidate) == GuessFeedback::Correct { attempts: 1 }
            })
            .unwrap();

        if target > min {
            assert_eq!(game.guess(target - 1), GuessFeedback::Higher);
        }
        if target < max {
            assert_eq!(game.guess(target + 1), GuessFeedback::Lower);
        }

        let attempts = game.attempts() + 1;
        assert_eq!(game.guess(target), GuessFeedback::Correct { attempts });
        assert!(game.is_solved());
        assert_eq!(game.guess(target), GuessFeedback::AlreadyWon);
        assert_eq!(game.attempts(), attempts);
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let game = GuessNumber::start(10, 5, &mut rng());
        assert_eq!(game.bounds(), (5, 10));
    }

    #[test]
    fn test_reset_clears_attempts() {
        let mut game = GuessNumber::start(1, 10, &mut rng());
        game.guess(0);
        game.reset(&mut rng());
        assert_eq!(game.attempts(), 0);
        assert!(!game.is_solved());
    }
}
