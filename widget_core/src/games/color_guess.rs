//! Color guessing: pick the secretly chosen color by name.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorGuessOutcome {
    /// Right color; the round is over.
    Correct,
    /// Wrong color; keep trying.
    Wrong,
    /// No round is active; the guess was ignored.
    Inactive,
}

/// A round of the color guessing game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGuess {
    choices: Vec<String>,
    target: usize,
    active: bool,
}

impl ColorGuess {
    /// Start a round with a uniformly drawn target.
    /// Returns None for an empty choice list.
    pub fn start<R: Rng>(choices: Vec<String>, rng: &mut R) -> Option<Self> {
        if choices.is_empty() {
            return None;
        }
        let target = rng.gen_range(0..choices.len());
        Some(Self {
            choices,
            target,
            active: true,
        })
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The answer, revealed once the round ends.
    pub fn target(&self) -> Option<&str> {
        if self.active {
            None
        } else {
            Some(&self.choices[self.target])
        }
    }

    /// Guess a color by name. A correct guess ends the round.
    pub fn guess(&mut self, color: &str) -> ColorGuessOutcome {
        if !self.active {
            return ColorGuessOutcome::Inactive;
        }
        if color == self.choices[self.target] {
            self.active = false;
            ColorGuessOutcome::Correct
        } else {
            ColorGuessOutcome::Wrong
        }
    }

    /// Redraw the target and reactivate the round.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.target = rng.gen_range(0..self.choices.len());
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn colors() -> Vec<String> {
        ["red", "blue", "green", "yellow"].map(String::from).to_vec()
    }

    #[test]
    fn test_round_ends_on_correct_guess() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = ColorGuess::start(colors(), &mut rng).unwrap();
        assert_eq!(game.target(), None);

        let answer = colors()
            .into_iter()
            .find(|color| {
                let mut probe = game.clone();
                probe.guess(color) == ColorGuessOutcome::Correct
            })
            .unwrap();

        for color in game.choices().to_vec() {
            if color != answer {
                assert_eq!(game.guess(&color), ColorGuessOutcome::Wrong);
            }
        }
        assert_eq!(game.guess(&answer), ColorGuessOutcome::Correct);
        assert!(!game.is_active());
        assert_eq!(game.target(), Some(answer.as_str()));
        assert_eq!(game.guess(&answer), ColorGuessOutcome::Inactive);
    }

    #[test]
    fn test_empty_choices() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(ColorGuess::start(Vec::new(), &mut rng).is_none());
    }

    #[test]
    fn test_restart_reactivates() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = ColorGuess::start(colors(), &mut rng).unwrap();
        while game.is_active() {
            for color in game.choices().to_vec() {
                game.guess(&color);
            }
        }
        game.restart(&mut rng);
        assert!(game.is_active());
    }
}
