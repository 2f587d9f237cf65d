//! Word scramble: unscramble a randomly picked word.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One scramble round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScramble {
    word: String,
    scrambled: String,
    solved: bool,
}

impl WordScramble {
    /// Pick a word uniformly from `words` and scramble it.
    /// Returns None for an empty word list.
    pub fn start<R: Rng>(words: &[String], rng: &mut R) -> Option<Self> {
        let word = words.choose(rng)?.clone();
        let scrambled = scramble(&word, rng);
        Some(Self {
            word,
            scrambled,
            solved: false,
        })
    }

    /// The shuffled letters shown to the player.
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    /// The answer, for reveal-after-solve UI.
    pub fn answer(&self) -> &str {
        &self.word
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Check a guess, ignoring case and surrounding whitespace. A correct
    /// guess finishes the round; further checks keep reporting true.
    pub fn check(&mut self, guess: &str) -> bool {
        if self.solved {
            return true;
        }
        if guess.trim().eq_ignore_ascii_case(&self.word) {
            self.solved = true;
        }
        self.solved
    }
}

/// Fisher-Yates shuffle of the word's characters, re-drawn so the scramble
/// differs from the word whenever the letters allow it.
fn scramble<R: Rng>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return word.to_string();
    }
    for _ in 0..8 {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return candidate;
        }
    }
    // All letters identical, e.g. "aa".
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words() -> Vec<String> {
        ["code", "react", "purple"].map(String::from).to_vec()
    }

    #[test]
    fn test_scramble_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let game = WordScramble::start(&words(), &mut rng).unwrap();

        let mut expected: Vec<char> = game.answer().chars().collect();
        let mut actual: Vec<char> = game.scrambled().chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(expected, actual);
        assert_ne!(game.scrambled(), game.answer());
    }

    #[test]
    fn test_check_ignores_case_and_whitespace() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = WordScramble::start(&words(), &mut rng).unwrap();
        let answer = game.answer().to_uppercase();

        assert!(!game.check("definitely wrong"));
        assert!(!game.is_solved());
        assert!(game.check(&format!("  {answer} ")));
        assert!(game.is_solved());
        assert!(game.check("anything"));
    }

    #[test]
    fn test_empty_word_list() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(WordScramble::start(&[], &mut rng).is_none());
    }
}
