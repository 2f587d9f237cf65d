//! Memory match: flip cards two at a time and find every pair.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    pub id: usize,
    pub symbol: String,
    pub flipped: bool,
    pub matched: bool,
}

/// Where the current turn stands.
///
/// At most two cards are ever flipped-but-unmatched, and only while in
/// `Resolving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TurnPhase {
    /// No card selected.
    #[default]
    Idle,
    /// First card face up, waiting for the second pick.
    OneSelected { first: usize },
    /// Two mismatched cards face up, waiting for the reveal delay to elapse.
    Resolving { first: usize, second: usize },
}

/// What a call to [`MemoryMatch::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Selection ignored: card already face up or matched, unknown id, or a
    /// mismatch is still resolving.
    Ignored,
    /// First card of the turn flipped face up.
    FirstFlipped,
    /// Second card flipped and the symbols match; both stay up for good.
    Matched,
    /// Second card flipped and the symbols differ. The caller should call
    /// [`MemoryMatch::resolve_mismatch`] once the reveal delay elapses
    /// (typically scheduled through a `TimerQueue`).
    Mismatched,
}

/// The memory-match engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryMatch {
    cards: Vec<MemoryCard>,
    phase: TurnPhase,
    matched_pairs: usize,
}

impl MemoryMatch {
    /// Deal a shuffled board with exactly one pair per symbol.
    pub fn deal<R: Rng>(symbols: &[String], rng: &mut R) -> Self {
        let mut deck: Vec<String> = symbols.iter().chain(symbols.iter()).cloned().collect();
        deck.shuffle(rng);

        let cards = deck
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| MemoryCard {
                id,
                symbol,
                flipped: false,
                matched: false,
            })
            .collect();

        Self {
            cards,
            phase: TurnPhase::Idle,
            matched_pairs: 0,
        }
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Pairs found so far.
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Total pairs on the board.
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// True once every pair has been found.
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.pair_count()
    }

    /// Flip the card with the given id.
    pub fn select(&mut self, id: usize) -> SelectOutcome {
        if matches!(self.phase, TurnPhase::Resolving { .. }) {
            return SelectOutcome::Ignored;
        }
        match self.cards.get(id) {
            Some(card) if !card.flipped && !card.matched => {}
            _ => return SelectOutcome::Ignored,
        }

        self.cards[id].flipped = true;
        match self.phase {
            TurnPhase::Idle => {
                self.phase = TurnPhase::OneSelected { first: id };
                SelectOutcome::FirstFlipped
            }
            TurnPhase::OneSelected { first } => {
                if self.cards[first].symbol == self.cards[id].symbol {
                    self.cards[first].matched = true;
                    self.cards[id].matched = true;
                    self.matched_pairs += 1;
                    self.phase = TurnPhase::Idle;
                    SelectOutcome::Matched
                } else {
                    self.phase = TurnPhase::Resolving { first, second: id };
                    SelectOutcome::Mismatched
                }
            }
            TurnPhase::Resolving { .. } => SelectOutcome::Ignored,
        }
    }

    /// Flip the two mismatched cards back down and return to idle.
    ///
    /// No-op unless a mismatch is pending; returns whether anything changed.
    pub fn resolve_mismatch(&mut self) -> bool {
        match self.phase {
            TurnPhase::Resolving { first, second } => {
                self.cards[first].flipped = false;
                self.cards[second].flipped = false;
                self.phase = TurnPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Reshuffle and clear every flag.
    pub fn reset<R: Rng>(&mut self, symbols: &[String], rng: &mut R) {
        *self = Self::deal(symbols, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn symbols() -> Vec<String> {
        ["🍎", "🍌", "🍇", "🍉"].map(String::from).to_vec()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Card ids of the first pair sharing a symbol, plus one odd card out.
    fn pair_and_odd(board: &MemoryMatch) -> (usize, usize, usize) {
        let mut by_symbol: HashMap<&str, Vec<usize>> = HashMap::new();
        for card in board.cards() {
            by_symbol.entry(card.symbol.as_str()).or_default().push(card.id);
        }
        let pair = by_symbol.values().next().unwrap();
        let odd = board
            .cards()
            .iter()
            .find(|c| c.symbol != board.cards()[pair[0]].symbol)
            .unwrap()
            .id;
        (pair[0], pair[1], odd)
    }

    #[test]
    fn test_deal_builds_even_paired_board() {
        let board = MemoryMatch::deal(&symbols(), &mut rng());

        assert_eq!(board.cards().len(), 8);
        assert_eq!(board.pair_count(), 4);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for card in board.cards() {
            *counts.entry(card.symbol.as_str()).or_default() += 1;
            assert!(!card.flipped);
            assert!(!card.matched);
        }
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_matching_pair_locks_both_cards() {
        let mut board = MemoryMatch::deal(&symbols(), &mut rng());
        let (a, b, _) = pair_and_odd(&board);

        assert_eq!(board.select(a), SelectOutcome::FirstFlipped);
        assert_eq!(board.select(b), SelectOutcome::Matched);

        assert_eq!(board.phase(), TurnPhase::Idle);
        assert!(board.cards()[a].matched && board.cards()[a].flipped);
        assert!(board.cards()[b].matched && board.cards()[b].flipped);
        assert_eq!(board.matched_pairs(), 1);
    }

    #[test]
    fn test_mismatch_flips_back_after_resolution() {
        let mut board = MemoryMatch::deal(&symbols(), &mut rng());
        let (a, _, odd) = pair_and_odd(&board);

        board.select(a);
        assert_eq!(board.select(odd), SelectOutcome::Mismatched);
        assert_eq!(board.phase(), TurnPhase::Resolving { first: a, second: odd });

        // Everything is ignored while the mismatch shows.
        let (_, b, _) = pair_and_odd(&board);
        assert_eq!(board.select(b), SelectOutcome::Ignored);

        assert!(board.resolve_mismatch());
        assert_eq!(board.phase(), TurnPhase::Idle);
        assert!(!board.cards()[a].flipped);
        assert!(!board.cards()[odd].flipped);
        assert!(!board.resolve_mismatch());
    }

    #[test]
    fn test_reselecting_flipped_or_matched_cards_is_ignored() {
        let mut board = MemoryMatch::deal(&symbols(), &mut rng());
        let (a, b, _) = pair_and_odd(&board);

        board.select(a);
        assert_eq!(board.select(a), SelectOutcome::Ignored);
        board.select(b);
        assert_eq!(board.select(a), SelectOutcome::Ignored);
        assert_eq!(board.select(usize::MAX), SelectOutcome::Ignored);
    }

    #[test]
    fn test_completing_the_board() {
        let mut board = MemoryMatch::deal(&symbols(), &mut rng());
        let mut by_symbol: HashMap<String, Vec<usize>> = HashMap::new();
        for card in board.cards() {
            by_symbol.entry(card.symbol.clone()).or_default().push(card.id);
        }

        for pair in by_symbol.values() {
            board.select(pair[0]);
            assert_eq!(board.select(pair[1]), SelectOutcome::Matched);
        }
        assert!(board.is_complete());

        board.reset(&symbols(), &mut rng());
        assert!(!board.is_complete());
        assert_eq!(board.matched_pairs(), 0);
        assert!(board.cards().iter().all(|c| !c.flipped && !c.matched));
    }
}
