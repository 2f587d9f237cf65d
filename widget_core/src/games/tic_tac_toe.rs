//! Tic-tac-toe: a 3x3 board for two human players, X moves first.

use serde::{Deserialize, Serialize};

/// The eight three-in-a-row lines on a 3x3 board.
const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two marks on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Whether the game is still going, won, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// The tic-tac-toe engine. Cells are indexed 0..9, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    board: [Option<Player>; 9],
    next_player: Player,
    status: GameStatus,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            next_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &[Option<Player>; 9] {
        &self.board
    }

    /// The mark in a cell, if any. Out-of-range indexes read as empty.
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.board.get(index).copied().flatten()
    }

    /// Whose turn it is. Meaningless once the game is over.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Place the next player's mark in `index`.
    ///
    /// Returns false without changing anything when the cell is occupied,
    /// the index is out of range, or the game already ended.
    pub fn play(&mut self, index: usize) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }
        if index >= self.board.len() || self.board[index].is_some() {
            return false;
        }

        self.board[index] = Some(self.next_player);
        self.next_player = self.next_player.other();
        self.status = self.evaluate();
        true
    }

    /// Back to the empty board, X to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn evaluate(&self) -> GameStatus {
        for [a, b, c] in WINNING_LINES {
            if let Some(player) = self.board[a] {
                if self.board[b] == Some(player) && self.board[c] == Some(player) {
                    return GameStatus::Won(player);
                }
            }
        }
        if self.board.iter().all(Option::is_some) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
