//! Core domain types for the five-in-a-row engine.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 10;

/// Number of contiguous equal symbols that completes a winning line.
pub const WIN_LENGTH: usize = 5;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Symbol {
    /// X always moves first.
    X,
    /// O moves second.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell holding a placed symbol.
    Occupied(Symbol),
}

/// Current status of a round. Terminal statuses are final until the round
/// is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The given symbol completed a winning line.
    Won(Symbol),
    /// The board filled up with no winner.
    Draw,
}

impl GameStatus {
    /// True for any status other than [`GameStatus::InProgress`].
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(symbol) => write!(f, "{symbol} won"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Seating arrangement, fixed at construction time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum GameMode {
    /// Two human seats.
    #[strum(to_string = "Human vs Human")]
    HumanVsHuman,
    /// A human seat against the heuristic computer opponent.
    #[strum(to_string = "Human vs Computer")]
    HumanVsComputer,
}
