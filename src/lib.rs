//! Console five-in-a-row (gomoku-style) on a 10x10 board.
//!
//! # Architecture
//!
//! - **Game**: board model and win rules (pure, no I/O)
//! - **Players**: the closed pair of seat kinds — human, heuristic computer
//! - **Service**: the turn engine sequencing moves and round status
//! - **Store**: JSON snapshot save/load
//! - **Db**: SQLite score store backing the leaderboard
//! - **Console**: stdin/stdout front-end driving all of the above
//!
//! # Example
//!
//! ```
//! use gomoku::{GameMode, GameService, GameStatus};
//!
//! let mut round = GameService::new(GameMode::HumanVsHuman);
//! assert!(round.submit_move(4, 4));
//! assert_eq!(round.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod console;
mod db;
mod game;
mod players;
mod service;
mod store;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - console front-end
pub use console::GameController;

// Crate-level exports - score database
pub use db::{DbError, NewScore, RankedPlayer, Score, ScoreRepository};

// Crate-level exports - board model and rules
pub use game::{BOARD_SIZE, Board, Cell, GameMode, GameStatus, Symbol, WIN_LENGTH, rules};

// Crate-level exports - player seats
pub use players::{ComputerPlayer, HumanPlayer, Player};

// Crate-level exports - turn engine
pub use service::GameService;

// Crate-level exports - snapshot persistence
pub use store::{SaveError, SaveFile, SavedGame, SavedPlayer};
