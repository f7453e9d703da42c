//! Board model, domain types and win rules.

mod board;
pub mod rules;
mod types;

pub use board::Board;
pub use types::{BOARD_SIZE, Cell, GameMode, GameStatus, Symbol, WIN_LENGTH};
