//! Heuristic computer opponent: win if possible, block otherwise, else play
//! a random empty cell.

use rand::Rng;

use crate::game::{BOARD_SIZE, Board, Symbol, rules};

/// The scripted seat. Selects one legal coordinate per invocation with a
/// fixed three-tier priority and no lookahead beyond the immediate board.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    symbol: Symbol,
    opponent_symbol: Symbol,
}

impl ComputerPlayer {
    /// Creates the computer seat. `opponent_symbol` is the mark it blocks.
    pub fn new(name: impl Into<String>, symbol: Symbol, opponent_symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
            opponent_symbol,
        }
    }

    /// The display name. Fixed for the lifetime of the seat.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbol this seat places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Selects the next coordinate:
    ///
    /// 1. the first cell where its own symbol completes a line,
    /// 2. else the first cell where the opponent's symbol would — occupying
    ///    it denies the win,
    /// 3. else a uniformly random empty cell.
    ///
    /// Tiers 1 and 2 scan rows top-to-bottom, columns left-to-right, and take
    /// the first match, so they are deterministic. Returns `None` on a full
    /// board; the engine never invokes this seat on one.
    pub fn select_move(&self, board: &Board) -> Option<(usize, usize)> {
        if let Some(cell) = find_winning_cell(board, self.symbol) {
            return Some(cell);
        }
        if let Some(cell) = find_winning_cell(board, self.opponent_symbol) {
            return Some(cell);
        }
        random_empty_cell(board)
    }
}

/// First empty cell, in scan order, where placing `symbol` would complete a
/// line. Trial placements run on a private clone so the live board never
/// holds a hypothetical symbol.
fn find_winning_cell(board: &Board, symbol: Symbol) -> Option<(usize, usize)> {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if !board.is_empty_cell(row, col) {
                continue;
            }
            let mut trial = board.clone();
            trial.place(row, col, symbol);
            if rules::win::check_win(&trial, row, col) {
                return Some((row, col));
            }
        }
    }
    None
}

fn random_empty_cell(board: &Board) -> Option<(usize, usize)> {
    if board.is_full() {
        return None;
    }
    let mut rng = rand::rng();
    loop {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if board.is_empty_cell(row, col) {
            return Some((row, col));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn row_run(board: &mut Board, row: usize, cols: std::ops::Range<usize>, symbol: Symbol) {
        for col in cols {
            assert!(board.place(row, col, symbol));
        }
    }

    #[test]
    fn takes_the_winning_cell_when_available() {
        let mut board = Board::new();
        row_run(&mut board, 2, 1..5, Symbol::O);
        let computer = ComputerPlayer::new("Computer", Symbol::O, Symbol::X);
        // Both (2,0) and (2,5) win; scan order reaches (2,0) first.
        assert_eq!(computer.select_move(&board), Some((2, 0)));
    }

    #[test]
    fn blocks_the_opponents_open_four() {
        let mut board = Board::new();
        row_run(&mut board, 5, 1..5, Symbol::O);
        let computer = ComputerPlayer::new("Computer", Symbol::X, Symbol::O);
        assert_eq!(computer.select_move(&board), Some((5, 0)));
    }

    #[test]
    fn winning_beats_blocking() {
        let mut board = Board::new();
        // Opponent X threatens at row 1, computer O can win at row 7.
        row_run(&mut board, 1, 0..4, Symbol::X);
        row_run(&mut board, 7, 3..7, Symbol::O);
        let computer = ComputerPlayer::new("Computer", Symbol::O, Symbol::X);
        let chosen = computer.select_move(&board).expect("board has empty cells");
        let mut after = board.clone();
        assert!(after.place(chosen.0, chosen.1, Symbol::O));
        assert!(rules::win::check_win(&after, chosen.0, chosen.1));
    }

    #[test]
    fn fallback_picks_a_legal_empty_cell() {
        let mut board = Board::new();
        board.place(0, 0, Symbol::X);
        let computer = ComputerPlayer::new("Computer", Symbol::O, Symbol::X);
        let (row, col) = computer.select_move(&board).expect("move expected");
        assert!(board.is_empty_cell(row, col));
    }

    #[test]
    fn no_move_on_a_full_board() {
        let mut board = Board::new();
        // Row-shifted double stripes; the longest run in any direction is 2.
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = if (row + col / 2) % 2 == 0 {
                    Symbol::X
                } else {
                    Symbol::O
                };
                board.place(row, col, symbol);
            }
        }
        assert!(board.is_full());
        let computer = ComputerPlayer::new("Computer", Symbol::O, Symbol::X);
        assert_eq!(computer.select_move(&board), None);
    }

    #[test]
    fn trial_moves_leave_the_board_untouched() {
        let mut board = Board::new();
        row_run(&mut board, 4, 0..4, Symbol::X);
        let before = board.clone();
        let computer = ComputerPlayer::new("Computer", Symbol::O, Symbol::X);
        let _ = computer.select_move(&board);
        assert_eq!(board, before);
        assert_eq!(board.symbol_at(4, 4), Cell::Empty);
    }
}
