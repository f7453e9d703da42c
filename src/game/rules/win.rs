//! Win detection for five-in-a-row lines.

use crate::game::board::Board;
use crate::game::types::{BOARD_SIZE, Cell, Symbol, WIN_LENGTH};

/// The four undirected line axes: horizontal, vertical, main diagonal,
/// anti-diagonal.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether the symbol at (row, col) sits on a completed line.
///
/// Walks outward from the queried cell in both directions of each axis,
/// counting contiguous equal symbols; the cell itself plus both arms must
/// reach [`WIN_LENGTH`]. Lines longer than the winning length still count.
/// Returns false when the queried cell is empty, so callers need not check
/// emptiness separately.
pub fn check_win(board: &Board, row: usize, col: usize) -> bool {
    let Cell::Occupied(symbol) = board.symbol_at(row, col) else {
        return false;
    };
    AXES.iter()
        .any(|&(dr, dc)| line_length(board, row, col, symbol, dr, dc) >= WIN_LENGTH)
}

/// Scans every cell holding `symbol` and reports whether any of them
/// completes a line.
///
/// O(board area x line length) — used only to rebuild status after a
/// restored board whose last move is unknown, never on the per-move path.
pub fn player_has_win(board: &Board, symbol: Symbol) -> bool {
    (0..BOARD_SIZE).any(|row| {
        (0..BOARD_SIZE).any(|col| {
            board.symbol_at(row, col) == Cell::Occupied(symbol) && check_win(board, row, col)
        })
    })
}

/// Total run length through (row, col) along one axis: the cell itself plus
/// the contiguous arms in both opposite directions.
fn line_length(
    board: &Board,
    row: usize,
    col: usize,
    symbol: Symbol,
    dr: isize,
    dc: isize,
) -> usize {
    1 + count_direction(board, row, col, symbol, dr, dc)
        + count_direction(board, row, col, symbol, -dr, -dc)
}

/// Number of contiguous `symbol` cells strictly beyond (row, col) in one
/// direction, bounded by the board edges.
fn count_direction(
    board: &Board,
    row: usize,
    col: usize,
    symbol: Symbol,
    dr: isize,
    dc: isize,
) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while r >= 0
        && c >= 0
        && (r as usize) < BOARD_SIZE
        && (c as usize) < BOARD_SIZE
        && board.symbol_at(r as usize, c as usize) == Cell::Occupied(symbol)
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}
