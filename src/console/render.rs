//! Text rendering for the console front-end.

use crate::game::{BOARD_SIZE, Board, Cell};
use crate::service::GameService;

/// Renders the board as a framed grid with 1-based row and column headers.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{:^4}", col + 1));
    }
    out.push('\n');
    for row in 0..BOARD_SIZE {
        push_frame_line(&mut out);
        out.push_str(&format!("{:>3}|", row + 1));
        for col in 0..BOARD_SIZE {
            match board.symbol_at(row, col) {
                Cell::Empty => out.push_str(" . |"),
                Cell::Occupied(symbol) => out.push_str(&format!(" {symbol} |")),
            }
        }
        out.push('\n');
    }
    push_frame_line(&mut out);
    out
}

fn push_frame_line(out: &mut String) {
    out.push_str("   +");
    for _ in 0..BOARD_SIZE {
        out.push_str("---+");
    }
    out.push('\n');
}

/// Renders the board plus the round's headline state.
pub fn render_round(service: &GameService) -> String {
    let current = service.current_player();
    format!(
        "{}\nCurrent player: {} ({})\nMode: {}\nStatus: {}\n",
        render_board(service.board()),
        current.name(),
        current.symbol(),
        service.mode(),
        service.status(),
    )
}
