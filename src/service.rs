//! Turn engine: sequences moves, runs the win checks and owns round status.

use strum::IntoEnumIterator;

use crate::game::{Board, GameMode, GameStatus, Symbol, rules};
use crate::players::{ComputerPlayer, HumanPlayer, Player};

/// One round of five-in-a-row: the board, both seats, whose turn it is and
/// whether the round has ended.
///
/// Every operation is synchronous and runs to completion on the caller's
/// thread. The service assumes exclusive access — an embedding caller
/// serializes use of one instance itself.
#[derive(Debug, Clone)]
pub struct GameService {
    board: Board,
    status: GameStatus,
    mode: GameMode,
    players: [Player; 2],
    current: usize,
}

impl GameService {
    /// Creates a round for `mode` with default seat names. The X seat is
    /// always seat one and moves first; the computer, when present, holds O.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            mode,
            players: Self::seats_for(mode),
            current: 0,
        }
    }

    fn seats_for(mode: GameMode) -> [Player; 2] {
        match mode {
            GameMode::HumanVsHuman => [
                Player::Human(HumanPlayer::new("Player 1", Symbol::X)),
                Player::Human(HumanPlayer::new("Player 2", Symbol::O)),
            ],
            GameMode::HumanVsComputer => [
                Player::Human(HumanPlayer::new("Player", Symbol::X)),
                Player::Computer(ComputerPlayer::new("Computer", Symbol::O, Symbol::X)),
            ],
        }
    }

    /// Plays the current player's symbol at (row, col).
    ///
    /// Returns false, with no state change, when the round is already over or
    /// the placement is rejected. On success the win and draw checks run for
    /// the played cell; if the turn then passes to the computer seat, its
    /// reply is played before this call returns, so the caller sees the
    /// combined outcome of both half-moves.
    pub fn submit_move(&mut self, row: usize, col: usize) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        let symbol = self.players[self.current].symbol();
        if !self.board.place(row, col, symbol) {
            return false;
        }
        self.settle(row, col);
        true
    }

    /// Plays the computer seat's turn, provided the round is open and it is
    /// actually the computer's turn. Returns whether a move was played.
    ///
    /// `submit_move` replies automatically; this entry point exists for
    /// restored rounds where the computer is next to move.
    pub fn play_computer_turn(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        let Player::Computer(computer) = &self.players[self.current] else {
            return false;
        };
        let Some((row, col)) = computer.select_move(&self.board) else {
            return false;
        };
        let symbol = computer.symbol();
        self.board.place(row, col, symbol);
        self.settle(row, col);
        true
    }

    /// Post-placement bookkeeping for the freshly occupied cell: win check,
    /// draw check, turn switch, automatic computer reply. The reply recurses
    /// back here at most once — the seat after the computer is always human.
    fn settle(&mut self, row: usize, col: usize) {
        let symbol = self.players[self.current].symbol();
        if rules::win::check_win(&self.board, row, col) {
            self.status = GameStatus::Won(symbol);
            return;
        }
        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return;
        }
        self.current = 1 - self.current;
        if !self.players[self.current].is_human() {
            self.play_computer_turn();
        }
    }

    /// Starts a fresh round: clears the board and returns the turn to the X
    /// seat. Seat identities and scores carry over.
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.status = GameStatus::InProgress;
        self.current = 0;
    }

    /// Reseats both players for a different mode, then resets the round.
    pub fn change_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.players = Self::seats_for(mode);
        self.reset_round();
    }

    /// Re-derives status from the whole board. Idempotent; call after the
    /// board was mutated outside the move path (snapshot restore), where the
    /// last move is unknown.
    pub fn reconcile(&mut self) {
        for symbol in Symbol::iter() {
            if rules::win::player_has_win(&self.board, symbol) {
                self.status = GameStatus::Won(symbol);
                return;
            }
        }
        self.status = if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
    }

    /// Replaces the board contents with `source` (occupied cells only) and
    /// reconciles status against the new position.
    pub fn restore_board(&mut self, source: &Board) {
        self.board.copy_from(source);
        self.reconcile();
    }

    /// Hands the turn to the seat holding `symbol`.
    pub fn set_turn(&mut self, symbol: Symbol) {
        self.current = if self.players[0].symbol() == symbol {
            0
        } else {
            1
        };
    }

    /// The board, queryable cell-by-cell.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The seating arrangement this round was created with.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The seat whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Seat one, the X holder.
    pub fn player_one(&self) -> &Player {
        &self.players[0]
    }

    /// Seat two, the O holder.
    pub fn player_two(&self) -> &Player {
        &self.players[1]
    }

    /// Mutable seat one, for renaming and scoring.
    pub fn player_one_mut(&mut self) -> &mut Player {
        &mut self.players[0]
    }

    /// Mutable seat two, for renaming and scoring.
    pub fn player_two_mut(&mut self) -> &mut Player {
        &mut self.players[1]
    }
}
