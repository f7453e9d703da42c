//! Tests for the turn engine: move sequencing, terminal statuses, resets
//! and status reconciliation.

use gomoku::{Board, Cell, GameMode, GameService, GameStatus, Symbol};

/// X completes a horizontal five while O plays far away on the bottom row.
fn play_x_row_win(service: &mut GameService) {
    for col in 0..4 {
        assert!(service.submit_move(0, col), "X move at (0,{col})");
        assert_eq!(service.status(), GameStatus::InProgress);
        assert!(service.submit_move(9, col), "O move at (9,{col})");
        assert_eq!(service.status(), GameStatus::InProgress);
    }
    assert!(service.submit_move(0, 4));
}

#[test]
fn x_wins_with_five_in_a_row() {
    let mut service = GameService::new(GameMode::HumanVsHuman);
    play_x_row_win(&mut service);
    assert_eq!(service.status(), GameStatus::Won(Symbol::X));
    assert!(gomoku::rules::win::check_win(service.board(), 0, 2));
}

#[test]
fn turn_alternates_between_human_seats() {
    let mut service = GameService::new(GameMode::HumanVsHuman);
    assert_eq!(service.current_player().symbol(), Symbol::X);
    assert!(service.submit_move(3, 3));
    assert_eq!(service.current_player().symbol(), Symbol::O);
    assert!(service.submit_move(4, 4));
    assert_eq!(service.current_player().symbol(), Symbol::X);
}

#[test]
fn rejected_moves_do_not_switch_the_turn() {
    let mut service = GameService::new(GameMode::HumanVsHuman);
    assert!(service.submit_move(3, 3));
    let before = service.board().clone();

    assert!(!service.submit_move(3, 3), "occupied cell");
    assert!(!service.submit_move(10, 0), "row out of bounds");
    assert!(!service.submit_move(0, 99), "column out of bounds");

    assert_eq!(service.current_player().symbol(), Symbol::O);
    assert_eq!(*service.board(), before);
}

#[test]
fn computer_replies_within_the_same_call() {
    let mut service = GameService::new(GameMode::HumanVsComputer);
    assert!(service.submit_move(5, 5));
    // Control is back with the human; the computer has already answered.
    assert_eq!(service.current_player().symbol(), Symbol::X);
    let occupied = (0..10)
        .flat_map(|r| (0..10).map(move |c| (r, c)))
        .filter(|&(r, c)| service.board().symbol_at(r, c) != Cell::Empty)
        .count();
    assert_eq!(occupied, 2);
}

#[test]
fn computer_blocks_an_open_four() {
    let mut service = GameService::new(GameMode::HumanVsComputer);
    // Hand-build a position where X threatens (1,0)..(1,3) and it is X's turn.
    let mut board = Board::new();
    for col in 0..3 {
        board.place(1, col, Symbol::X);
        board.place(8, col, Symbol::O);
    }
    service.restore_board(&board);
    service.set_turn(Symbol::X);

    // X extends to four in a row; the computer must deny the fifth cell.
    // (1,4) is the first winning cell in scan order, so the block is exact.
    assert!(service.submit_move(1, 3));
    assert_eq!(service.board().symbol_at(1, 4), Cell::Occupied(Symbol::O));
    assert_eq!(service.status(), GameStatus::InProgress);
}

#[test]
fn terminal_status_is_sticky() {
    let mut service = GameService::new(GameMode::HumanVsHuman);
    play_x_row_win(&mut service);
    assert_eq!(service.status(), GameStatus::Won(Symbol::X));

    let board_before = service.board().clone();
    for _ in 0..3 {
        assert!(!service.submit_move(5, 5));
    }
    assert_eq!(service.status(), GameStatus::Won(Symbol::X));
    assert_eq!(*service.board(), board_before);
}

#[test]
fn reset_round_clears_board_but_keeps_identities() {
    let mut service = GameService::new(GameMode::HumanVsHuman);
    service.player_one_mut().set_name("Alice");
    service.player_one_mut().add_score(10);
    play_x_row_win(&mut service);

    service.reset_round();
    assert_eq!(service.status(), GameStatus::InProgress);
    assert_eq!(service.current_player().symbol(), Symbol::X);
    assert!(service.board().is_empty_cell(0, 0));
    assert_eq!(service.player_one().name(), "Alice");
    assert_eq!(service.player_one().score(), 10);
}

#[test]
fn change_mode_reseats_players() {
    let mut service = GameService::new(GameMode::HumanVsHuman);
    service.player_one_mut().set_name("Alice");
    service.change_mode(GameMode::HumanVsComputer);
    assert_eq!(service.mode(), GameMode::HumanVsComputer);
    assert!(!service.player_two().is_human());
    // Reseating replaces identities as well.
    assert_eq!(service.player_one().name(), "Player");
}

#[test]
fn reconcile_detects_a_winner_on_a_restored_board() {
    let mut board = Board::new();
    for col in 2..7 {
        board.place(4, col, Symbol::O);
    }
    let mut service = GameService::new(GameMode::HumanVsHuman);
    service.restore_board(&board);
    assert_eq!(service.status(), GameStatus::Won(Symbol::O));
}

#[test]
fn reconcile_detects_a_draw_on_a_full_board() {
    // Row-shifted double stripes: the longest run in any direction is 2.
    let mut board = Board::new();
    for row in 0..10 {
        for col in 0..10 {
            let symbol = if (row + col / 2) % 2 == 0 {
                Symbol::X
            } else {
                Symbol::O
            };
            board.place(row, col, symbol);
        }
    }
    let mut service = GameService::new(GameMode::HumanVsHuman);
    service.restore_board(&board);
    assert_eq!(service.status(), GameStatus::Draw);
}

#[test]
fn reconcile_is_idempotent() {
    let mut board = Board::new();
    board.place(0, 0, Symbol::X);
    let mut service = GameService::new(GameMode::HumanVsHuman);
    service.restore_board(&board);
    assert_eq!(service.status(), GameStatus::InProgress);
    service.reconcile();
    service.reconcile();
    assert_eq!(service.status(), GameStatus::InProgress);
}

#[test]
fn restored_computer_turn_plays_on_demand() {
    let mut board = Board::new();
    // The computer (O) already has four in a row and is next to move.
    for col in 1..5 {
        board.place(5, col, Symbol::O);
    }
    for col in 0..4 {
        board.place(9, col, Symbol::X);
    }
    let mut service = GameService::new(GameMode::HumanVsComputer);
    service.restore_board(&board);
    service.set_turn(Symbol::O);

    assert!(service.play_computer_turn());
    assert_eq!(service.status(), GameStatus::Won(Symbol::O));
}

#[test]
fn play_computer_turn_refuses_out_of_turn_calls() {
    let mut service = GameService::new(GameMode::HumanVsComputer);
    // It is the human's turn.
    assert!(!service.play_computer_turn());
    let mut human_service = GameService::new(GameMode::HumanVsHuman);
    assert!(!human_service.play_computer_turn());
}
