use super::*;

#[test]
fn starting_position_layout() {
    let board = Board::at_starting_position();
    assert_eq!(board.current_player(), Player::White);
    assert_eq!(board.pieces().count(), 32);

    let king = board.get_piece(Square::at(0, 4)).unwrap();
    assert_eq!((king.kind, king.player), (PieceKind::King, Player::White));
    let queen = board.get_piece(Square::at(7, 3)).unwrap();
    assert_eq!((queen.kind, queen.player), (PieceKind::Queen, Player::Black));
    assert!(board.are_squares_empty((2..6).map(|row| Square::at(row, 0))));
}

#[test]
fn find_piece_reports_location() {
    let mut board = Board::empty();
    let knight = Piece::knight(Player::White);
    board.set_piece(Square::at(3, 3), Some(knight));
    assert_eq!(board.find_piece(&knight), Ok(Square::at(3, 3)));
}

#[test]
fn find_piece_fails_for_absent_piece() {
    let board = Board::empty();
    let stray = Piece::rook(Player::Black);
    assert_eq!(
        board.find_piece(&stray),
        Err(BoardError::PieceNotFound { piece: stray.id() })
    );
}

#[test]
fn set_piece_keeps_one_square_per_piece() {
    let mut board = Board::empty();
    let rook = Piece::rook(Player::White);
    board.set_piece(Square::at(0, 0), Some(rook));
    board.set_piece(Square::at(0, 5), Some(rook));

    assert!(board.is_square_empty(Square::at(0, 0)));
    assert_eq!(board.find_piece(&rook), Ok(Square::at(0, 5)));
}

#[test]
fn overwritten_piece_leaves_the_board() {
    let mut board = Board::empty();
    let victim = Piece::pawn(Player::Black);
    board.set_piece(Square::at(4, 4), Some(victim));
    board.set_piece(Square::at(4, 4), Some(Piece::queen(Player::White)));
    assert!(board.find_piece(&victim).is_err());
}

#[test]
fn capture_possible_between_opponents_only() {
    let mut board = Board::empty();
    board.set_piece(Square::at(0, 0), Some(Piece::rook(Player::White)));
    board.set_piece(Square::at(0, 1), Some(Piece::knight(Player::White)));
    board.set_piece(Square::at(1, 0), Some(Piece::pawn(Player::Black)));

    assert!(board.capture_possible(Square::at(0, 0), Square::at(1, 0)));
    assert!(!board.capture_possible(Square::at(0, 0), Square::at(0, 1)));
}

#[test]
fn move_out_of_turn_is_ignored() {
    let mut board = Board::at_starting_position();
    assert!(!board.move_piece(Square::at(6, 4), Square::at(4, 4)));
    assert!(board.get_piece(Square::at(6, 4)).is_some());
    assert_eq!(board.current_player(), Player::White);
    assert_eq!(board.last_move(), None);
}

#[test]
fn move_from_empty_square_is_ignored() {
    let mut board = Board::at_starting_position();
    assert!(!board.move_piece(Square::at(3, 3), Square::at(4, 3)));
    assert_eq!(board.current_player(), Player::White);
}

#[test]
fn pawn_double_step_sets_last_move() {
    let mut board = Board::at_starting_position();
    let pawn = board.get_piece(Square::at(1, 4)).unwrap();

    assert!(board.move_piece(Square::at(1, 4), Square::at(3, 4)));

    assert_eq!(board.current_player(), Player::Black);
    assert!(board.is_square_empty(Square::at(1, 4)));
    let moved = board.get_piece(Square::at(3, 4)).unwrap();
    assert_eq!(moved, pawn);
    assert!(moved.moved);

    let last = board.last_move().unwrap();
    assert_eq!(last.piece, pawn);
    assert_eq!(last.to, Square::at(3, 4));
    assert!(last.double_step);
}

#[test]
fn single_step_is_not_a_double_step() {
    let mut board = Board::at_starting_position();
    board.move_piece(Square::at(1, 4), Square::at(2, 4));
    assert!(!board.last_move().unwrap().double_step);
}

#[test]
fn capture_removes_target() {
    let mut board = Board::empty();
    let rook = Piece::rook(Player::White);
    let victim = Piece::bishop(Player::Black);
    board.set_piece(Square::at(0, 0), Some(rook));
    board.set_piece(Square::at(5, 0), Some(victim));

    assert!(board.move_piece(Square::at(0, 0), Square::at(5, 0)));
    assert_eq!(board.get_piece(Square::at(5, 0)), Some(rook));
    assert!(board.find_piece(&victim).is_err());
}

#[test]
fn white_pawn_promotes_to_queen() {
    let mut board = Board::empty();
    let pawn = Piece::pawn(Player::White);
    board.set_piece(Square::at(6, 2), Some(pawn));

    assert!(board.move_piece(Square::at(6, 2), Square::at(7, 2)));

    let promoted = board.get_piece(Square::at(7, 2)).unwrap();
    assert_eq!(promoted.kind, PieceKind::Queen);
    assert_eq!(promoted.player, Player::White);
    assert!(board.find_piece(&pawn).is_err());
}

#[test]
fn black_pawn_promotes_on_capture() {
    let mut board = Board::empty();
    board.set_current_player(Player::Black);
    board.set_piece(Square::at(1, 3), Some(Piece::pawn(Player::Black)));
    board.set_piece(Square::at(0, 4), Some(Piece::rook(Player::White)));

    assert!(board.move_piece(Square::at(1, 3), Square::at(0, 4)));

    let promoted = board.get_piece(Square::at(0, 4)).unwrap();
    assert_eq!((promoted.kind, promoted.player), (PieceKind::Queen, Player::Black));
    assert_eq!(board.pieces().count(), 1);
}

#[test]
fn kingside_castle_moves_rook() {
    let mut board = Board::empty();
    let king = Piece::king(Player::White);
    let rook = Piece::rook(Player::White);
    board.set_piece(Square::at(0, 4), Some(king));
    board.set_piece(Square::at(0, 7), Some(rook));

    assert!(board.move_piece(Square::at(0, 4), Square::at(0, 6)));

    assert_eq!(board.get_piece(Square::at(0, 6)), Some(king));
    assert_eq!(board.get_piece(Square::at(0, 5)), Some(rook));
    assert!(board.is_square_empty(Square::at(0, 7)));
    assert!(board.get_piece(Square::at(0, 5)).unwrap().moved);
}

#[test]
fn queenside_castle_moves_rook() {
    let mut board = Board::empty();
    board.set_current_player(Player::Black);
    let rook = Piece::rook(Player::Black);
    board.set_piece(Square::at(7, 4), Some(Piece::king(Player::Black)));
    board.set_piece(Square::at(7, 0), Some(rook));

    assert!(board.move_piece(Square::at(7, 4), Square::at(7, 2)));

    assert_eq!(board.find_piece(&rook), Ok(Square::at(7, 3)));
    assert!(board.is_square_empty(Square::at(7, 0)));
}

#[test]
fn en_passant_captures_double_stepped_pawn() {
    let mut board = Board::empty();
    let white = Piece::pawn(Player::White);
    let black = Piece::pawn(Player::Black);
    board.set_piece(Square::at(4, 3), Some(white));
    board.set_piece(Square::at(6, 4), Some(black));
    board.set_current_player(Player::Black);

    board.move_piece(Square::at(6, 4), Square::at(4, 4));
    assert!(board.move_piece(Square::at(4, 3), Square::at(5, 4)));

    assert_eq!(board.get_piece(Square::at(5, 4)), Some(white));
    assert!(board.is_square_empty(Square::at(4, 4)));
    assert!(board.find_piece(&black).is_err());
}

#[test]
fn en_passant_window_closes_after_one_move() {
    let mut board = Board::empty();
    board.set_piece(Square::at(3, 4), Some(Piece::pawn(Player::Black)));
    board.set_piece(Square::at(1, 3), Some(Piece::pawn(Player::White)));
    board.set_piece(Square::at(7, 7), Some(Piece::king(Player::Black)));
    board.set_piece(Square::at(0, 0), Some(Piece::king(Player::White)));

    board.move_piece(Square::at(1, 3), Square::at(3, 3));
    // Black spends the window elsewhere
    board.move_piece(Square::at(7, 7), Square::at(7, 6));
    board.move_piece(Square::at(0, 0), Square::at(0, 1));

    assert!(board.move_piece(Square::at(3, 4), Square::at(2, 3)));
    assert!(board.get_piece(Square::at(3, 3)).is_some());
}

#[test]
fn off_board_destination_is_ignored() {
    let mut board = Board::empty();
    board.set_piece(Square::at(0, 0), Some(Piece::rook(Player::White)));
    assert!(!board.move_piece(Square::at(0, 0), Square::at(-1, 0)));
    assert!(board.get_piece(Square::at(0, 0)).is_some());
}
