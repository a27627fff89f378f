use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_center_moves() {
    let mut state = empty_board();
    place_moved(&mut state, Type::King, Color::White, "e4");

    assert_eq!(state.legal_moves(sq("e4")).len(), 8, "King in the open has 8 moves");
}

#[test]
fn test_king_corner_moves() {
    let mut state = empty_board();
    place(&mut state, Type::King, Color::White, "a1");

    assert_eq!(sorted(state.legal_moves(sq("a1"))), squares(&["a2", "b1", "b2"]));
}

#[test]
fn test_king_avoids_attacked_squares() {
    let mut state = empty_board();
    place(&mut state, Type::King, Color::White, "e1");
    place(&mut state, Type::Rook, Color::Black, "d8");

    assert_eq!(
        sorted(state.legal_moves(sq("e1"))),
        squares(&["e2", "f1", "f2"]),
        "The d-file is covered by the rook"
    );
}

#[test]
fn test_king_captures_unprotected_piece() {
    let mut state = empty_board();
    place(&mut state, Type::King, Color::White, "e1");
    place(&mut state, Type::Knight, Color::Black, "e2");

    assert!(has_move(&state.legal_moves(sq("e1")), "e2"));
}

#[test]
fn test_king_cannot_capture_protected_piece() {
    let mut state = empty_board();
    place(&mut state, Type::King, Color::White, "e1");
    place(&mut state, Type::Knight, Color::Black, "e2");
    place(&mut state, Type::Rook, Color::Black, "e8");

    assert!(!has_move(&state.legal_moves(sq("e1")), "e2"), "Rook guards the knight");
}

#[test]
fn test_kings_cannot_touch() {
    let mut state = empty_board();
    place(&mut state, Type::King, Color::White, "e1");
    place(&mut state, Type::King, Color::Black, "e3");

    assert_eq!(sorted(state.legal_moves(sq("e1"))), squares(&["d1", "f1"]));
}

#[test]
fn test_king_square_follows_king() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "e7e5", "e1e2"]);

    assert_eq!(state.king_square(Color::White), Some(sq("e2")));
    let king = *state.get_piece(sq("e2")).piece().expect("king on e2");
    assert!(king.has_moved);

    state.undo().expect("undo king move");
    assert_eq!(state.king_square(Color::White), Some(sq("e1")));
}
