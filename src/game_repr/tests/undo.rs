use super::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ==================== MOVE / UNDO ROUND TRIPS ====================

#[test]
fn test_permissive_move_then_undo_restores_state() {
    let mut state = GameState::new();
    let before = state.clone();

    state
        .move_piece(sq("e2"), sq("e4"), false)
        .expect("permissive move applies");
    assert_ne!(state, before);

    assert_eq!(state.undo(), Ok(Move::new(sq("e2"), sq("e4"), MoveKind::DoubleStep)));
    assert_eq!(state, before, "Undo must restore the exact prior state");
}

#[test]
fn test_permissive_move_ignores_turn_and_pattern() {
    let mut state = GameState::new();
    let before = state.clone();

    // A black queen teleporting onto a white pawn: nonsense, but allowed
    state
        .move_piece(sq("d8"), sq("a2"), false)
        .expect("permissive move applies");

    assert_eq!(state.captured().len(), 1);
    assert_eq!(state.side_to_move(), Color::Black, "Side to move toggles regardless");

    state.undo().expect("undo");
    assert_eq!(state, before);
}

#[test]
fn test_permissive_move_in_place_round_trips() {
    let mut state = GameState::new();
    state.move_piece(sq("e2"), sq("e4"), false).expect("e2e4 applies");
    let before = state.clone();

    state
        .move_piece(sq("d7"), sq("d7"), false)
        .expect("staying put is allowed without validation");

    let pawn = *state.get_piece(sq("d7")).piece().expect("pawn still on d7");
    assert_eq!((pawn.piece_type, pawn.color), (Type::Pawn, Color::Black));
    assert!(pawn.has_moved);
    assert!(state.captured().is_empty(), "A piece never captures itself");
    assert_eq!(state.side_to_move(), Color::White);
    assert_eq!(state.last_move(), Some(Move::normal(sq("d7"), sq("d7"))));
    assert_eq!(state.check_invariants(), Ok(()));

    assert_eq!(state.undo(), Ok(Move::normal(sq("d7"), sq("d7"))));
    assert_eq!(state, before);
    assert_eq!(state.undo(), Ok(Move::new(sq("e2"), sq("e4"), MoveKind::DoubleStep)));
}

#[test]
fn test_king_moved_in_place_keeps_cache() {
    let mut state = GameState::new();
    let before = state.clone();

    state.move_piece(sq("e1"), sq("e1"), false).expect("applies");
    assert_eq!(state.king_square(Color::White), Some(sq("e1")));
    assert_eq!(state.check_invariants(), Ok(()));

    state.undo().expect("undo");
    assert_eq!(state, before);
}

#[test]
fn test_validated_move_in_place_rejected() {
    let mut state = GameState::new();
    let before = state.clone();

    assert_eq!(
        state.move_piece(sq("e2"), sq("e2"), true),
        Err(MoveError::IllegalMove { from: sq("e2"), to: sq("e2") })
    );
    assert_eq!(state, before);
}

#[test]
fn test_undo_on_fresh_game() {
    let mut state = GameState::new();
    assert_eq!(state.undo(), Err(MoveError::NothingToUndo));
}

#[test]
fn test_undo_capture_restores_victim() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "d7d5"]);
    let before = state.clone();

    play(&mut state, &["e4d5"]);
    assert_eq!(state.captured().len(), 1);

    state.undo().expect("undo capture");
    assert_eq!(state, before);
    assert!(state.captured().is_empty());
    assert_eq!(state.get_piece(sq("d5")).piece().map(|p| p.color), Some(Color::Black));
}

#[test]
fn test_undo_back_to_start() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5c6", "d7c6"]);

    while state.undo().is_ok() {}

    assert_eq!(state, GameState::new());
}

#[test]
fn test_random_games_round_trip() {
    for seed in 0..6 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();
        let mut applied = 0;

        for _ in 0..80 {
            let moves = state.all_legal_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };

            let before = state.clone();
            state.make_move(mv).expect("generated move should apply");
            state.undo().expect("undo generated move");
            assert_eq!(state, before, "seed {seed}: {mv} did not round-trip");

            state.make_move(mv).expect("generated move should apply");
            assert_eq!(state.check_invariants(), Ok(()));
            applied += 1;
        }

        for _ in 0..applied {
            state.undo().expect("undo");
        }
        assert_eq!(state, GameState::new(), "seed {seed}: full unwind differs");
    }
}

// ==================== REJECTED MOVES ====================

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let mut state = GameState::new();
    let before = state.clone();

    assert_eq!(
        state.move_piece(sq("e2"), sq("e5"), true),
        Err(MoveError::IllegalMove { from: sq("e2"), to: sq("e5") })
    );
    assert_eq!(state, before);
}

#[test]
fn test_wrong_side_rejected() {
    let mut state = GameState::new();

    assert_eq!(
        state.move_piece(sq("e7"), sq("e5"), true),
        Err(MoveError::NotYourTurn { color: Color::Black })
    );
}

#[test]
fn test_empty_source_rejected() {
    let mut state = GameState::new();

    assert_eq!(state.move_piece(sq("e4"), sq("e5"), true), Err(MoveError::EmptySource(sq("e4"))));
    assert_eq!(state.move_piece(sq("e4"), sq("e5"), false), Err(MoveError::EmptySource(sq("e4"))));
}

#[test]
fn test_error_messages() {
    let err = MoveError::IllegalMove { from: sq("e2"), to: sq("e5") };
    assert_eq!(err.to_string(), "illegal move: e2 -> e5");
    assert_eq!(MoveError::NothingToUndo.to_string(), "no moves to undo");
}
