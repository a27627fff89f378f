use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Square from its algebraic name, e.g. `sq("e4")`
pub fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    Square::at(bytes[1] - b'1', bytes[0] - b'a')
}

/// Helper function to create an empty board with White to move
pub fn empty_board() -> GameState {
    GameState::empty(Color::White)
}

/// Helper function to place an unmoved piece
pub fn place(state: &mut GameState, piece_type: Type, color: Color, at: &str) {
    state.place_piece(Piece::new(piece_type, color, sq(at)));
}

/// Same as `place`, but the piece counts as having moved already
pub fn place_moved(state: &mut GameState, piece_type: Type, color: Color, at: &str) {
    let mut piece = Piece::new(piece_type, color, sq(at));
    piece.has_moved = true;
    state.place_piece(piece);
}

/// Helper function to check if a destination is in the move list
pub fn has_move(moves: &[Square], to: &str) -> bool {
    moves.contains(&sq(to))
}

/// Sorted list of squares, for order-insensitive comparisons
pub fn squares(names: &[&str]) -> Vec<Square> {
    let mut list: Vec<Square> = names.iter().map(|name| sq(name)).collect();
    list.sort();
    list
}

pub fn sorted(moves: SquareSet) -> Vec<Square> {
    let mut list = moves.into_vec();
    list.sort();
    list
}

/// Plays validated moves in coordinate notation, panicking on the first
/// rejection
pub fn play(state: &mut GameState, moves: &[&str]) {
    for mv in moves {
        state
            .move_piece(sq(&mv[0..2]), sq(&mv[2..4]), true)
            .unwrap_or_else(|err| panic!("{mv} rejected: {err}"));
    }
}

/// Builds a position from the piece-placement field of a FEN string.
/// Every piece is unmoved, so kings and rooks on their home squares may
/// castle.
pub fn from_placement(placement: &str, side_to_move: Color) -> GameState {
    let mut state = GameState::empty(side_to_move);

    for (rank_index, rank) in placement.split('/').enumerate() {
        let row = 7 - rank_index as u8;
        let mut col = 0u8;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as u8;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let piece_type = match c.to_ascii_lowercase() {
                'k' => Type::King,
                'q' => Type::Queen,
                'r' => Type::Rook,
                'b' => Type::Bishop,
                'n' => Type::Knight,
                'p' => Type::Pawn,
                other => panic!("unknown piece letter {other}"),
            };
            state.place_piece(Piece::new(piece_type, color, Square::at(row, col)));
            col += 1;
        }
    }

    state
}

// ==================== TEST MODULES ====================

mod king_movement;
mod undo;
