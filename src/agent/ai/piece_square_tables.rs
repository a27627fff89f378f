// Piece-square tables for positional evaluation.
// Values are in centipawns (100 = 1 pawn), listed from White's side: the
// first row of each table is rank 1. Black reads them mirrored vertically.

use crate::game_repr::{Color, Square, Type};

// Pawn position values - encourage advancement and central control
pub(crate) const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1 (pawns shouldn't be here)
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8 (pawns shouldn't be here)
];

// Knight position values - prefer center squares
pub(crate) const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 1
    -40,-20,  0,  5,  5,  0,-20,-40,  // Rank 2
    -30,  5, 10, 15, 15, 10,  5,-30,  // Rank 3
    -30,  0, 15, 20, 20, 15,  0,-30,  // Rank 4
    -30,  5, 15, 20, 20, 15,  5,-30,  // Rank 5
    -30,  0, 10, 15, 15, 10,  0,-30,  // Rank 6
    -40,-20,  0,  0,  0,  0,-20,-40,  // Rank 7
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 8
];

// Bishop position values - prefer center and long diagonals
pub(crate) const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,  // Rank 1
    -10,  5,  0,  0,  0,  0,  5,-10,  // Rank 2
    -10, 10, 10, 10, 10, 10, 10,-10,  // Rank 3
    -10,  0, 10, 10, 10, 10,  0,-10,  // Rank 4
    -10,  5,  5, 10, 10,  5,  5,-10,  // Rank 5
    -10,  0,  5, 10, 10,  5,  0,-10,  // Rank 6
    -10,  0,  0,  0,  0,  0,  0,-10,  // Rank 7
    -20,-10,-10,-10,-10,-10,-10,-20,  // Rank 8
];

// Rook position values - prefer 7th rank and center files
pub(crate) const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,  // Rank 1
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 2
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 3
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 4
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 5
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 6
     5, 10, 10, 10, 10, 10, 10,  5,  // Rank 7 (7th rank bonus)
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
];

// Queen position values - slight central preference
pub(crate) const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,  // Rank 1
    -10,  0,  5,  0,  0,  0,  0,-10,  // Rank 2
    -10,  5,  5,  5,  5,  5,  0,-10,  // Rank 3
      0,  0,  5,  5,  5,  5,  0, -5,  // Rank 4
     -5,  0,  5,  5,  5,  5,  0, -5,  // Rank 5
    -10,  0,  5,  5,  5,  5,  0,-10,  // Rank 6
    -10,  0,  0,  0,  0,  0,  0,-10,  // Rank 7
    -20,-10,-10, -5, -5,-10,-10,-20,  // Rank 8
];

// King position values - stay home behind the pawns
pub(crate) const KING_TABLE: [i32; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,  // Rank 1 (castled position)
     20, 20,  0,  0,  0,  0, 20, 20,  // Rank 2
    -10,-20,-20,-20,-20,-20,-20,-10,  // Rank 3
    -20,-30,-30,-40,-40,-30,-30,-20,  // Rank 4
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 5
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 6
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 7
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 8
];

/// Bonus for `piece_type` of `color` standing on `square`
pub fn pst_value(piece_type: Type, square: Square, color: Color) -> i32 {
    let row = match color {
        Color::White => square.row(),
        Color::Black => 7 - square.row(),
    };
    let idx = row as usize * 8 + square.col() as usize;

    match piece_type {
        Type::Pawn => PAWN_TABLE[idx],
        Type::Knight => KNIGHT_TABLE[idx],
        Type::Bishop => BISHOP_TABLE[idx],
        Type::Rook => ROOK_TABLE[idx],
        Type::Queen => QUEEN_TABLE[idx],
        Type::King => KING_TABLE[idx],
    }
}
