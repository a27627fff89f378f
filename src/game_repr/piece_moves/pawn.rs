use super::SquareSet;
use crate::game_repr::{BoardView, Cell, Piece, Square, Type};

/// Forward diagonals, the only squares a pawn threatens
pub(super) fn attacks(pawn: &Piece) -> SquareSet {
    let forward = pawn.color.forward();
    [-1, 1]
        .into_iter()
        .filter_map(|d_col| pawn.square.offset(forward, d_col))
        .collect()
}

/// One step forward onto an empty cell, two from the starting rank when both
/// cells are empty
pub(super) fn pushes<V: BoardView + ?Sized>(pawn: &Piece, view: &V) -> SquareSet {
    let mut moves = SquareSet::new();
    let forward = pawn.color.forward();

    let Some(one) = pawn.square.offset(forward, 0) else {
        return moves;
    };
    if view.is_valid_piece(one) {
        return moves;
    }
    moves.push(one);

    if pawn.square.row() == pawn.color.pawn_rank() {
        if let Some(two) = one.offset(forward, 0) {
            if !view.is_valid_piece(two) {
                moves.push(two);
            }
        }
    }

    moves
}

/// The en-passant target, if it lies on one of this pawn's diagonals and the
/// pawn that double-stepped past it is an opponent standing beside us
pub(super) fn en_passant<V: BoardView + ?Sized>(pawn: &Piece, view: &V) -> Option<Square> {
    let target = view.en_passant_target()?;
    if !attacks(pawn).contains(&target) {
        return None;
    }

    let victim_square = captured_square(pawn.square, target);
    match view.get_piece(victim_square) {
        Cell::Occupied(victim) if victim.piece_type == Type::Pawn && victim.is_opponent_of(pawn) => {
            Some(target)
        }
        _ => None,
    }
}

/// Where the pawn taken in passing stands: the capturer's row, the target's
/// column
pub fn captured_square(from: Square, target: Square) -> Square {
    Square::at(from.row(), target.col())
}
