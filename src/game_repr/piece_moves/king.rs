use super::{leap, SquareSet, DIAGONAL, ORTHOGONAL};
use crate::game_repr::{BoardView, Cell, Piece, Square, Type};

const KING_START_COL: u8 = 4;

/// The eight neighbouring squares
pub(super) fn attacks(king: &Piece) -> SquareSet {
    let mut squares = leap(king.square, &ORTHOGONAL);
    squares.extend(leap(king.square, &DIAGONAL));
    squares
}

/// Rook squares for a castling king move, `(rook_from, rook_to)`.
///
/// Recognizes the shape alone: king on its home square moving two columns
/// along the back rank. Nothing about the board is checked.
pub fn castling_rook(from: Square, to: Square) -> Option<(Square, Square)> {
    let row = from.row();
    if to.row() != row || (row != 0 && row != 7) || from.col() != KING_START_COL {
        return None;
    }

    match to.col() {
        6 => Some((Square::at(row, 7), Square::at(row, 5))),
        2 => Some((Square::at(row, 0), Square::at(row, 3))),
        _ => None,
    }
}

/// Castling destinations for an unmoved king.
///
/// Needs an unmoved friendly rook in the corner, empty cells between them, and
/// no enemy attack on the king's square or the squares it crosses.
pub(super) fn castling_targets<V: BoardView + ?Sized>(king: &Piece, view: &V) -> SquareSet {
    let mut targets = SquareSet::new();
    let row = king.color.back_rank();

    if king.has_moved || king.square != Square::at(row, KING_START_COL) {
        return targets;
    }

    let enemy = king.color.opposite();
    if view.is_attacked(king.square, enemy) {
        return targets;
    }

    // (rook column, cells that must be empty, cells the king passes over)
    let sides: [(u8, &[u8], [u8; 2]); 2] = [(7, &[5, 6], [5, 6]), (0, &[1, 2, 3], [3, 2])];

    for (rook_col, between, path) in sides {
        let rook_ready = match view.get_piece(Square::at(row, rook_col)) {
            Cell::Occupied(rook) => {
                rook.piece_type == Type::Rook && rook.is(king.color) && !rook.has_moved
            }
            Cell::Empty => false,
        };
        if !rook_ready {
            continue;
        }

        if between
            .iter()
            .any(|&col| view.is_valid_piece(Square::at(row, col)))
        {
            continue;
        }

        if path
            .iter()
            .any(|&col| view.is_attacked(Square::at(row, col), enemy))
        {
            continue;
        }

        targets.push(Square::at(row, path[1]));
    }

    targets
}
