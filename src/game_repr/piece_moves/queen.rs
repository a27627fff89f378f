use super::{slide, SquareSet, DIAGONAL, ORTHOGONAL};
use crate::game_repr::{BoardView, Piece};

/// Rook rays followed by bishop rays
pub(super) fn attacks<V: BoardView + ?Sized>(queen: &Piece, view: &V) -> SquareSet {
    let mut squares = slide(queen.square, view, &ORTHOGONAL);
    squares.extend(slide(queen.square, view, &DIAGONAL));
    squares
}
