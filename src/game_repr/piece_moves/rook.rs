use super::{slide, SquareSet, ORTHOGONAL};
use crate::game_repr::{BoardView, Piece};

pub(super) fn attacks<V: BoardView + ?Sized>(rook: &Piece, view: &V) -> SquareSet {
    slide(rook.square, view, &ORTHOGONAL)
}
