use super::{slide, SquareSet, DIAGONAL};
use crate::game_repr::{BoardView, Piece};

pub(super) fn attacks<V: BoardView + ?Sized>(bishop: &Piece, view: &V) -> SquareSet {
    slide(bishop.square, view, &DIAGONAL)
}
