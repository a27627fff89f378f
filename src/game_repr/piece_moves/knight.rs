use super::{leap, SquareSet};
use crate::game_repr::Piece;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The eight L-shaped jumps that land on the board. Knights ignore anything
/// standing in between.
pub(super) fn attacks(knight: &Piece) -> SquareSet {
    leap(knight.square, &KNIGHT_OFFSETS)
}
