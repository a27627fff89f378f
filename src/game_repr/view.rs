use super::{Cell, Color, Square};

/// Read-only access to a board, the only thing piece rules ever see.
///
/// `GameState` is the production implementation. Tests implement it directly
/// to put a piece in front of arbitrary surroundings without building a legal
/// position around it.
pub trait BoardView {
    fn get_piece(&self, square: Square) -> Cell;

    /// True iff the cell holds a piece of either color
    fn is_valid_piece(&self, square: Square) -> bool {
        self.get_piece(square).is_occupied()
    }

    /// Square skipped by a pawn double step on the previous ply
    fn en_passant_target(&self) -> Option<Square> {
        None
    }

    /// Whether any piece of `by` threatens `target`, occupied or not.
    ///
    /// Castling never contributes to an attack map, so this is safe to call
    /// from inside king move generation.
    fn is_attacked(&self, target: Square, by: Color) -> bool {
        Square::all()
            .filter_map(|sq| self.get_piece(sq).piece().copied())
            .filter(|piece| piece.is(by))
            .any(|piece| piece.attacked_squares(self).contains(&target))
    }
}
