pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{BoardView, Cell, Piece, Square, Type};

/// Destination squares of a single piece. A queen in the open has 27, so the
/// inline capacity covers every piece without spilling.
pub type SquareSet = SmallVec<[Square; 32]>;

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Piece {
    /// Squares this piece threatens, whatever stands on them.
    ///
    /// Pawns threaten their forward diagonals only; the king's set never
    /// includes castling.
    pub fn attacked_squares<V: BoardView + ?Sized>(&self, view: &V) -> SquareSet {
        match self.piece_type {
            Type::Pawn => pawn::attacks(self),
            Type::Knight => knight::attacks(self),
            Type::Bishop => bishop::attacks(self, view),
            Type::Rook => rook::attacks(self, view),
            Type::Queen => queen::attacks(self, view),
            Type::King => king::attacks(self),
        }
    }

    /// Pattern destinations holding an opposing piece (the opposing king
    /// included), plus the en-passant square for pawns.
    ///
    /// Only occupancy is considered here. Whether the capture would expose
    /// the mover's own king is decided by `GameState::legal_moves`.
    pub fn valid_captures<V: BoardView + ?Sized>(&self, view: &V) -> SquareSet {
        let mut captures: SquareSet = self
            .attacked_squares(view)
            .into_iter()
            .filter(|&sq| holds_opponent(self, view, sq))
            .collect();

        if self.piece_type == Type::Pawn {
            captures.extend(pawn::en_passant(self, view));
        }

        captures
    }

    /// Pattern destinations in bounds and on an empty cell
    pub fn valid_peaceful_moves<V: BoardView + ?Sized>(&self, view: &V) -> SquareSet {
        match self.piece_type {
            Type::Pawn => pawn::pushes(self, view),
            Type::King => {
                let mut moves = empty_targets(self.attacked_squares(view), view);
                moves.extend(king::castling_targets(self, view));
                moves
            }
            _ => empty_targets(self.attacked_squares(view), view),
        }
    }

    /// Captures and peaceful moves together, before any check filtering
    pub fn valid_moves<V: BoardView + ?Sized>(&self, view: &V) -> SquareSet {
        let mut moves = self.valid_captures(view);
        moves.extend(self.valid_peaceful_moves(view));
        moves
    }
}

fn holds_opponent<V: BoardView + ?Sized>(piece: &Piece, view: &V, square: Square) -> bool {
    match view.get_piece(square) {
        Cell::Occupied(other) => other.is_opponent_of(piece),
        Cell::Empty => false,
    }
}

fn empty_targets<V: BoardView + ?Sized>(squares: SquareSet, view: &V) -> SquareSet {
    squares
        .into_iter()
        .filter(|&sq| view.get_piece(sq).is_empty())
        .collect()
}

/// Single-step targets at fixed offsets
pub(crate) fn leap(from: Square, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .collect()
}

/// Walks each direction until the edge or the first occupied cell, which is
/// included.
pub(crate) fn slide<V: BoardView + ?Sized>(
    from: Square,
    view: &V,
    directions: &[(i8, i8)],
) -> SquareSet {
    let mut squares = SquareSet::new();

    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            squares.push(next);
            if view.is_valid_piece(next) {
                break;
            }
            current = next;
        }
    }

    squares
}
