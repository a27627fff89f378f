// Position evaluation.
// Scores are signed from a chosen side's point of view: positive is good for
// that side. Values are in material units where a pawn is 10.

use crate::game_repr::{BoardView, Color, Piece, Square, Type};

use super::piece_square_tables::pst_value;

/// Piece-square tables are in centipawns; material here is in tenths of that
const PST_SCALE: i32 = 10;

/// The pluggable part of evaluation: what one piece is worth to one side
pub trait PieceValuation {
    /// Signed contribution of `piece` to the score of `perspective`
    fn piece_value(&self, piece: &Piece, perspective: Color) -> i32;
}

/// Material value per piece type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 10,
            knight: 30,
            bishop: 30,
            rook: 50,
            queen: 90,
            king: 900,
        }
    }
}

impl PieceValues {
    pub fn of(&self, piece_type: Type) -> i32 {
        match piece_type {
            Type::Pawn => self.pawn,
            Type::Knight => self.knight,
            Type::Bishop => self.bishop,
            Type::Rook => self.rook,
            Type::Queen => self.queen,
            Type::King => self.king,
        }
    }
}

fn signed(value: i32, piece: &Piece, perspective: Color) -> i32 {
    if piece.is(perspective) {
        value
    } else {
        -value
    }
}

/// Plain material count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialTable {
    pub values: PieceValues,
}

impl MaterialTable {
    pub fn new(values: PieceValues) -> Self {
        Self { values }
    }
}

impl PieceValuation for MaterialTable {
    fn piece_value(&self, piece: &Piece, perspective: Color) -> i32 {
        signed(self.values.of(piece.piece_type), piece, perspective)
    }
}

/// Material plus a bonus for where each piece stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalTable {
    pub values: PieceValues,
}

impl PositionalTable {
    pub fn new(values: PieceValues) -> Self {
        Self { values }
    }
}

impl PieceValuation for PositionalTable {
    fn piece_value(&self, piece: &Piece, perspective: Color) -> i32 {
        let bonus = pst_value(piece.piece_type, piece.square, piece.color) / PST_SCALE;
        signed(self.values.of(piece.piece_type) + bonus, piece, perspective)
    }
}

/// Sums a `PieceValuation` over the board
pub struct Evaluator {
    valuation: Box<dyn PieceValuation + Send>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::material()
    }
}

impl Evaluator {
    pub fn new(valuation: impl PieceValuation + Send + 'static) -> Self {
        Self {
            valuation: Box::new(valuation),
        }
    }

    /// Default material values, no positional terms
    pub fn material() -> Self {
        Self::new(MaterialTable::default())
    }

    pub fn positional() -> Self {
        Self::new(PositionalTable::default())
    }

    /// Total of every occupied cell's value for `perspective`. Pure and
    /// defined for any board, legal or not.
    pub fn evaluate_board<V: BoardView + ?Sized>(&self, view: &V, perspective: Color) -> i32 {
        Square::all()
            .filter_map(|sq| view.get_piece(sq).piece().copied())
            .map(|piece| self.valuation.piece_value(&piece, perspective))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Cell, GameState};

    /// Every cell occupied by the same piece
    struct FullBoard;

    impl BoardView for FullBoard {
        fn get_piece(&self, square: Square) -> Cell {
            Cell::Occupied(Piece::new(Type::Rook, Color::White, square))
        }
    }

    struct Flat(i32);

    impl PieceValuation for Flat {
        fn piece_value(&self, _piece: &Piece, _perspective: Color) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_sum_over_full_board() {
        let evaluator = Evaluator::new(Flat(50));
        assert_eq!(evaluator.evaluate_board(&FullBoard, Color::White), 3200);
        assert_eq!(evaluator.evaluate_board(&FullBoard, Color::Black), 3200);
    }

    #[test]
    fn test_empty_board_is_zero() {
        let state = GameState::empty(Color::White);
        assert_eq!(Evaluator::material().evaluate_board(&state, Color::White), 0);
    }

    #[test]
    fn test_starting_position_is_balanced() {
        let state = GameState::new();
        assert_eq!(Evaluator::material().evaluate_board(&state, Color::White), 0);
        assert_eq!(Evaluator::positional().evaluate_board(&state, Color::Black), 0);
    }

    #[test]
    fn test_material_sign_follows_perspective() {
        let mut state = GameState::new();
        let square = Square::at(7, 3);
        state.remove_piece(square);

        let evaluator = Evaluator::material();
        assert_eq!(evaluator.evaluate_board(&state, Color::White), 90);
        assert_eq!(evaluator.evaluate_board(&state, Color::Black), -90);
    }

    #[test]
    fn test_default_values() {
        let values = PieceValues::default();
        let expected = [
            (Type::Pawn, 10),
            (Type::Knight, 30),
            (Type::Bishop, 30),
            (Type::Rook, 50),
            (Type::Queen, 90),
            (Type::King, 900),
        ];
        for (piece_type, value) in expected {
            assert_eq!(values.of(piece_type), value, "{piece_type:?}");
        }
    }

    #[test]
    fn test_positional_rewards_development() {
        let mut state = GameState::new();
        let before = Evaluator::positional().evaluate_board(&state, Color::White);

        state
            .move_piece(Square::at(0, 6), Square::at(2, 5), true)
            .expect("Nf3 is legal");
        let after = Evaluator::positional().evaluate_board(&state, Color::White);

        assert!(after > before, "Knight on f3 should beat knight on g1");
    }
}
