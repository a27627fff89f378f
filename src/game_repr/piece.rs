use std::fmt;

use super::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Pieces a pawn may turn into, strongest first
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    pub fn symbol(self) -> char {
        match self {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    /// Row step a pawn of this color advances by
    pub fn forward(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    pub fn back_rank(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    pub fn pawn_rank(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Row on which this color's pawns promote
    pub fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

/// A piece standing on the board.
///
/// `square` always mirrors the cell holding the piece; `GameState` keeps the
/// two in sync on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(piece_type: Type, color: Color, square: Square) -> Self {
        Self {
            color,
            piece_type,
            square,
            has_moved: false,
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// Upper case for White, lower case for Black
    pub fn to_char(&self) -> char {
        let c = self.piece_type.symbol();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// Contents of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(piece) => write!(f, "{}", piece.to_char()),
        }
    }
}
