use std::fmt;

use super::{Square, Type};

/// What a move does besides relocating the moving piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// Pawn advancing two rows from its starting rank
    DoubleStep,
    /// `captured` is the square of the pawn taken in passing
    EnPassant { captured: Square },
    Castling { rook_from: Square, rook_to: Square },
    Promotion(Type),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: Square, to: Square, kind: MoveKind) -> Move {
        Self { from, to, kind }
    }

    pub fn normal(from: Square, to: Square) -> Move {
        Self::new(from, to, MoveKind::Normal)
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    pub fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castling { .. })
    }

    pub fn promotion(&self) -> Option<Type> {
        match self.kind {
            MoveKind::Promotion(piece_type) => Some(piece_type),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, `e7e8q` for promotions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece_type) = self.promotion() {
            write!(f, "{}", piece_type.symbol())?;
        }
        Ok(())
    }
}
