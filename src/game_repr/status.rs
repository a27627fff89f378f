use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// A hundred plies without a capture or a pawn move
    FiftyMoveRule,
    /// Bare kings, or a single knight or bishop beside them
    InsufficientMaterial,
}

/// Outcome of the position for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }
}

const FIFTY_MOVE_PLIES: u32 = 100;

impl GameState {
    /// Checks if the king of the given color is currently attacked, i.e. some
    /// opposing piece counts its square among its captures.
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };

        self.pieces(color.opposite())
            .any(|piece| piece.valid_captures(self).contains(&king))
    }

    /// Checks if the given color has ANY legal moves available
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|piece| !self.legal_moves(piece.square).is_empty())
    }

    /// Returns true if the given color is in checkmate
    /// (in check AND has no legal moves)
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Returns true if the given color is in stalemate
    /// (NOT in check AND has no legal moves)
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Neither side can ever deliver mate
    pub fn has_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for cell in self.board_cells() {
            let Some(piece) = cell.piece() else {
                continue;
            };
            match piece.piece_type {
                Type::King => {}
                Type::Knight | Type::Bishop => minors += 1,
                _ => return false,
            }
        }
        minors <= 1
    }

    /// Classifies the position for the side to move. Query only.
    ///
    /// Mate and stalemate take precedence over the draw rules, which are only
    /// reported while a legal move still exists.
    pub fn checkmate_stalemate_checker(&self) -> GameStatus {
        let mover = self.side_to_move();

        if !self.has_legal_moves(mover) {
            return if self.is_in_check(mover) {
                GameStatus::Checkmate {
                    winner: mover.opposite(),
                }
            } else {
                GameStatus::Stalemate
            };
        }

        self.draw_reason()
            .map_or(GameStatus::InProgress, GameStatus::Draw)
    }

    /// Draw rule that ends the game regardless of the moves left, if any
    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.halfmove_clock() >= FIFTY_MOVE_PLIES {
            Some(DrawReason::FiftyMoveRule)
        } else if self.has_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        }
    }

    fn board_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Square::all().map(|sq| self.get_piece(sq))
    }
}
