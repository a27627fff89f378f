use super::{Color, Square};

/// Failures of the only fallible mutations, `move_piece` and `undo`.
///
/// The state is untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("{color:?} is not the side to move")]
    NotYourTurn { color: Color },

    #[error("no piece on {0}")]
    EmptySource(Square),

    #[error("no moves to undo")]
    NothingToUndo,
}

/// A broken internal invariant: the state can no longer be trusted.
///
/// Produced by `GameState::check_invariants`; no public operation should ever
/// lead here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorruptState {
    #[error("piece on {cell} believes it stands on {recorded}")]
    SquareMismatch { cell: Square, recorded: Square },

    #[error("{color:?} king cache says {cached:?}, board says {actual:?}")]
    KingCache {
        color: Color,
        cached: Option<Square>,
        actual: Option<Square>,
    },

    #[error("captured list holds {captured} pieces but the undo log accounts for {logged}")]
    CapturedCount { captured: usize, logged: usize },
}
