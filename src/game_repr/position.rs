use std::fmt;

use log::{debug, trace};

use super::piece_moves::{king, pawn, SquareSet};
use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// The whole game: board, side to move, captured pieces and the undo log.
///
/// Every mutation goes through `move_piece` / `undo` (or the setup helpers),
/// which keep each piece's `square` in step with the cell holding it and the
/// king cache in step with the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: [Cell; 64],
    side_to_move: Color,
    captured: Vec<Piece>,
    history: Vec<UndoRecord>,
    /// Indexed by `Color::index`
    king_squares: [Option<Square>; 2],
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// Everything needed to take one move back exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UndoRecord {
    mv: Move,
    /// The mover as it stood before the move
    moved: Piece,
    captured: Option<Piece>,
    /// The castling rook as it stood before the move
    rook: Option<Piece>,
    side_to_move: Color,
    king_squares: [Option<Square>; 2],
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard initial position, White to move
    pub fn new() -> Self {
        let mut state = Self::empty(Color::White);

        for color in [Color::White, Color::Black] {
            for (col, &piece_type) in BACK_RANK.iter().enumerate() {
                let square = Square::at(color.back_rank(), col as u8);
                state.place_piece(Piece::new(piece_type, color, square));
            }
            for col in 0..8 {
                let square = Square::at(color.pawn_rank(), col);
                state.place_piece(Piece::new(Type::Pawn, color, square));
            }
        }

        state
    }

    /// A board with nothing on it, for hand-built positions
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            board: [Cell::Empty; 64],
            side_to_move,
            captured: Vec::new(),
            history: Vec::new(),
            king_squares: [None; 2],
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Puts `piece` on `piece.square`, replacing whatever stood there.
    /// Setup only: nothing is logged for undo.
    pub fn place_piece(&mut self, piece: Piece) -> &mut Self {
        self.take(piece.square);
        self.put(piece);
        self
    }

    /// Clears a cell. Setup only, like `place_piece`.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.take(square)
    }

    pub fn set_side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    pub fn get_piece(&self, square: Square) -> Cell {
        BoardView::get_piece(self, square)
    }

    pub fn is_valid_piece(&self, square: Square) -> bool {
        BoardView::is_valid_piece(self, square)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    /// Pieces taken so far, oldest first
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last capture or pawn move
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|record| record.mv)
    }

    /// Moves applied so far, oldest first
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|record| record.mv)
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.board
            .iter()
            .filter_map(|cell| cell.piece().copied())
            .filter(move |piece| piece.is(color))
    }

    /// Moves the piece on `from` to `to`, promoting to a queen when a pawn
    /// reaches the last rank.
    ///
    /// With `validate` the move must belong to the side to move and appear in
    /// `legal_moves(from)`. Without it the move is applied as given; castling,
    /// en passant and promotion are still recognized by their shape and
    /// carried out in full, and `from == to` is logged as a move that leaves
    /// the piece where it is.
    pub fn move_piece(&mut self, from: Square, to: Square, validate: bool) -> Result<(), MoveError> {
        self.move_piece_promoting(from, to, Type::Queen, validate)
    }

    /// `move_piece` with an explicit promotion choice, ignored for moves that
    /// do not promote
    pub fn move_piece_promoting(
        &mut self,
        from: Square,
        to: Square,
        promote_to: Type,
        validate: bool,
    ) -> Result<(), MoveError> {
        let Cell::Occupied(piece) = self.get_piece(from) else {
            debug!("rejected {from}{to}: empty source");
            return Err(MoveError::EmptySource(from));
        };

        if validate {
            if from == to {
                debug!("rejected {from}{to}: piece would not move");
                return Err(MoveError::IllegalMove { from, to });
            }
            if !piece.is(self.side_to_move) {
                debug!("rejected {from}{to}: {:?} is not to move", piece.color);
                return Err(MoveError::NotYourTurn { color: piece.color });
            }
            if !self.legal_moves(from).contains(&to) {
                debug!("rejected {from}{to}: not a legal destination");
                return Err(MoveError::IllegalMove { from, to });
            }
        }

        let mv = self.classify(&piece, to, promote_to);
        if mv.is_promotion() && !Type::PROMOTIONS.contains(&promote_to) {
            debug!("rejected {from}{to}: cannot promote to {promote_to:?}");
            return Err(MoveError::IllegalMove { from, to });
        }

        let record = self.apply(piece, mv);
        self.history.push(record);
        trace!("applied {mv} ({:?})", mv.kind);

        debug_assert!(self.check_invariants().is_ok(), "{:?}", self.check_invariants());
        Ok(())
    }

    /// Applies a move produced by `all_legal_moves`, without re-validating it
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let promote_to = mv.promotion().unwrap_or(Type::Queen);
        self.move_piece_promoting(mv.from, mv.to, promote_to, false)
    }

    /// Takes back the most recent move and returns it
    pub fn undo(&mut self) -> Result<Move, MoveError> {
        let record = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        let mv = record.mv;
        self.unapply(record);
        trace!("undid {mv}");

        debug_assert!(self.check_invariants().is_ok(), "{:?}", self.check_invariants());
        Ok(mv)
    }

    /// Destinations for the piece on `from` that do not leave its own king
    /// in check. Empty for an empty cell.
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        let Cell::Occupied(piece) = self.get_piece(from) else {
            return SquareSet::new();
        };

        let mut scratch = self.scratch();
        piece
            .valid_moves(self)
            .into_iter()
            .filter(|&to| self.is_legal_destination(&mut scratch, piece, to))
            .collect()
    }

    /// Every legal move for the side to move, one entry per promotion piece
    pub fn all_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for piece in self.pieces(self.side_to_move) {
            for to in self.legal_moves(piece.square) {
                let mv = self.classify(&piece, to, Type::Queen);
                if mv.is_promotion() {
                    moves.extend(
                        Type::PROMOTIONS
                            .iter()
                            .map(|&kind| Move::new(mv.from, mv.to, MoveKind::Promotion(kind))),
                    );
                } else {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth.
    /// Used to validate move generation correctness
    pub fn perft(&self, depth: u32) -> u64 {
        let mut pos = self.scratch();
        pos.perft_from(depth)
    }

    fn perft_from(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut count = 0;
        for mv in moves {
            let Cell::Occupied(piece) = self.get_piece(mv.from) else {
                continue;
            };
            let record = self.apply(piece, mv);
            count += self.perft_from(depth - 1);
            self.unapply(record);
        }
        count
    }

    /// Verifies the bookkeeping that every mutation is expected to preserve
    pub fn check_invariants(&self) -> Result<(), CorruptState> {
        for square in Square::all() {
            if let Cell::Occupied(piece) = self.get_piece(square) {
                if piece.square != square {
                    return Err(CorruptState::SquareMismatch {
                        cell: square,
                        recorded: piece.square,
                    });
                }
            }
        }

        for color in [Color::White, Color::Black] {
            let cached = self.king_square(color);
            let cache_holds_king = match cached {
                Some(square) => matches!(
                    self.get_piece(square),
                    Cell::Occupied(p) if p.piece_type == Type::King && p.is(color)
                ),
                None => self.find_king(color, None).is_none(),
            };
            if !cache_holds_king {
                return Err(CorruptState::KingCache {
                    color,
                    cached,
                    actual: self.find_king(color, None),
                });
            }
        }

        let logged = self
            .history
            .iter()
            .filter(|record| record.captured.is_some())
            .count();
        if logged != self.captured.len() {
            return Err(CorruptState::CapturedCount {
                captured: self.captured.len(),
                logged,
            });
        }

        Ok(())
    }

    /// Moving `piece` to `to` does not capture a king and leaves the mover's
    /// own king safe
    fn is_legal_destination(&self, scratch: &mut GameState, piece: Piece, to: Square) -> bool {
        if let Cell::Occupied(target) = self.get_piece(to) {
            if target.piece_type == Type::King {
                return false;
            }
        }

        let mv = scratch.classify(&piece, to, Type::Queen);
        let record = scratch.apply(piece, mv);
        let safe = !scratch.is_in_check(piece.color);
        scratch.unapply(record);
        safe
    }

    /// Copy of the position without the history, for throwaway exploration
    fn scratch(&self) -> GameState {
        GameState {
            board: self.board,
            side_to_move: self.side_to_move,
            captured: Vec::new(),
            history: Vec::new(),
            king_squares: self.king_squares,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    /// Works out what moving `piece` to `to` means on this board
    fn classify(&self, piece: &Piece, to: Square, promote_to: Type) -> Move {
        let from = piece.square;
        if from == to {
            return Move::normal(from, to);
        }

        match piece.piece_type {
            Type::King => {
                if let Some((rook_from, rook_to)) = king::castling_rook(from, to) {
                    let rook_in_corner = matches!(
                        self.get_piece(rook_from),
                        Cell::Occupied(rook) if rook.piece_type == Type::Rook && rook.is(piece.color)
                    );
                    if rook_in_corner
                        && !self.is_valid_piece(to)
                        && !self.is_valid_piece(rook_to)
                    {
                        return Move::new(from, to, MoveKind::Castling { rook_from, rook_to });
                    }
                }
            }
            Type::Pawn => {
                if to.row() == piece.color.promotion_rank() {
                    return Move::new(from, to, MoveKind::Promotion(promote_to));
                }
                if from.col() == to.col() && from.row().abs_diff(to.row()) == 2 {
                    return Move::new(from, to, MoveKind::DoubleStep);
                }
                if from.col() != to.col()
                    && !self.is_valid_piece(to)
                    && self.en_passant == Some(to)
                {
                    let captured = pawn::captured_square(from, to);
                    let passed_pawn = matches!(
                        self.get_piece(captured),
                        Cell::Occupied(victim) if victim.piece_type == Type::Pawn && victim.is_opponent_of(piece)
                    );
                    if passed_pawn {
                        return Move::new(from, to, MoveKind::EnPassant { captured });
                    }
                }
            }
            _ => {}
        }

        Move::normal(from, to)
    }

    /// Carries out `mv` for `piece` and returns what is needed to revert it.
    /// The history is left to the caller.
    fn apply(&mut self, piece: Piece, mv: Move) -> UndoRecord {
        let mut record = UndoRecord {
            mv,
            moved: piece,
            captured: None,
            rook: None,
            side_to_move: self.side_to_move,
            king_squares: self.king_squares,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        let capture_square = match mv.kind {
            MoveKind::EnPassant { captured } => captured,
            _ => mv.to,
        };
        // A piece staying on its own square is relocated in place, never captured
        if capture_square != mv.from {
            record.captured = self.take(capture_square);
        }
        self.take(mv.from);

        let mut placed = piece;
        placed.square = mv.to;
        placed.has_moved = true;
        if let MoveKind::Promotion(kind) = mv.kind {
            placed.piece_type = kind;
        }
        self.put(placed);

        if let MoveKind::Castling { rook_from, rook_to } = mv.kind {
            if let Some(rook) = self.take(rook_from) {
                record.rook = Some(rook);
                self.put(Piece {
                    square: rook_to,
                    has_moved: true,
                    ..rook
                });
            }
        }

        self.en_passant = match mv.kind {
            MoveKind::DoubleStep => Square::new((mv.from.row() + mv.to.row()) / 2, mv.from.col()),
            _ => None,
        };

        if piece.piece_type == Type::Pawn || record.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if piece.color == Color::Black {
            self.fullmove_number += 1;
        }

        if let Some(victim) = record.captured {
            self.captured.push(victim);
        }
        self.side_to_move = self.side_to_move.opposite();

        record
    }

    fn unapply(&mut self, record: UndoRecord) {
        let mv = record.mv;

        if let (Some(rook), MoveKind::Castling { rook_to, .. }) = (record.rook, mv.kind) {
            self.take(rook_to);
            self.put(rook);
        }

        self.take(mv.to);
        self.put(record.moved);

        if let Some(victim) = record.captured {
            self.put(victim);
            self.captured.pop();
        }

        self.side_to_move = record.side_to_move;
        self.king_squares = record.king_squares;
        self.en_passant = record.en_passant;
        self.halfmove_clock = record.halfmove_clock;
        self.fullmove_number = record.fullmove_number;
    }

    fn take(&mut self, square: Square) -> Option<Piece> {
        let cell = std::mem::take(&mut self.board[square.index()]);
        let piece = cell.piece().copied()?;

        if piece.piece_type == Type::King && self.king_square(piece.color) == Some(square) {
            self.king_squares[piece.color.index()] = self.find_king(piece.color, Some(square));
        }
        Some(piece)
    }

    fn put(&mut self, piece: Piece) {
        self.board[piece.square.index()] = Cell::Occupied(piece);
        if piece.piece_type == Type::King {
            self.king_squares[piece.color.index()] = Some(piece.square);
        }
    }

    fn find_king(&self, color: Color, skip: Option<Square>) -> Option<Square> {
        Square::all().filter(|&sq| Some(sq) != skip).find(|&sq| {
            matches!(
                self.get_piece(sq),
                Cell::Occupied(p) if p.piece_type == Type::King && p.is(color)
            )
        })
    }
}

impl BoardView for GameState {
    fn get_piece(&self, square: Square) -> Cell {
        self.board[square.index()]
    }

    fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }
}

impl fmt::Display for GameState {
    /// Rank 8 at the top, White in upper case
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8u8 {
                write!(f, " {}", self.get_piece(Square::at(row, col)))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
