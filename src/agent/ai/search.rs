// Depth-limited negamax with alpha-beta pruning.
//
// Scores are always from the side to move's point of view, so one function
// serves both players: max(a, b) = -min(-a, -b). The position is explored in
// place with make/undo, strictly nested, and handed back exactly as found.

use std::time::Instant;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_repr::{Cell, GameState, Move, MoveError};

use super::evaluation::{Evaluator, PieceValues};

/// Checkmate score - use large value but leave room for mate distance
pub const MATE_SCORE: i32 = 30000;

/// Bound wider than any reachable score
const INFINITY: i32 = MATE_SCORE + 100;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// True when the score is a forced mate for either side
    pub fn is_mate(&self) -> bool {
        self.score.abs() >= MATE_SCORE - i32::from(u8::MAX)
    }
}

/// Finds the best move for the side to move, searching `depth` plies.
///
/// Equally scored root moves are told apart with `rng`, so a seeded generator
/// gives reproducible games.
pub fn best_move<R: Rng + ?Sized>(
    state: &mut GameState,
    depth: u8,
    evaluator: &Evaluator,
    rng: &mut R,
) -> Result<SearchResult, MoveError> {
    let start_time = Instant::now();
    let depth = depth.max(1);
    let mut nodes = 0u64;

    let mut moves = state.all_legal_moves();
    order_moves(state, &mut moves);

    let mut best_score = -INFINITY;
    let mut best_moves: Vec<Move> = Vec::new();

    for mv in moves {
        // Search one below the best so far so ties come back exact
        let alpha = best_score.saturating_sub(1).max(-INFINITY);

        state.make_move(mv)?;
        let score = -negamax(state, depth - 1, -INFINITY, -alpha, 1, evaluator, &mut nodes)?;
        state.undo()?;

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score {
            best_moves.push(mv);
        }
    }

    let best_move = best_moves.choose(rng).copied();
    let score = if best_move.is_some() {
        best_score
    } else {
        terminal_score(state, 0)
    };

    let result = SearchResult {
        best_move,
        score,
        depth,
        nodes_searched: nodes,
        time_ms: start_time.elapsed().as_millis() as u64,
    };
    debug!(
        "depth {} best {:?} score {} ({} ties, {} nodes, {} ms)",
        result.depth,
        result.best_move.map(|mv| mv.to_string()),
        result.score,
        best_moves.len(),
        result.nodes_searched,
        result.time_ms
    );

    Ok(result)
}

fn negamax(
    state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    evaluator: &Evaluator,
    nodes: &mut u64,
) -> Result<i32, MoveError> {
    *nodes += 1;

    let mut moves = state.all_legal_moves();
    if moves.is_empty() {
        return Ok(terminal_score(state, ply));
    }
    if state.draw_reason().is_some() {
        return Ok(0);
    }
    if depth == 0 {
        return Ok(evaluator.evaluate_board(state, state.side_to_move()));
    }

    order_moves(state, &mut moves);

    for mv in moves {
        state.make_move(mv)?;
        let score = -negamax(state, depth - 1, -beta, -alpha, ply + 1, evaluator, nodes)?;
        state.undo()?;

        if score >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(score);
    }

    Ok(alpha)
}

/// Score for a side with no legal move: mated (sooner is worse) or stalemated
fn terminal_score(state: &GameState, ply: u8) -> i32 {
    if state.is_in_check(state.side_to_move()) {
        -(MATE_SCORE - i32::from(ply))
    } else {
        0
    }
}

/// Captures of valuable pieces first, then promotions, then quiet moves
fn order_moves(state: &GameState, moves: &mut [Move]) {
    let values = PieceValues::default();
    moves.sort_by_cached_key(|mv| {
        let victim = match state.get_piece(mv.to) {
            Cell::Occupied(piece) => values.of(piece.piece_type),
            Cell::Empty => 0,
        };
        let promotion = mv.promotion().map_or(0, |kind| values.of(kind));
        -(victim * 10 + promotion)
    });
}
