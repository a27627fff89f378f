// AI Agent - Negamax with Alpha-Beta Pruning
//
// Material or positional evaluation, a fixed-depth alpha-beta search and a
// `Player` built on top of them.

mod ai_player;
mod evaluation;
mod piece_square_tables;
pub mod search;

pub use ai_player::{AiPlayer, Difficulty};
pub use evaluation::{Evaluator, MaterialTable, PieceValuation, PieceValues, PositionalTable};
pub use piece_square_tables::pst_value;
pub use search::{best_move, SearchResult, MATE_SCORE};
