use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::evaluation::Evaluator;
use super::search::{best_move, SearchResult};
use crate::agent::player::{GameResult, Player};
use crate::config::EngineConfig;
use crate::game_repr::{GameState, Move, MoveError};

/// AI difficulty levels that map to search depth
///
/// Higher levels search deeper and take longer per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Depth 1: grabs material, blind to replies
    Easy,
    /// Depth 2: sees the opponent's answer
    Medium,
    /// Depth 3
    Hard,
    /// Depth 4
    Expert,
}

impl Difficulty {
    /// Get the search depth in plies for this difficulty level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Player backed by alpha-beta search over a private copy of the position
pub struct AiPlayer {
    difficulty: Difficulty,
    /// Overrides the difficulty's depth when set
    depth: Option<u8>,
    evaluator: Evaluator,
    rng: StdRng,
    name: String,
    last_result: Option<SearchResult>,
}

impl AiPlayer {
    /// `seed` fixes the tie-breaking order; without it every game differs
    pub fn new(difficulty: Difficulty, evaluator: Evaluator, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            difficulty,
            depth: None,
            evaluator,
            rng,
            name: format!("AI ({})", difficulty.name()),
            last_result: None,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty, Evaluator::default(), None)
    }

    /// Builds the player for one side of a configured game
    pub fn from_config(config: &EngineConfig, difficulty: Difficulty, seed_offset: u64) -> Self {
        let seed = config.seed.map(|seed| seed.wrapping_add(seed_offset));
        let mut player = Self::new(difficulty, config.evaluator(), seed);
        player.depth = config.depth;
        player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth.unwrap_or_else(|| self.difficulty.max_depth())
    }

    /// Statistics of the most recent search
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Searches a copy of `state`; the caller's state is never touched
    pub fn search(&mut self, state: &GameState) -> Result<SearchResult, MoveError> {
        let mut scratch = state.clone();
        best_move(&mut scratch, self.depth(), &self.evaluator, &mut self.rng)
    }
}

impl Player for AiPlayer {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        match self.search(state) {
            Ok(result) => {
                debug!(
                    "{} chose {:?} (score {}, {} nodes)",
                    self.name,
                    result.best_move.map(|mv| mv.to_string()),
                    result.score,
                    result.nodes_searched
                );
                let mv = result.best_move;
                self.last_result = Some(result);
                mv
            }
            Err(err) => {
                warn!("{} search failed: {err}", self.name);
                None
            }
        }
    }

    fn game_ended(&mut self, result: GameResult) {
        info!("{} saw the game end: {result:?}", self.name);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
