//! Uniform random legal-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut scratch = game_state.clone();
        let legal_moves = self.move_generator.generate_legal_moves(&mut scratch);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
