//! Engine abstraction consumed by the terminal driver and tests.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a move for the side to move in `game_state`.
    ///
    /// Implementations receive a shared reference and must search a private
    /// clone: apply/undo mutate state with no internal locking, and every
    /// searcher needs its own linear undo stack.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
