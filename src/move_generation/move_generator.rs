//! Move-generator abstraction consumed by search and UI layers.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Strategy seam for legal-move production.
///
/// Takes `&mut GameState` because legality filtering speculatively applies
/// and undoes every candidate on the state itself; implementations must
/// leave the state exactly as they found it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove>;
}
