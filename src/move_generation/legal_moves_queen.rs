use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Pseudo-legal queen moves: the union of the rook and bishop rays.
pub fn generate_queen_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    generate_rook_moves(game_state, side, from, out);
    generate_bishop_moves(game_state, side, from, out);
}
