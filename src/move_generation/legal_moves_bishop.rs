use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::ChessMove;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pseudo-legal bishop moves from `from` for `side`.
pub fn generate_bishop_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(game_state, side, from, &BISHOP_DIRECTIONS, out);
}
