//! Helpers shared by the sliding-piece generators.

use crate::game_state::chess_types::{offset_square, Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Walk rays from `from` in each direction, emitting quiet moves through
/// empty squares and stopping at the first occupied square: inclusively
/// when it holds an enemy piece, exclusively when it holds an ally.
pub fn generate_sliding_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        for step in 1..8i8 {
            let Some(to) = offset_square(from, d_row * step, d_col * step) else {
                break;
            };

            match game_state.board.piece_at(to) {
                None => {
                    out.extend(ChessMove::from_squares(from, to, &game_state.board));
                }
                Some(piece) => {
                    if piece.color != side {
                        out.extend(ChessMove::from_squares(from, to, &game_state.board));
                    }
                    break;
                }
            }
        }
    }
}
