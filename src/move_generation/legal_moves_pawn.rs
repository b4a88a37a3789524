//! Pawn move rules: pushes, diagonal captures, and en passant.

use crate::game_state::chess_types::{offset_square, Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Pseudo-legal pawn moves from `from` for `side`.
///
/// Promotion is not branched on here: the move record derives its promotion
/// flag from the destination rank, and apply always promotes to a queen.
pub fn generate_pawn_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    let board = &game_state.board;
    let direction = side.pawn_direction();

    // Pushes. The double push is only reachable through an empty single push.
    if let Some(one_ahead) = offset_square(from, direction, 0) {
        if board.piece_at(one_ahead).is_none() {
            out.extend(ChessMove::from_squares(from, one_ahead, board));

            if from.0 == side.pawn_start_row() {
                if let Some(two_ahead) = offset_square(from, 2 * direction, 0) {
                    if board.piece_at(two_ahead).is_none() {
                        out.extend(ChessMove::from_squares(from, two_ahead, board));
                    }
                }
            }
        }
    }

    // Diagonal captures, including onto the en-passant target square.
    for col_delta in [-1i8, 1i8] {
        let Some(to) = offset_square(from, direction, col_delta) else {
            continue;
        };

        match board.piece_at(to) {
            Some(piece) if piece.color != side => {
                out.extend(ChessMove::from_squares(from, to, board));
            }
            None if game_state.en_passant_square == Some(to) => {
                out.extend(ChessMove::en_passant(from, to, board));
            }
            _ => {}
        }
    }
}
