use crate::game_state::chess_types::{offset_square, Color, Square};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Pseudo-legal knight moves from `from` for `side`.
pub fn generate_knight_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        let Some(to) = offset_square(from, d_row, d_col) else {
            continue;
        };

        let blocked_by_ally =
            matches!(game_state.board.piece_at(to), Some(piece) if piece.color == side);
        if !blocked_by_ally {
            out.extend(ChessMove::from_squares(from, to, &game_state.board));
        }
    }
}
