//! King steps and castling.
//!
//! The 8-offset king steps take part in the row-major board scan like any
//! other piece. Castling is generated separately by the legal-move pipeline:
//! it depends on rights and attack safety rather than a single square's
//! piece, and it must stay out of `is_square_attacked`'s pseudo-legal scan.

use crate::game_state::chess_types::{offset_square, Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::ChessMove;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pseudo-legal single-step king moves from `from` for `side`.
pub fn generate_king_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in &KING_OFFSETS {
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

/// Castle moves for `side`, appended after the board scan.
///
/// A side may not castle out of check, through an attacked square, or onto
/// one. Queenside additionally needs the knight-adjacent square empty, but
/// that square's attack status is irrelevant: the king never crosses it.
pub fn generate_castle_moves(game_state: &GameState, side: Color, out: &mut Vec<ChessMove>) {
    let king_square = game_state.king_square(side);
    let enemy = side.opposite();

    if is_square_attacked(game_state, king_square, enemy) {
        return;
    }

    if game_state.castling_rights.kingside(side) {
        generate_kingside_castle(game_state, side, king_square, out);
    }
    if game_state.castling_rights.queenside(side) {
        generate_queenside_castle(game_state, side, king_square, out);
    }
}

fn generate_kingside_castle(
    game_state: &GameState,
    side: Color,
    king_square: Square,
    out: &mut Vec<ChessMove>,
) {
    let enemy = side.opposite();
    let Some(transit) = offset_square(king_square, 0, 1) else {
        return;
    };
    let Some(destination) = offset_square(king_square, 0, 2) else {
        return;
    };

    if game_state.board.piece_at(transit).is_none()
        && game_state.board.piece_at(destination).is_none()
        && !is_square_attacked(game_state, transit, enemy)
        && !is_square_attacked(game_state, destination, enemy)
    {
        out.extend(ChessMove::castle(king_square, destination, &game_state.board));
    }
}

fn generate_queenside_castle(
    game_state: &GameState,
    side: Color,
    king_square: Square,
    out: &mut Vec<ChessMove>,
) {
    let enemy = side.opposite();
    let Some(transit) = offset_square(king_square, 0, -1) else {
        return;
    };
    let Some(destination) = offset_square(king_square, 0, -2) else {
        return;
    };
    let Some(rook_path) = offset_square(king_square, 0, -3) else {
        return;
    };

    if game_state.board.piece_at(transit).is_none()
        && game_state.board.piece_at(destination).is_none()
        && game_state.board.piece_at(rook_path).is_none()
        && !is_square_attacked(game_state, transit, enemy)
        && !is_square_attacked(game_state, destination, enemy)
    {
        out.extend(ChessMove::castle(king_square, destination, &game_state.board));
    }
}
