//! In-place move application and reversal.
//!
//! `apply_move` and `undo_move` are the only writers of the board, the king
//! caches, the castling rights, and both history logs. Undo restores every
//! field it touches from the move record and the rights log; the en-passant
//! target is the one exception, restored only for the two pawn special
//! cases (see `undo_move`).

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

/// Apply `mv` to `game_state`.
///
/// `mv` must have been constructed against the current board; applying a
/// move never validated against the legal-move list is out of contract.
pub fn apply_move(game_state: &mut GameState, mv: &ChessMove) {
    game_state.board.set_piece(mv.from, None);
    game_state.board.set_piece(mv.to, Some(mv.moved_piece));
    game_state.move_log.push(*mv);
    game_state.side_to_move = game_state.side_to_move.opposite();

    if mv.moved_piece.kind == PieceKind::King {
        game_state.set_king_square(mv.moved_piece.color, mv.to);
    }

    // Promotion always lands a queen; underpromotion is unsupported.
    if mv.is_pawn_promotion {
        game_state.board.set_piece(
            mv.to,
            Some(Piece::new(mv.moved_piece.color, PieceKind::Queen)),
        );
    }

    // The en-passant victim stands beside the origin, not on the landing square.
    if mv.is_en_passant {
        game_state.board.set_piece((mv.from.0, mv.to.1), None);
    }

    // A fresh double push opens the square behind the pawn for one ply.
    if mv.moved_piece.kind == PieceKind::Pawn && (mv.from.0 - mv.to.0).abs() == 2 {
        game_state.en_passant_square = Some(((mv.from.0 + mv.to.0) / 2, mv.from.1));
    } else {
        game_state.en_passant_square = None;
    }

    if mv.is_castle {
        if mv.to.1 - mv.from.1 == 2 {
            // Kingside: the corner rook hops to the king's near side.
            let rook = game_state.board.piece_at((mv.to.0, mv.to.1 + 1));
            game_state.board.set_piece((mv.to.0, mv.to.1 - 1), rook);
            game_state.board.set_piece((mv.to.0, mv.to.1 + 1), None);
        } else {
            let rook = game_state.board.piece_at((mv.to.0, mv.to.1 - 2));
            game_state.board.set_piece((mv.to.0, mv.to.1 + 1), rook);
            game_state.board.set_piece((mv.to.0, mv.to.1 - 2), None);
        }
    }

    update_castling_rights(game_state, mv);
    let snapshot = game_state.castling_rights;
    game_state.castling_rights_log.push(snapshot);
}

/// Reverse the most recently applied move, returning it.
///
/// A no-op returning `None` when the move log is empty; that is a normal
/// boundary condition, not an error.
pub fn undo_move(game_state: &mut GameState) -> Option<ChessMove> {
    let mv = game_state.move_log.pop()?;

    game_state.board.set_piece(mv.from, Some(mv.moved_piece));
    game_state.board.set_piece(mv.to, mv.captured_piece);
    game_state.side_to_move = game_state.side_to_move.opposite();

    if mv.moved_piece.kind == PieceKind::King {
        game_state.set_king_square(mv.moved_piece.color, mv.from);
    }

    if mv.is_en_passant {
        // The landing square stays empty; the victim returns beside the
        // origin, and its double-push target becomes capturable again.
        game_state.board.set_piece(mv.to, None);
        game_state.board.set_piece((mv.from.0, mv.to.1), mv.captured_piece);
        game_state.en_passant_square = Some(mv.to);
    }
    if mv.moved_piece.kind == PieceKind::Pawn && (mv.from.0 - mv.to.0).abs() == 2 {
        game_state.en_passant_square = None;
    }

    // Drop the snapshot made for the undone move; the new top is current again.
    game_state.castling_rights_log.pop();
    game_state.castling_rights = *game_state
        .castling_rights_log
        .last()
        .expect("castling rights log is seeded with the initial entry");

    if mv.is_castle {
        if mv.to.1 - mv.from.1 == 2 {
            let rook = game_state.board.piece_at((mv.to.0, mv.to.1 - 1));
            game_state.board.set_piece((mv.to.0, mv.to.1 + 1), rook);
            game_state.board.set_piece((mv.to.0, mv.to.1 - 1), None);
        } else {
            let rook = game_state.board.piece_at((mv.to.0, mv.to.1 + 1));
            game_state.board.set_piece((mv.to.0, mv.to.1 - 2), rook);
            game_state.board.set_piece((mv.to.0, mv.to.1 + 1), None);
        }
    }

    Some(mv)
}

/// Revoke rights on king moves and on rook moves from their home squares.
///
/// Revoking an already-revoked right is a no-op, so the rook origin check
/// needs no "first move" tracking.
fn update_castling_rights(game_state: &mut GameState, mv: &ChessMove) {
    let rights = &mut game_state.castling_rights;
    match (mv.moved_piece.color, mv.moved_piece.kind) {
        (Color::Light, PieceKind::King) => {
            rights.light_kingside = false;
            rights.light_queenside = false;
        }
        (Color::Dark, PieceKind::King) => {
            rights.dark_kingside = false;
            rights.dark_queenside = false;
        }
        (Color::Light, PieceKind::Rook) if mv.from == (7, 0) => rights.light_queenside = false,
        (Color::Light, PieceKind::Rook) if mv.from == (7, 7) => rights.light_kingside = false,
        (Color::Dark, PieceKind::Rook) if mv.from == (0, 0) => rights.dark_queenside = false,
        (Color::Dark, PieceKind::Rook) if mv.from == (0, 7) => rights.dark_kingside = false,
        _ => {}
    }
}
