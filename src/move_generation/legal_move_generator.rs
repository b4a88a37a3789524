//! Full legal move generation pipeline.
//!
//! Orchestrates the row-major pseudo-legal board scan, appends castling,
//! then filters candidates by speculatively applying each one and rejecting
//! any that leave the mover's own king in check. Also the sole writer of
//! the checkmate and stalemate flags.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove> {
        // The speculative apply/undo cycle below disturbs these two fields in
        // ways a single undo does not fully restore; snapshot them here and
        // put them back before returning.
        let saved_en_passant = game_state.en_passant_square;
        let saved_castling_rights = game_state.castling_rights;

        let side = game_state.side_to_move;
        let mut candidates = Vec::new();
        generate_pseudo_legal_moves(game_state, side, &mut candidates);
        generate_castle_moves(game_state, side, &mut candidates);

        let mut legal = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            apply_move(game_state, &candidate);
            let leaves_own_king_attacked = is_king_in_check(game_state, side);
            undo_move(game_state);

            if !leaves_own_king_attacked {
                legal.push(candidate);
            }
        }

        if legal.is_empty() {
            if is_king_in_check(game_state, side) {
                game_state.checkmate = true;
            } else {
                game_state.stalemate = true;
            }
        } else {
            // Clear flags a prior terminal position may have left behind.
            game_state.checkmate = false;
            game_state.stalemate = false;
        }

        game_state.en_passant_square = saved_en_passant;
        game_state.castling_rights = saved_castling_rights;

        legal
    }
}

/// Row-major board scan dispatching on the occupant's kind.
///
/// Castling is not produced here; `is_square_attacked` relies on that to
/// stay recursion-free.
pub fn generate_pseudo_legal_moves(game_state: &GameState, side: Color, out: &mut Vec<ChessMove>) {
    for row in 0..8i8 {
        for col in 0..8i8 {
            let Some(piece) = game_state.board.piece_at((row, col)) else {
                continue;
            };
            if piece.color != side {
                continue;
            }

            let from = (row, col);
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game_state, side, from, out),
                PieceKind::Knight => generate_knight_moves(game_state, side, from, out),
                PieceKind::Bishop => generate_bishop_moves(game_state, side, from, out),
                PieceKind::Rook => generate_rook_moves(game_state, side, from, out),
                PieceKind::Queen => generate_queen_moves(game_state, side, from, out),
                PieceKind::King => generate_king_moves(game_state, side, from, out),
            }
        }
    }
}
