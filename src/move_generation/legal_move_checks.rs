//! Check and attack queries.
//!
//! `is_square_attacked` asks whether any pseudo-legal move of the attacking
//! side lands on the queried square. Castling never produces an attack and
//! is excluded from the scan; pawn forward pushes never target an occupied
//! square, so the pawn generator's capture branch is the only pawn threat
//! the scan represents. That is the correct attack set.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;

/// Whether `color`'s king currently stands attacked.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

/// Whether `attacker_color` has any pseudo-legal move onto `square`.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let mut attacker_moves = Vec::new();
    generate_pseudo_legal_moves(game_state, attacker_color, &mut attacker_moves);
    attacker_moves.iter().any(|mv| mv.to == square)
}
