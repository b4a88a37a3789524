//! Coordinate notation for squares and moves.
//!
//! Files a-h map to columns 0-7 and rank digits 1-8 map to rows 7-0, so
//! rank 8 is the dark back rank at row 0. Move notation is the origin
//! square followed by the destination square, with no capture, check, or
//! promotion suffixes.

use crate::game_state::chess_types::{on_board, Square};
use crate::moves::chess_move::ChessMove;

/// Convert a square to coordinate notation (for example `(7, 4)` to "e1").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !on_board(square) {
        return Err(format!("square off the board: ({}, {})", square.0, square.1));
    }

    let file_char = char::from(b'a' + square.1 as u8);
    let rank_char = char::from(b'8' - square.0 as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Convert coordinate notation (for example "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("invalid algebraic rank: {}", rank as char));
    }

    Ok(((b'8' - rank) as i8, (file - b'a') as i8))
}

/// Render a move as its two squares back to back (for example "e2e4").
#[inline]
pub fn move_to_algebraic(mv: &ChessMove) -> Result<String, String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(mv.from)?,
        square_to_algebraic(mv.to)?
    ))
}
