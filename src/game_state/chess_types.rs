//! Core value types shared across the engine.
//!
//! Squares are (row, col) pairs with row 0 at the dark back rank, and
//! castling rights are a plain `Copy` value so historical snapshots can
//! never be corrupted by later mutation of the current value.

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta a pawn of this color advances by. Light marches toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row a pawn of this color may double-push from.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Far rank where a pawn of this color promotes.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece as stored in a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate as (row, col), both in `0..8`.
pub type Square = (i8, i8);

/// Whether a coordinate pair lies on the board.
#[inline]
pub const fn on_board(square: Square) -> bool {
    square.0 >= 0 && square.0 < 8 && square.1 >= 0 && square.1 < 8
}

/// Offset a square by (d_row, d_col), returning `None` off the board.
#[inline]
pub fn offset_square(square: Square, d_row: i8, d_col: i8) -> Option<Square> {
    let moved = (square.0 + d_row, square.1 + d_col);
    if on_board(moved) {
        Some(moved)
    } else {
        None
    }
}

/// Castling availability for both colors.
///
/// A `Copy` value type on purpose: `GameState` logs one snapshot per applied
/// move, and logged entries must stay frozen once written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    #[inline]
    pub const fn all() -> Self {
        Self {
            light_kingside: true,
            light_queenside: true,
            dark_kingside: true,
            dark_queenside: true,
        }
    }

    #[inline]
    pub const fn none() -> Self {
        Self {
            light_kingside: false,
            light_queenside: false,
            dark_kingside: false,
            dark_queenside: false,
        }
    }

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_kingside,
            Color::Dark => self.dark_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_queenside,
            Color::Dark => self.dark_queenside,
        }
    }
}
