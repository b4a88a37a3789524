//! Immutable single-ply move records.
//!
//! A `ChessMove` is constructed against the exact board it was generated
//! from: the moved and captured pieces are read at construction time, which
//! is what makes undo possible without extra history. Equality compares
//! origin and destination only, since the flags are derived data; that is
//! also how user input is matched against the legal-move list.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_pawn_promotion: bool,
}

impl ChessMove {
    /// Plain move or capture between two squares.
    ///
    /// Returns `None` when the origin square is empty, so arbitrary user
    /// square pairs can be turned into candidates safely.
    #[inline]
    pub fn from_squares(from: Square, to: Square, board: &Board) -> Option<Self> {
        Self::build(from, to, board, false, false)
    }

    /// Pawn capture onto the en-passant target square.
    #[inline]
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Option<Self> {
        Self::build(from, to, board, true, false)
    }

    /// King two-column hop; the rook relocation is handled on apply.
    #[inline]
    pub fn castle(from: Square, to: Square, board: &Board) -> Option<Self> {
        Self::build(from, to, board, false, true)
    }

    fn build(
        from: Square,
        to: Square,
        board: &Board,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Option<Self> {
        let moved_piece = board.piece_at(from)?;

        let captured_piece = if is_en_passant {
            // The victim pawn stands beside the origin, not on the landing
            // square, which is empty.
            Some(Piece::new(moved_piece.color.opposite(), PieceKind::Pawn))
        } else {
            board.piece_at(to)
        };

        let is_pawn_promotion =
            moved_piece.kind == PieceKind::Pawn && to.0 == moved_piece.color.promotion_row();

        Some(Self {
            from,
            to,
            moved_piece,
            captured_piece,
            is_en_passant,
            is_castle,
            is_pawn_promotion,
        })
    }
}

impl PartialEq for ChessMove {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for ChessMove {}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn equality_compares_squares_only() {
        let board = Board::starting_position();
        let plain = ChessMove::from_squares((6, 4), (4, 4), &board).expect("e2 is occupied");
        let mut flagged = plain;
        flagged.is_castle = true;

        assert_eq!(plain, flagged);
    }

    #[test]
    fn construction_from_an_empty_origin_yields_none() {
        let board = Board::starting_position();
        assert!(ChessMove::from_squares((4, 4), (3, 4), &board).is_none());
    }

    #[test]
    fn promotion_flag_is_derived_from_the_far_rank() {
        let mut board = Board::empty();
        board.set_piece((1, 0), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        board.set_piece((6, 7), Some(Piece::new(Color::Dark, PieceKind::Pawn)));

        let light = ChessMove::from_squares((1, 0), (0, 0), &board).expect("a7 is occupied");
        assert!(light.is_pawn_promotion);

        let dark = ChessMove::from_squares((6, 7), (7, 7), &board).expect("h2 is occupied");
        assert!(dark.is_pawn_promotion);

        let single_push = ChessMove::from_squares((6, 7), (5, 7), &board).expect("h2 is occupied");
        assert!(!single_push.is_pawn_promotion);
    }

    #[test]
    fn en_passant_capture_records_the_pawn_beside_the_origin() {
        let mut board = Board::empty();
        board.set_piece((3, 4), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        board.set_piece((3, 3), Some(Piece::new(Color::Dark, PieceKind::Pawn)));

        let capture = ChessMove::en_passant((3, 4), (2, 3), &board).expect("e5 is occupied");
        assert_eq!(
            capture.captured_piece,
            Some(Piece::new(Color::Dark, PieceKind::Pawn))
        );
        assert!(capture.is_en_passant);
    }
}
