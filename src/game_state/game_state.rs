//! Central game state orchestration.
//!
//! `GameState` owns the board, the move and castling-rights logs, the
//! en-passant target, and the cached king squares used for O(1) check
//! lookups. Board mutation happens exclusively through
//! `move_generation::legal_move_apply` so the caches and logs stay in
//! lockstep with the grid.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, PieceKind, Square};
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // Denormalized king locations, maintained by apply/undo.
    pub light_king_square: Square,
    pub dark_king_square: Square,

    pub castling_rights: CastlingRights,
    /// One snapshot per applied move plus the seed entry, so its length is
    /// always `move_log.len() + 1`. Undo pops it and restores the new top.
    pub castling_rights_log: Vec<CastlingRights>,

    pub move_log: Vec<ChessMove>,
    pub en_passant_square: Option<Square>,

    // Written only by the legal-move generator.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameState {
    /// Standard initial position, light to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::Light,
            light_king_square: (7, 4),
            dark_king_square: (0, 4),
            castling_rights: CastlingRights::all(),
            castling_rights_log: vec![CastlingRights::all()],
            move_log: Vec::new(),
            en_passant_square: None,
            checkmate: false,
            stalemate: false,
        }
    }

    /// Build a state from an arbitrary position, locating both kings by scan.
    ///
    /// Entry point for tests and custom setups; errors when either king is
    /// missing from the board.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> Result<Self, String> {
        let mut light_king = None;
        let mut dark_king = None;
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = board.piece_at((row, col)) {
                    if piece.kind == PieceKind::King {
                        match piece.color {
                            Color::Light => light_king = Some((row, col)),
                            Color::Dark => dark_king = Some((row, col)),
                        }
                    }
                }
            }
        }

        let light_king_square = light_king.ok_or("position has no light king")?;
        let dark_king_square = dark_king.ok_or("position has no dark king")?;

        Ok(Self {
            board,
            side_to_move,
            light_king_square,
            dark_king_square,
            castling_rights,
            castling_rights_log: vec![castling_rights],
            move_log: Vec::new(),
            en_passant_square: None,
            checkmate: false,
            stalemate: false,
        })
    }

    /// Cached king square for `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::Light => self.light_king_square,
            Color::Dark => self.dark_king_square,
        }
    }

    #[inline]
    pub fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::Light => self.light_king_square = square,
            Color::Dark => self.dark_king_square = square,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};

    #[test]
    fn new_game_starts_with_full_rights_and_seeded_log() {
        let game = GameState::new_game();

        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.light_king_square, (7, 4));
        assert_eq!(game.dark_king_square, (0, 4));
        assert_eq!(game.castling_rights, CastlingRights::all());
        assert_eq!(game.castling_rights_log.len(), 1);
        assert!(game.move_log.is_empty());
        assert_eq!(game.en_passant_square, None);
        assert!(!game.checkmate);
        assert!(!game.stalemate);
    }

    #[test]
    fn from_position_locates_kings_by_scan() {
        let mut board = Board::empty();
        board.set_piece((3, 3), Some(Piece::new(Color::Light, PieceKind::King)));
        board.set_piece((5, 6), Some(Piece::new(Color::Dark, PieceKind::King)));

        let game = GameState::from_position(board, Color::Dark, CastlingRights::none())
            .expect("both kings are on the board");
        assert_eq!(game.light_king_square, (3, 3));
        assert_eq!(game.dark_king_square, (5, 6));
        assert_eq!(game.castling_rights_log.len(), 1);
    }

    #[test]
    fn from_position_rejects_a_board_without_kings() {
        let mut board = Board::empty();
        board.set_piece((3, 3), Some(Piece::new(Color::Light, PieceKind::King)));

        let result = GameState::from_position(board, Color::Light, CastlingRights::none());
        assert!(result.is_err());
    }
}
