//! Fixed-depth material minimax engine.
//!
//! A thin full-width tree walk over the legal-move generator and the
//! apply/undo pair: light maximizes and dark minimizes the material balance,
//! with mate and stalemate scores at terminal nodes. No pruning and no move
//! ordering; strength comes entirely from depth.

use log::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, CHECKMATE_SCORE, STALEMATE_SCORE};

pub const DEFAULT_DEPTH: u8 = 2;

pub struct MinimaxEngine {
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
        }
    }

    /// Score `game_state` from light's perspective by walking `depth` more
    /// plies. Terminal positions score as mate against the side that cannot
    /// move, or as a draw on stalemate.
    fn minimax(&self, game_state: &mut GameState, depth: u8, nodes: &mut u64) -> i32 {
        *nodes += 1;

        let legal_moves = self.move_generator.generate_legal_moves(game_state);
        if game_state.checkmate {
            return match game_state.side_to_move {
                Color::Light => -CHECKMATE_SCORE,
                Color::Dark => CHECKMATE_SCORE,
            };
        }
        if game_state.stalemate {
            return STALEMATE_SCORE;
        }
        if depth == 0 {
            return self.scorer.score(game_state);
        }

        let maximizing = game_state.side_to_move == Color::Light;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        for mv in legal_moves {
            apply_move(game_state, &mv);
            let score = self.minimax(game_state, depth - 1, nodes);
            undo_move(game_state);

            if maximizing {
                best_score = best_score.max(score);
            } else {
                best_score = best_score.min(score);
            }
        }
        best_score
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "QuinceChess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(DEFAULT_DEPTH).max(1);
        let mut scratch = game_state.clone();
        let legal_moves = self.move_generator.generate_legal_moves(&mut scratch);

        let mut out = EngineOutput::default();
        if legal_moves.is_empty() {
            return Ok(out);
        }

        let maximizing = scratch.side_to_move == Color::Light;
        let mut nodes = 0u64;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        // Strict improvement keeps the earliest best move in generation
        // order, so the choice is deterministic.
        for mv in &legal_moves {
            apply_move(&mut scratch, mv);
            let score = self.minimax(&mut scratch, depth - 1, &mut nodes);
            undo_move(&mut scratch);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(*mv);
            }
        }

        debug!("minimax depth {depth} searched {nodes} nodes, score {best_score}");
        out.info_lines
            .push(format!("minimax depth {depth} score {best_score} nodes {nodes}"));
        out.best_move = best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;

    fn play_scripted(game: &mut GameState, script: &[((i8, i8), (i8, i8))]) {
        for &(from, to) in script {
            let legal = LegalMoveGenerator.generate_legal_moves(game);
            let mv = *legal
                .iter()
                .find(|mv| mv.from == from && mv.to == to)
                .expect("scripted move should be legal");
            apply_move(game, &mv);
        }
    }

    #[test]
    fn finds_the_mating_queen_move() {
        let mut game = GameState::new_game();
        // 1. f3 e5 2. g4, dark to move with mate in one on h4.
        play_scripted(
            &mut game,
            &[((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6))],
        );

        let output = MinimaxEngine::new()
            .choose_move(&game, &GoParams { depth: Some(2) })
            .expect("searching a live position should succeed");
        let best = output.best_move.expect("dark has legal moves");
        assert_eq!(best.from, (0, 3));
        assert_eq!(best.to, (4, 7));
    }

    #[test]
    fn prefers_winning_a_hanging_queen() {
        let mut board = Board::empty();
        board.set_piece((7, 7), Some(Piece::new(Color::Light, PieceKind::King)));
        board.set_piece((3, 3), Some(Piece::new(Color::Light, PieceKind::Queen)));
        board.set_piece((0, 7), Some(Piece::new(Color::Dark, PieceKind::King)));
        board.set_piece((0, 3), Some(Piece::new(Color::Dark, PieceKind::Queen)));

        let game = GameState::from_position(board, Color::Dark, CastlingRights::none())
            .expect("both kings are on the board");

        let output = MinimaxEngine::new()
            .choose_move(&game, &GoParams::default())
            .expect("searching a live position should succeed");
        let best = output.best_move.expect("dark has legal moves");
        assert_eq!(best.from, (0, 3));
        assert_eq!(best.to, (3, 3), "the undefended queen must be taken");
    }

    #[test]
    fn returns_no_move_when_already_mated() {
        let mut game = GameState::new_game();
        play_scripted(
            &mut game,
            &[
                ((6, 5), (5, 5)),
                ((1, 4), (3, 4)),
                ((6, 6), (4, 6)),
                ((0, 3), (4, 7)),
            ],
        );

        let output = MinimaxEngine::new()
            .choose_move(&game, &GoParams::default())
            .expect("an empty move list is not an error");
        assert!(output.best_move.is_none());
    }
}
