//! Interactive terminal driver: a human plays light against the minimax
//! engine. Input is coordinate notation ("e2e4"); `undo` takes back the
//! last full move pair and `quit` exits.

use std::io::{self, BufRead, Write};

use quince_chess::engines::engine_minimax::MinimaxEngine;
use quince_chess::engines::engine_trait::{Engine, GoParams};
use quince_chess::game_state::chess_types::Color;
use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::legal_move_apply::{apply_move, undo_move};
use quince_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use quince_chess::move_generation::move_generator::MoveGenerator;
use quince_chess::moves::chess_move::ChessMove;
use quince_chess::utils::algebraic::{algebraic_to_square, move_to_algebraic};
use quince_chess::utils::render_game_state::render_game_state;

fn parse_move_input(input: &str, game: &GameState) -> Result<ChessMove, String> {
    if !input.is_ascii() || input.len() != 4 {
        return Err(format!("expected origin and destination, e.g. e2e4, got: {input}"));
    }

    let from = algebraic_to_square(&input[..2])?;
    let to = algebraic_to_square(&input[2..])?;
    ChessMove::from_squares(from, to, &game.board)
        .ok_or_else(|| format!("no piece on {}", &input[..2]))
}

fn main() {
    env_logger::init();

    let mut game = GameState::new_game();
    let generator = LegalMoveGenerator;
    let mut engine = MinimaxEngine::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("quince_chess: you play light; enter moves like e2e4, or 'undo' / 'quit'.");

    loop {
        let legal_moves = generator.generate_legal_moves(&mut game);
        println!("{}\n", render_game_state(&game));

        if game.checkmate {
            let winner = match game.side_to_move {
                Color::Light => "dark",
                Color::Dark => "light",
            };
            println!("checkmate, {winner} wins");
            break;
        }
        if game.stalemate {
            println!("stalemate");
            break;
        }

        if game.side_to_move == Color::Light {
            print!("> ");
            io::stdout().flush().ok();

            let Some(Ok(line)) = lines.next() else {
                break;
            };
            let input = line.trim();

            match input {
                "" => {}
                "quit" => break,
                "undo" => {
                    // Take back the engine's reply and the player's move.
                    undo_move(&mut game);
                    undo_move(&mut game);
                }
                _ => match parse_move_input(input, &game) {
                    // Apply the generator's copy: its flags are authoritative.
                    Ok(candidate) => match legal_moves.iter().find(|mv| **mv == candidate) {
                        Some(&legal) => apply_move(&mut game, &legal),
                        None => println!("illegal move: {input}"),
                    },
                    Err(message) => println!("{message}"),
                },
            }
        } else {
            let output = match engine.choose_move(&game, &GoParams::default()) {
                Ok(output) => output,
                Err(message) => {
                    println!("engine error: {message}");
                    break;
                }
            };

            match output.best_move {
                Some(reply) => {
                    let notation = move_to_algebraic(&reply).unwrap_or_else(|_| "????".to_owned());
                    println!("{} plays {notation}", engine.name());
                    apply_move(&mut game, &reply);
                }
                None => {
                    // Terminal position; the flags report it on the next pass.
                    continue;
                }
            }
        }
    }
}
