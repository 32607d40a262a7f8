//! The text-based user loop: reads moves, applies them, and asks the
//! engine for its reply.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use tempo_core::{apply, legal_moves, load, save, Position};
use tempo_engine::find_best_move;

use crate::command::resolve_move;

/// Fixed file path `save` writes to.
const SAVE_PATH: &str = "position.txt";

/// A single play session: human plays White, the engine plays Black.
pub struct CliSession {
    pos: Position,
}

impl CliSession {
    /// Load the position from [`SAVE_PATH`], falling back to the starting
    /// position if the file is absent or malformed.
    pub fn new() -> Self {
        let pos = load(SAVE_PATH).unwrap_or_else(|_| Position::starting_position());
        Self { pos }
    }

    /// Run the loop until `quit`, a null engine move (checkmate/stalemate),
    /// or stdin closes. Returns the process exit code.
    pub fn run(mut self) -> i32 {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            let legal = legal_moves(&mut self.pos);
            if legal.is_empty() {
                info!("no legal moves: game over");
                println!("game over");
                return 0;
            }

            print!("> ");
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(_)) | None => return 0,
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match input {
                "quit" => return 0,
                "save" => {
                    match save(SAVE_PATH, &self.pos) {
                        Ok(()) => println!("saved to {SAVE_PATH}"),
                        Err(e) => warn!(error = %e, "failed to save position"),
                    }
                    continue;
                }
                _ => {}
            }

            let mv = match resolve_move(&legal, input) {
                Ok(mv) => mv,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };
            apply(&mut self.pos, mv).expect("apply: move drawn from legal_moves(&self.pos)");

            let engine_move = find_best_move(&mut self.pos);
            if engine_move.is_null() {
                println!("game over");
                return 0;
            }
            println!("{engine_move}");
            apply(&mut self.pos, engine_move).expect("apply: move returned by find_best_move for this pos");
        }
    }
}

impl Default for CliSession {
    fn default() -> Self {
        Self::new()
    }
}
