//! The text-based CLI loop for tempo: reads long-algebraic moves, applies
//! them, and plays the engine's reply.

pub mod command;
pub mod engine;
pub mod error;

pub use engine::CliSession;
pub use error::CliError;

/// Run the CLI loop to completion and return the process exit code.
pub fn run() -> i32 {
    CliSession::new().run()
}
