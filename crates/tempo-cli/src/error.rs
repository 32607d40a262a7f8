//! Errors surfaced by the move-string parser and the text loop.

/// Errors that can occur while parsing user input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The move string was not 4 or 5 characters, or used characters outside
    /// `a-h`, `1-8`, `q r b n`.
    #[error("unparseable move: {input}")]
    UnparseableMove {
        /// The raw token the user entered.
        input: String,
    },

    /// The move parsed but does not appear in `legal_moves(pos)`.
    #[error("illegal move: {input}")]
    IllegalMove {
        /// The raw token the user entered.
        input: String,
    },
}
