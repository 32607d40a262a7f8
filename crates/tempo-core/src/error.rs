//! Error types for the position file format and board validation.

/// Errors from parsing the 13-line position file format (see
/// [`crate::posfile`]).
#[derive(Debug, thiserror::Error)]
pub enum PositionFileError {
    /// The file did not contain exactly 13 lines.
    #[error("expected 13 lines, found {found}")]
    WrongLineCount { found: usize },
    /// A board row was not exactly 8 characters.
    #[error("board row {row} has length {length}, expected 8")]
    BadRowLength { row: usize, length: usize },
    /// A board row contained a character that is not a piece letter or `.`.
    #[error("invalid piece character '{character}' on row {row}")]
    InvalidPieceChar { row: usize, character: char },
    /// The side-to-move line was not `w` or `b`.
    #[error("invalid side to move: \"{found}\"")]
    InvalidSideToMove { found: String },
    /// The castling rights line was not a valid `KQkq`/`-` field.
    #[error("invalid castling rights: \"{found}\"")]
    InvalidCastlingRights { found: String },
    /// The en passant line was not `-` or a valid algebraic square.
    #[error("invalid en passant target: \"{found}\"")]
    InvalidEnPassantTarget { found: String },
    /// The halfmove clock line was not a valid non-negative integer.
    #[error("invalid halfmove clock: \"{found}\"")]
    InvalidHalfmoveClock { found: String },
    /// The fullmove number line was not a valid non-negative integer.
    #[error("invalid fullmove number: \"{found}\"")]
    InvalidFullmoveNumber { found: String },
    /// The parsed position failed structural validation.
    #[error(transparent)]
    InvalidPosition(#[from] PositionError),
    /// The file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural validation errors for a [`crate::position::Position`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A side does not have exactly one king.
    #[error("expected exactly 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: u32 },
}

/// Errors raised by the move machine's internal contracts.
///
/// These are not expected to occur when callers respect the preconditions in
/// §7 of the design (only applying moves drawn from `legal_moves`); they
/// exist so a violation fails loudly instead of corrupting state silently.
/// [`crate::apply::apply`] and [`crate::apply::revert`] return these rather
/// than panicking or no-opping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveMachineError {
    /// `revert` was called with no matching prior `apply`.
    #[error("history stack is empty, nothing to revert")]
    HistoryEmpty,
    /// `apply` would push past the history stack's bound.
    #[error("history stack is full ({limit} entries)")]
    HistoryFull { limit: usize },
}
