//! Game phase calculation based on remaining non-pawn material.

use tempo_core::{Piece, PieceKind, Position, Square};

/// Maximum game phase value, corresponding to a full starting-position complement
/// of non-pawn material.
///
/// Weights: Knight=1, Bishop=1, Rook=2, Queen=4.
/// Starting totals: 4×1 + 4×1 + 4×2 + 2×4 = 24.
pub const MAX_PHASE: i32 = 24;

/// Calculate the game phase from non-pawn, non-king material on the board.
///
/// Returns a value in `0..=MAX_PHASE`. A value of [`MAX_PHASE`] indicates a
/// full middlegame material set; 0 indicates a pure king-and-pawn ending.
/// The result is clamped so that promoted pieces cannot push the phase above
/// the maximum.
pub fn game_phase(pos: &Position) -> i32 {
    let mut phase = 0;
    for row in 0..8 {
        for col in 0..8 {
            let Piece::Occupied(kind, _) = pos.piece_at(Square::new(row, col)) else {
                continue;
            };
            phase += match kind {
                PieceKind::Knight | PieceKind::Bishop => 1,
                PieceKind::Rook => 2,
                PieceKind::Queen => 4,
                PieceKind::Pawn | PieceKind::King => 0,
            };
        }
    }
    phase.min(MAX_PHASE)
}
