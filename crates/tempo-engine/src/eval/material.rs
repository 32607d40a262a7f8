//! Material balance evaluation.
//!
//! Counts weighted piece material for each side and adds a bishop-pair bonus.
//! All scores are returned from White's perspective (positive = White ahead).

use tempo_core::{Color, Piece, PieceKind, Position, Square};

use crate::eval::score::{Score, S};

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | mg  | eg  |
/// |--------|-----|-----|
/// | Pawn   | 100 | 120 |
/// | Knight | 320 | 310 |
/// | Bishop | 330 | 320 |
/// | Rook   | 500 | 520 |
/// | Queen  | 900 | 950 |
/// | King   |   0 |   0 |
///
/// Matches the piece values the search uses for MVV-LVA ordering.
pub const MATERIAL_VALUE: [Score; PieceKind::COUNT] = [
    S(100, 120), // Pawn
    S(320, 310), // Knight
    S(330, 320), // Bishop
    S(500, 520), // Rook
    S(900, 950), // Queen
    S(0, 0),     // King
];

/// Bonus awarded to a side that has two or more bishops.
const BISHOP_PAIR_BONUS: Score = S(50, 60);

/// Evaluate material balance from White's perspective.
///
/// Walks every square once, tallying weighted material per side and bishop
/// counts for the pair bonus.
pub fn material(pos: &Position) -> Score {
    let mut score = Score::ZERO;
    let mut white_bishops = 0;
    let mut black_bishops = 0;

    for row in 0..8 {
        for col in 0..8 {
            let Piece::Occupied(kind, color) = pos.piece_at(Square::new(row, col)) else {
                continue;
            };
            let value = MATERIAL_VALUE[kind.index()];
            score += match color {
                Color::White => value,
                Color::Black => -value,
            };
            if kind == PieceKind::Bishop {
                match color {
                    Color::White => white_bishops += 1,
                    Color::Black => black_bishops += 1,
                }
            }
        }
    }

    if white_bishops >= 2 {
        score += BISHOP_PAIR_BONUS;
    }
    if black_bishops >= 2 {
        score -= BISHOP_PAIR_BONUS;
    }

    score
}
