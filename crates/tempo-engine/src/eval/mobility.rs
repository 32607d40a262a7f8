//! Piece mobility evaluation.
//!
//! Mobility measures how many safe squares each piece can reach. Pieces with
//! greater freedom of movement receive a bonus proportional to their mobility.
//! Safe squares exclude friendly-occupied squares and squares controlled by
//! enemy pawns.

use tempo_core::{Color, Piece, PieceKind, Position, Square};

use crate::eval::score::{Score, S};

/// Per-square mobility bonus for knights.
const KNIGHT_MOBILITY: Score = S(4, 4);

/// Per-square mobility bonus for bishops.
const BISHOP_MOBILITY: Score = S(3, 5);

/// Per-square mobility bonus for rooks.
const ROOK_MOBILITY: Score = S(2, 3);

/// Per-square mobility bonus for queens.
const QUEEN_MOBILITY: Score = S(1, 2);

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1),
];

/// `true` iff a pawn of `attacker` attacks `(row, col)`.
fn attacked_by_pawn(pos: &Position, row: i32, col: i32, attacker: Color) -> bool {
    let d = if attacker == Color::White { 1 } else { -1 };
    for dc in [-1, 1] {
        let r = row + d;
        let c = col + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            if let Piece::Occupied(PieceKind::Pawn, color) = pos.piece_at(Square::new(r, c)) {
                if color == attacker {
                    return true;
                }
            }
        }
    }
    false
}

fn safe_square(pos: &Position, row: i32, col: i32, friendly: Color) -> bool {
    if !(0..8).contains(&row) || !(0..8).contains(&col) {
        return false;
    }
    match pos.piece_at(Square::new(row, col)) {
        Piece::Occupied(_, color) if color == friendly => false,
        _ => !attacked_by_pawn(pos, row, col, !friendly),
    }
}

fn slider_mobility(pos: &Position, from: Square, friendly: Color, directions: &[(i32, i32)]) -> i16 {
    let mut count = 0;
    for &(dr, dc) in directions {
        let mut r = from.row + dr;
        let mut c = from.col + dc;
        while safe_square(pos, r, c, friendly) {
            count += 1;
            if pos.piece_at(Square::new(r, c)) != Piece::Empty {
                break;
            }
            r += dr;
            c += dc;
        }
    }
    count
}

/// Evaluate piece mobility for one side, returning the raw mobility score.
fn evaluate_mobility_for_side(pos: &Position, color: Color) -> Score {
    let mut score = Score::ZERO;

    for row in 0..8 {
        for col in 0..8 {
            let from = Square::new(row, col);
            let Piece::Occupied(kind, piece_color) = pos.piece_at(from) else {
                continue;
            };
            if piece_color != color {
                continue;
            }
            match kind {
                PieceKind::Knight => {
                    let mut count = 0;
                    for &(dr, dc) in &KNIGHT_OFFSETS {
                        if safe_square(pos, row + dr, col + dc, color) {
                            count += 1;
                        }
                    }
                    score += KNIGHT_MOBILITY * count;
                }
                PieceKind::Bishop => {
                    score += BISHOP_MOBILITY * slider_mobility(pos, from, color, &DIAGONALS);
                }
                PieceKind::Rook => {
                    score += ROOK_MOBILITY * slider_mobility(pos, from, color, &ORTHOGONALS);
                }
                PieceKind::Queen => {
                    let mut count = slider_mobility(pos, from, color, &DIAGONALS);
                    count += slider_mobility(pos, from, color, &ORTHOGONALS);
                    score += QUEEN_MOBILITY * count;
                }
                _ => {}
            }
        }
    }

    score
}

/// Evaluate piece mobility from White's perspective.
///
/// Returns the difference `white_mobility - black_mobility`.
pub fn evaluate_mobility(pos: &Position) -> Score {
    evaluate_mobility_for_side(pos, Color::White) - evaluate_mobility_for_side(pos, Color::Black)
}
