//! The rules oracle: static queries over a position, no mutation.

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The four diagonal ray directions, followed by the four orthogonal ones.
const RAY_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// `true` iff some piece of `attacker` could capture a piece standing on
/// `(row, col)`, under pseudo-legal movement rules. The square is assumed
/// occupied for the purposes of the query; attacks are purely geometric.
pub fn is_square_attacked(pos: &Position, row: i32, col: i32, attacker: Color) -> bool {
    // Rays: diagonals first, then orthogonals (see RAY_DIRECTIONS).
    for (i, &(dr, dc)) in RAY_DIRECTIONS.iter().enumerate() {
        let is_diagonal = i < 4;
        let mut r = row + dr;
        let mut c = col + dc;
        while (0..8).contains(&r) && (0..8).contains(&c) {
            let piece = pos.piece_at(Square::new(r, c));
            if let Piece::Occupied(kind, color) = piece {
                if color == attacker {
                    let matches_ray = match kind {
                        PieceKind::Queen => true,
                        PieceKind::Bishop => is_diagonal,
                        PieceKind::Rook => !is_diagonal,
                        _ => false,
                    };
                    if matches_ray {
                        return true;
                    }
                }
                break;
            }
            r += dr;
            c += dc;
        }
    }

    // Knights.
    for &(dr, dc) in &KNIGHT_OFFSETS {
        let r = row + dr;
        let c = col + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            if let Piece::Occupied(PieceKind::Knight, color) = pos.piece_at(Square::new(r, c)) {
                if color == attacker {
                    return true;
                }
            }
        }
    }

    // Pawns: sample the two squares a pawn of `attacker` would attack from.
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

    // King adjacency.
    for &(dr, dc) in &KING_OFFSETS {
        let r = row + dr;
        let c = col + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            if let Piece::Occupied(PieceKind::King, color) = pos.piece_at(Square::new(r, c)) {
                if color == attacker {
                    return true;
                }
            }
        }
    }

    false
}

/// `true` iff the king of `color` is attacked by the opposite color.
/// `false` if `color` has no king on the board.
pub fn is_king_in_check(pos: &Position, color: Color) -> bool {
    match pos.king_square(color) {
        Some(sq) => is_square_attacked(pos, sq.row, sq.col, !color),
        None => false,
    }
}
