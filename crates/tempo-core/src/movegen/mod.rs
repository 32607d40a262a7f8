//! Move generation: pseudo-legal generation per piece kind, then a legality
//! filter driven by make/undo around a king-in-check test.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::apply::{apply, revert};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::rules::is_king_in_check;
use crate::movelist::MoveList;
use crate::square::Square;

/// Every move permitted by piece geometry for the side to move, without
/// regard to whether it leaves the mover's own king in check.
pub fn pseudo_legal_moves(pos: &Position) -> MoveList {
    let mut list = MoveList::new();
    let color = pos.side_to_move;

    for row in 0..8 {
        for col in 0..8 {
            let sq = Square::new(row, col);
            let Piece::Occupied(kind, piece_color) = pos.piece_at(sq) else {
                continue;
            };
            if piece_color != color {
                continue;
            }
            match kind {
                PieceKind::Pawn => pawns::generate(pos, &mut list, sq, color),
                PieceKind::Knight => knights::generate(pos, &mut list, sq, color),
                PieceKind::Bishop => sliders::generate_bishop(pos, &mut list, sq, color),
                PieceKind::Rook => sliders::generate_rook(pos, &mut list, sq, color),
                PieceKind::Queen => sliders::generate_queen(pos, &mut list, sq, color),
                PieceKind::King => king::generate(pos, &mut list, sq, color),
            }
        }
    }

    list
}

/// Pseudo-legal moves, filtered to those that do not leave the mover's own
/// king in check: for each candidate, apply, test, revert.
pub fn legal_moves(pos: &mut Position) -> MoveList {
    let mover = pos.side_to_move;
    let pseudo = pseudo_legal_moves(pos);
    let mut legal = MoveList::new();

    for &mv in &pseudo {
        apply(pos, mv).expect("apply: move drawn from pseudo_legal_moves(pos) for this pos");
        let left_in_check = is_king_in_check(pos, mover);
        revert(pos).expect("revert: matching apply was just pushed above");
        if !left_in_check {
            legal.push(mv);
        }
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::{legal_moves, pseudo_legal_moves};
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let mut pos = Position::starting_position();
        assert_eq!(legal_moves(&mut pos).len(), 20);
    }

    #[test]
    fn pseudo_legal_is_superset_of_legal() {
        let mut pos = Position::starting_position();
        let pseudo = pseudo_legal_moves(&pos);
        let legal = legal_moves(&mut pos);
        for mv in &legal {
            assert!(pseudo.as_slice().contains(mv));
        }
    }

    #[test]
    fn pinned_piece_cannot_move_exposing_king() {
        let mut pos = Position::empty();
        pos.set(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        pos.set(Square::new(6, 4), Piece::new(PieceKind::Bishop, Color::White));
        pos.set(Square::new(0, 4), Piece::new(PieceKind::Rook, Color::Black));
        pos.set(Square::new(0, 0), Piece::new(PieceKind::King, Color::Black));
        pos.castling = CastleRights::NONE;

        let moves = legal_moves(&mut pos);
        assert!(!moves.as_slice().iter().any(|mv| mv.from == Square::new(6, 4)));
    }

    #[test]
    fn no_legal_moves_does_not_crash_on_stalemate() {
        let mut pos = Position::empty();
        pos.set(Square::new(7, 7), Piece::new(PieceKind::King, Color::White));
        pos.set(Square::new(5, 6), Piece::new(PieceKind::King, Color::Black));
        pos.set(Square::new(6, 5), Piece::new(PieceKind::Queen, Color::Black));
        pos.castling = CastleRights::NONE;
        assert_eq!(legal_moves(&mut pos).len(), 0);
    }

    #[test]
    fn position_observationally_unchanged_after_legal_moves_scan() {
        let mut pos = Position::starting_position();
        let before = format!("{pos}");
        let _ = legal_moves(&mut pos);
        assert_eq!(format!("{pos}"), before);
    }
}
