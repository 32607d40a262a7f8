//! State transition: `apply` and its inverse, `revert`.

use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::error::MoveMachineError;
use crate::history::{HistoryRecord, HISTORY_CAPACITY};
use crate::mv::{Move, MoveFlag};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Which corner a square is, if any, for castling-rights bookkeeping.
fn home_corner(sq: Square) -> Option<(Color, CastleSide)> {
    match (sq.row, sq.col) {
        (7, 0) => Some((Color::White, CastleSide::QueenSide)),
        (7, 7) => Some((Color::White, CastleSide::KingSide)),
        (0, 0) => Some((Color::Black, CastleSide::QueenSide)),
        (0, 7) => Some((Color::Black, CastleSide::KingSide)),
        _ => None,
    }
}

/// The square of the pawn captured en passant, given the capturer's
/// destination and color.
fn en_passant_victim_square(to: Square, mover: Color) -> Square {
    let row = if mover == Color::White { to.row + 1 } else { to.row - 1 };
    Square::new(row, to.col)
}

/// The square the rook crosses (and lands on) for a given castle flag and
/// king's home row.
fn rook_castle_squares(mv: &Move) -> (Square, Square) {
    let row = mv.from.row;
    match mv.flag {
        MoveFlag::CastleKing => (Square::new(row, 7), Square::new(row, 5)),
        MoveFlag::CastleQueen => (Square::new(row, 0), Square::new(row, 3)),
        _ => unreachable!("rook_castle_squares called on non-castle move"),
    }
}

/// Mutate `pos` in place per `mv`'s semantics and push an undo record.
///
/// Precondition: `mv` was returned by [`crate::movegen::legal_moves`] for
/// this exact `pos`. Violating that precondition is not checked here and
/// leaves `pos` in an unspecified state; only the history stack's own bound
/// is reported as an error.
pub fn apply(pos: &mut Position, mv: Move) -> Result<(), MoveMachineError> {
    let mover = pos.side_to_move;
    let prev_castling = pos.castling;
    let prev_en_passant_target = pos.en_passant_target;
    let prev_halfmove_clock = pos.halfmove_clock;
    let prev_fullmove_number = pos.fullmove_number;

    let mover_kind = pos
        .piece_at(mv.from)
        .kind()
        .expect("apply: `from` square is empty");

    let captured;
    let captured_square;

    match mv.flag {
        MoveFlag::CastleKing | MoveFlag::CastleQueen => {
            captured = Piece::Empty;
            captured_square = mv.to;
            let king = pos.piece_at(mv.from);
            pos.set(mv.from, Piece::Empty);
            pos.set(mv.to, king);
            let (rook_from, rook_to) = rook_castle_squares(&mv);
            let rook = pos.piece_at(rook_from);
            pos.set(rook_from, Piece::Empty);
            pos.set(rook_to, rook);
            pos.en_passant_target = Square::NULL;
            pos.halfmove_clock = 0;
        }
        MoveFlag::EnPassant => {
            captured_square = en_passant_victim_square(mv.to, mover);
            captured = pos.piece_at(captured_square);
            pos.set(captured_square, Piece::Empty);
            let pawn = pos.piece_at(mv.from);
            pos.set(mv.from, Piece::Empty);
            pos.set(mv.to, pawn);
            pos.en_passant_target = Square::NULL;
            pos.halfmove_clock = 0;
        }
        MoveFlag::Promotion => {
            captured_square = mv.to;
            captured = pos.piece_at(mv.to);
            let kind = mv.promotion.expect("Promotion move without a promotion kind").to_piece_kind();
            pos.set(mv.from, Piece::Empty);
            pos.set(mv.to, Piece::new(kind, mover));
            pos.en_passant_target = Square::NULL;
            pos.halfmove_clock = 0;
        }
        MoveFlag::Normal => {
            captured_square = mv.to;
            captured = pos.piece_at(mv.to);
            let piece = pos.piece_at(mv.from);
            pos.set(mv.from, Piece::Empty);
            pos.set(mv.to, piece);

            if mover_kind == PieceKind::Pawn && (mv.to.row - mv.from.row).abs() == 2 {
                pos.en_passant_target = Square::new((mv.from.row + mv.to.row) / 2, mv.from.col);
            } else {
                pos.en_passant_target = Square::NULL;
            }

            pos.halfmove_clock = if captured != Piece::Empty
                || mover_kind == PieceKind::Pawn
                || mover_kind == PieceKind::King
            {
                0
            } else {
                prev_halfmove_clock + 1
            };
        }
    }

    if mover_kind == PieceKind::King {
        pos.castling.clear_color(mover);
    }
    if mover_kind == PieceKind::Rook {
        if let Some((color, side)) = home_corner(mv.from) {
            if color == mover {
                pos.castling.clear(color, side);
            }
        }
    }
    if captured.kind() == Some(PieceKind::Rook) {
        if let Some((color, side)) = home_corner(captured_square) {
            if color != mover {
                pos.castling.clear(color, side);
            }
        }
    }

    if mover == Color::Black {
        pos.fullmove_number += 1;
    }
    pos.side_to_move = !mover;

    let record = HistoryRecord {
        mv,
        captured,
        prev_castling,
        prev_en_passant_target,
        prev_halfmove_clock,
        prev_fullmove_number,
        prev_side_to_move: mover,
    };
    if !pos.history.push(record) {
        return Err(MoveMachineError::HistoryFull { limit: HISTORY_CAPACITY });
    }
    Ok(())
}

/// Undo the most recent `apply`, restoring the position exactly.
///
/// Precondition: the last mutation on `pos` was a matching `apply`. Mirrors
/// the invariant `revert ∘ apply = id`.
pub fn revert(pos: &mut Position) -> Result<(), MoveMachineError> {
    let Some(record) = pos.history.pop() else {
        return Err(MoveMachineError::HistoryEmpty);
    };

    pos.side_to_move = record.prev_side_to_move;
    pos.castling = record.prev_castling;
    pos.en_passant_target = record.prev_en_passant_target;
    pos.halfmove_clock = record.prev_halfmove_clock;
    pos.fullmove_number = record.prev_fullmove_number;

    let mover = record.prev_side_to_move;
    let mv = record.mv;

    match mv.flag {
        MoveFlag::CastleKing | MoveFlag::CastleQueen => {
            let king = pos.piece_at(mv.to);
            pos.set(mv.to, Piece::Empty);
            pos.set(mv.from, king);
            let (rook_from, rook_to) = rook_castle_squares(&mv);
            let rook = pos.piece_at(rook_to);
            pos.set(rook_to, Piece::Empty);
            pos.set(rook_from, rook);
        }
        MoveFlag::EnPassant => {
            let pawn = pos.piece_at(mv.to);
            pos.set(mv.to, Piece::Empty);
            pos.set(mv.from, pawn);
            let victim_square = en_passant_victim_square(mv.to, mover);
            pos.set(victim_square, record.captured);
        }
        MoveFlag::Promotion => {
            pos.set(mv.from, Piece::new(PieceKind::Pawn, mover));
            pos.set(mv.to, record.captured);
        }
        MoveFlag::Normal => {
            let piece = pos.piece_at(mv.to);
            pos.set(mv.to, record.captured);
            pos.set(mv.from, piece);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply, revert};
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::mv::{Move, MoveFlag, PromotionKind};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn e2e4_sets_en_passant_and_flips_side() {
        let mut pos = Position::starting_position();
        apply(&mut pos, Move::normal(Square::new(6, 4), Square::new(4, 4))).unwrap();
        assert_eq!(pos.side_to_move, Color::Black);
        assert_eq!(pos.en_passant_target, Square::new(5, 4));
        assert_eq!(pos.halfmove_clock, 0);
        assert_eq!(pos.fullmove_number, 1);
        assert_eq!(pos.piece_at(Square::new(6, 4)), Piece::Empty);
        assert_eq!(
            pos.piece_at(Square::new(4, 4)),
            Piece::new(PieceKind::Pawn, Color::White)
        );
    }

    #[test]
    fn revert_after_apply_restores_starting_position() {
        let mut pos = Position::starting_position();
        let before = format!("{pos}");
        apply(&mut pos, Move::normal(Square::new(6, 4), Square::new(4, 4))).unwrap();
        revert(&mut pos).unwrap();
        assert_eq!(format!("{pos}"), before);
        assert_eq!(pos.history_len(), 0);
    }

    #[test]
    fn black_move_increments_fullmove_number() {
        let mut pos = Position::starting_position();
        apply(&mut pos, Move::normal(Square::new(6, 4), Square::new(4, 4))).unwrap();
        apply(&mut pos, Move::normal(Square::new(1, 4), Square::new(3, 4))).unwrap();
        assert_eq!(pos.fullmove_number, 2);
        assert_eq!(pos.side_to_move, Color::White);
    }

    #[test]
    fn en_passant_removes_captured_pawn() {
        let mut pos = Position::empty();
        pos.set(Square::new(4, 3), Piece::new(PieceKind::Pawn, Color::White));
        pos.set(Square::new(6, 4), Piece::new(PieceKind::Pawn, Color::Black));
        pos.set(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        pos.set(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        pos.side_to_move = Color::Black;

        apply(&mut pos, Move::normal(Square::new(6, 4), Square::new(4, 4))).unwrap();
        assert_eq!(pos.en_passant_target, Square::new(5, 4));
        assert_eq!(pos.side_to_move, Color::White);

        apply(&mut pos, Move::en_passant(Square::new(4, 3), Square::new(5, 4))).unwrap();
        assert_eq!(pos.piece_at(Square::new(4, 4)), Piece::Empty);
        assert_eq!(
            pos.piece_at(Square::new(5, 4)),
            Piece::new(PieceKind::Pawn, Color::White)
        );
        assert_eq!(pos.piece_at(Square::new(4, 3)), Piece::Empty);

        revert(&mut pos).unwrap();
        assert_eq!(
            pos.piece_at(Square::new(4, 4)),
            Piece::new(PieceKind::Pawn, Color::Black)
        );
        assert_eq!(pos.piece_at(Square::new(4, 3)), Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(pos.piece_at(Square::new(5, 4)), Piece::Empty);
    }

    #[test]
    fn castle_king_moves_rook_and_clears_rights() {
        let mut pos = Position::empty();
        pos.set(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        pos.set(Square::new(7, 7), Piece::new(PieceKind::Rook, Color::White));
        pos.set(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        pos.castling = CastleRights::ALL;

        apply(
            &mut pos,
            Move {
                from: Square::new(7, 4),
                to: Square::new(7, 6),
                promotion: None,
                flag: MoveFlag::CastleKing,
            },
        )
        .unwrap();
        assert_eq!(pos.piece_at(Square::new(7, 6)), Piece::new(PieceKind::King, Color::White));
        assert_eq!(pos.piece_at(Square::new(7, 5)), Piece::new(PieceKind::Rook, Color::White));
        assert!(!pos.castling.wk && !pos.castling.wq);
        assert_eq!(pos.halfmove_clock, 0);

        revert(&mut pos).unwrap();
        assert_eq!(pos.piece_at(Square::new(7, 4)), Piece::new(PieceKind::King, Color::White));
        assert_eq!(pos.piece_at(Square::new(7, 7)), Piece::new(PieceKind::Rook, Color::White));
        assert!(pos.castling.wk && pos.castling.wq);
    }

    #[test]
    fn promotion_defaults_to_requested_kind_and_reverts() {
        let mut pos = Position::empty();
        pos.set(Square::new(1, 0), Piece::new(PieceKind::Pawn, Color::White));
        pos.set(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        pos.set(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));

        apply(
            &mut pos,
            Move::promotion(Square::new(1, 0), Square::new(0, 0), PromotionKind::Queen),
        )
        .unwrap();
        assert_eq!(pos.piece_at(Square::new(0, 0)), Piece::new(PieceKind::Queen, Color::White));
        assert_eq!(pos.piece_at(Square::new(1, 0)), Piece::Empty);

        revert(&mut pos).unwrap();
        assert_eq!(pos.piece_at(Square::new(1, 0)), Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(pos.piece_at(Square::new(0, 0)), Piece::Empty);
    }

    #[test]
    fn capturing_rook_on_home_corner_clears_opposing_right() {
        let mut pos = Position::empty();
        pos.set(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        pos.set(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        pos.set(Square::new(1, 7), Piece::new(PieceKind::Bishop, Color::White));
        pos.set(Square::new(0, 7), Piece::new(PieceKind::Rook, Color::Black));
        pos.castling = CastleRights::ALL;

        apply(&mut pos, Move::normal(Square::new(1, 7), Square::new(0, 7))).unwrap();
        assert!(!pos.castling.bk);
        assert!(pos.castling.bq && pos.castling.wk && pos.castling.wq);
    }

    #[test]
    fn quiet_knight_move_increments_halfmove_clock() {
        let mut pos = Position::starting_position();
        apply(&mut pos, Move::normal(Square::new(7, 1), Square::new(5, 2))).unwrap();
        assert_eq!(pos.halfmove_clock, 1);
    }

    #[test]
    fn quiet_king_move_resets_halfmove_clock() {
        let mut pos = Position::empty();
        pos.set(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        pos.set(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
        pos.halfmove_clock = 12;
        apply(&mut pos, Move::normal(Square::new(7, 4), Square::new(7, 5))).unwrap();
        assert_eq!(pos.halfmove_clock, 0);
    }

    #[test]
    fn revert_with_no_prior_apply_returns_history_empty() {
        let mut pos = Position::starting_position();
        assert_eq!(revert(&mut pos), Err(crate::error::MoveMachineError::HistoryEmpty));
    }
}
