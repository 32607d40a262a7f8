//! Castling rights: four independent booleans, one per corner.

use std::fmt;

use crate::color::Color;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// The four castling rights still available to each side.
///
/// Monotonically decreasing over the course of a game: rights are only ever
/// cleared by [`crate::position::apply`], never set, except that `revert`
/// restores whatever the pre-move value was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastleRights {
    /// No castling rights for either side.
    pub const NONE: CastleRights = CastleRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    /// All four castling rights, the starting-position default.
    pub const ALL: CastleRights = CastleRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    /// Check whether a specific color and side can still castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.wk,
            (Color::White, CastleSide::QueenSide) => self.wq,
            (Color::Black, CastleSide::KingSide) => self.bk,
            (Color::Black, CastleSide::QueenSide) => self.bq,
        }
    }

    /// Clear both rights for the given color.
    #[inline]
    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Clear a single right.
    #[inline]
    pub fn clear(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.wk = false,
            (Color::White, CastleSide::QueenSide) => self.wq = false,
            (Color::Black, CastleSide::KingSide) => self.bk = false,
            (Color::Black, CastleSide::QueenSide) => self.bq = false,
        }
    }

    /// Parse the castling field of the position file format: any subset of
    /// `KQkq` in that order, or `-` if none remain.
    pub fn from_str_field(s: &str) -> Option<CastleRights> {
        if s == "-" {
            return Some(CastleRights::NONE);
        }
        let mut rights = CastleRights::NONE;
        let mut chars = s.chars().peekable();
        if chars.peek() == Some(&'K') {
            rights.wk = true;
            chars.next();
        }
        if chars.peek() == Some(&'Q') {
            rights.wq = true;
            chars.next();
        }
        if chars.peek() == Some(&'k') {
            rights.bk = true;
            chars.next();
        }
        if chars.peek() == Some(&'q') {
            rights.bq = true;
            chars.next();
        }
        if chars.next().is_some() {
            return None;
        }
        Some(rights)
    }

    /// Serialize to the `KQkq`/`-` field used by the position file format.
    pub fn to_field(self) -> String {
        if !(self.wk || self.wq || self.bk || self.bq) {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        if self.wk {
            s.push('K');
        }
        if self.wq {
            s.push('Q');
        }
        if self.bk {
            s.push('k');
        }
        if self.bq {
            s.push('q');
        }
        s
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_field())
    }
}
