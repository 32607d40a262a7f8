//! A square's occupant: either empty, or a colored piece.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// The occupant of a single board square.
///
/// Modeled as a sum type rather than a `(kind, color)` pair with a sentinel
/// color so that "empty" cannot be constructed with a color attached: the
/// `kind = Empty ⇔ color = None` invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Occupied(PieceKind, Color),
}

impl Piece {
    /// Shorthand for `Piece::Occupied(kind, color)`.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece::Occupied(kind, color)
    }

    /// `true` if this square holds no piece.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// The piece kind, or `None` if the square is empty.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(kind, _) => Some(kind),
        }
    }

    /// The piece color, or `None` if the square is empty.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(_, color) => Some(color),
        }
    }

    /// `true` if this square holds a piece of the given color.
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Parse a position-file / FEN-style piece character: uppercase for
    /// White, lowercase for Black, `.` (or any unrecognized char) as empty.
    pub fn from_char(c: char) -> Option<Piece> {
        if c == '.' {
            return Some(Piece::Empty);
        }
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::Occupied(kind, color))
    }

    /// Render as a position-file / FEN-style piece character.
    pub fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Occupied(kind, Color::White) => kind.fen_char().to_ascii_uppercase(),
            Piece::Occupied(kind, Color::Black) => kind.fen_char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn empty_has_no_kind_or_color() {
        assert!(Piece::Empty.is_empty());
        assert_eq!(Piece::Empty.kind(), None);
        assert_eq!(Piece::Empty.color(), None);
    }

    #[test]
    fn occupied_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let p = Piece::new(kind, color);
                assert!(!p.is_empty());
                assert_eq!(p.kind(), Some(kind));
                assert_eq!(p.color(), Some(color));
            }
        }
    }

    #[test]
    fn from_char_case_selects_color() {
        assert_eq!(Piece::from_char('P'), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(Piece::from_char('p'), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert_eq!(Piece::from_char('.'), Some(Piece::Empty));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn to_char_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let p = Piece::new(kind, color);
                assert_eq!(Piece::from_char(p.to_char()), Some(p));
            }
        }
        assert_eq!(Piece::Empty.to_char(), '.');
    }

    #[test]
    fn is_color() {
        let white_king = Piece::new(PieceKind::King, Color::White);
        assert!(white_king.is_color(Color::White));
        assert!(!white_king.is_color(Color::Black));
        assert!(!Piece::Empty.is_color(Color::White));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Piece::default(), Piece::Empty);
    }
}
