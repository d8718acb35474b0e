//! A piece in play: fixed color and kind, mutable position.

use std::fmt;

use crate::color::Color;
use crate::error::MoveGenError;
use crate::movegen::{SquareList, generate_moves};
use crate::piece_kind::PieceKind;
use crate::properties::GameProperties;
use crate::snapshot::Snapshot;
use crate::square::Square;

/// A chess piece with its color, kind and current square.
///
/// Color and kind are fixed for the piece's lifetime. There is no default
/// piece; every constructor names both.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    position: Square,
}

impl Piece {
    /// Create a piece on `(file, rank)`. Off-board coordinates resolve to [`Square::EMPTY`].
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, file: char, rank: char) -> Piece {
        Piece {
            color,
            kind,
            position: Square::new(file, rank),
        }
    }

    /// Create a pawn.
    pub const fn pawn(file: char, rank: char, color: Color) -> Piece {
        Piece::new(PieceKind::Pawn, color, file, rank)
    }

    /// Create a knight.
    pub const fn knight(file: char, rank: char, color: Color) -> Piece {
        Piece::new(PieceKind::Knight, color, file, rank)
    }

    /// Create a bishop.
    pub const fn bishop(file: char, rank: char, color: Color) -> Piece {
        Piece::new(PieceKind::Bishop, color, file, rank)
    }

    /// Create a rook.
    pub const fn rook(file: char, rank: char, color: Color) -> Piece {
        Piece::new(PieceKind::Rook, color, file, rank)
    }

    /// Create a queen.
    pub const fn queen(file: char, rank: char, color: Color) -> Piece {
        Piece::new(PieceKind::Queen, color, file, rank)
    }

    /// Create a king.
    pub const fn king(file: char, rank: char, color: Color) -> Piece {
        Piece::new(PieceKind::King, color, file, rank)
    }

    /// Parse a glyph (`P`, `n`, ...) into a piece standing on `square`.
    ///
    /// Upper-case letters are White, lower-case Black.
    pub fn from_glyph(glyph: char, square: Square) -> Option<Piece> {
        let kind = PieceKind::from_letter(glyph)?;
        let color = if glyph.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color, square.file(), square.rank()))
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    pub const fn is_white(&self) -> bool {
        matches!(self.color, Color::White)
    }

    #[inline]
    pub const fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    /// Move the piece to `(file, rank)`, or off the board if either is out of range.
    pub fn set_position(&mut self, file: char, rank: char) {
        self.position = Square::new(file, rank);
    }

    /// Return the display glyph: upper-case for White, lower-case for Black,
    /// `' '` for a colorless piece.
    pub const fn representation(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
            Color::None => ' ',
        }
    }

    /// Fill `list` with the squares this piece may move to.
    ///
    /// `positions` and `colors` describe every other piece, index for index.
    pub fn available_moves(
        &self,
        list: &mut SquareList,
        positions: &[Square],
        colors: &[Color],
        props: &GameProperties,
    ) -> Result<(), MoveGenError> {
        generate_moves(self.kind, self.color, self.position, positions, colors, props, list)
    }

    /// Like [`available_moves`](Piece::available_moves), deriving the
    /// positions and colors from the other pieces themselves.
    pub fn moves(
        &self,
        list: &mut SquareList,
        others: &[Piece],
        props: &GameProperties,
    ) -> Result<(), MoveGenError> {
        let snapshot = Snapshot::from_pieces(others);
        self.available_moves(list, snapshot.positions(), snapshot.colors(), props)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.representation(), self.position)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({:?} {:?} {})", self.color, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::movegen::SquareList;
    use crate::piece_kind::PieceKind;
    use crate::properties::GameProperties;
    use crate::square::Square;

    #[test]
    fn constructors_set_identity_and_position() {
        let knight = Piece::knight('g', '1', Color::White);
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.color(), Color::White);
        assert_eq!(knight.position(), Square::G1);
        assert!(knight.is_white());
        assert!(!knight.is_black());
    }

    #[test]
    fn invalid_coordinates_become_sentinel() {
        let rook = Piece::rook('x', '1', Color::Black);
        assert_eq!(rook.position(), Square::EMPTY);

        let mut pawn = Piece::pawn('e', '2', Color::White);
        pawn.set_position('e', '0');
        assert_eq!(pawn.position(), Square::EMPTY);
        pawn.set_position('e', '4');
        assert_eq!(pawn.position(), Square::E4);
    }

    #[test]
    fn colorless_piece_is_neither_side() {
        let ghost = Piece::new(PieceKind::Queen, Color::None, 'd', '1');
        assert!(!ghost.is_white());
        assert!(!ghost.is_black());
        assert_eq!(ghost.representation(), ' ');
    }

    #[test]
    fn representation_follows_color() {
        assert_eq!(Piece::pawn('a', '2', Color::White).representation(), 'P');
        assert_eq!(Piece::pawn('a', '7', Color::Black).representation(), 'p');
        assert_eq!(Piece::knight('b', '1', Color::White).representation(), 'N');
        assert_eq!(Piece::queen('d', '8', Color::Black).representation(), 'q');
        assert_eq!(Piece::king('e', '1', Color::White).representation(), 'K');
    }

    #[test]
    fn from_glyph() {
        assert_eq!(Piece::from_glyph('N', Square::B1), Some(Piece::knight('b', '1', Color::White)));
        assert_eq!(Piece::from_glyph('k', Square::E8), Some(Piece::king('e', '8', Color::Black)));
        assert_eq!(Piece::from_glyph('x', Square::E8), None);
    }

    #[test]
    fn moves_from_piece_list_matches_parallel_sequences() {
        let props = GameProperties::default();
        let bishop = Piece::bishop('c', '1', Color::White);
        let others = [
            Piece::pawn('d', '2', Color::White),
            Piece::pawn('b', '2', Color::Black),
        ];

        let mut from_list = SquareList::new();
        bishop.moves(&mut from_list, &others, &props).unwrap();

        let mut from_sequences = SquareList::new();
        bishop
            .available_moves(
                &mut from_sequences,
                &[Square::D2, Square::B2],
                &[Color::White, Color::Black],
                &props,
            )
            .unwrap();

        assert_eq!(from_list.as_slice(), from_sequences.as_slice());
        assert_eq!(from_list.as_slice(), &[Square::B2]);
    }

    #[test]
    fn display_and_debug() {
        let queen = Piece::queen('d', '8', Color::Black);
        assert_eq!(format!("{queen}"), "qd8");
        assert_eq!(format!("{queen:?}"), "Piece(Black Queen d8)");
    }
}
