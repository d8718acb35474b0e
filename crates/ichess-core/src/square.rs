//! Board squares in file/rank character coordinates.

use std::fmt;

/// A square on the chess board, stored as its ASCII file ('a'..='h') and rank ('1'..='8').
///
/// A square is either fully on the board or the [`Square::EMPTY`] sentinel; a
/// half-valid coordinate is never constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8, u8);

impl Square {
    /// Total number of on-board squares.
    pub const COUNT: usize = 64;

    /// The invalid/empty sentinel, `{' ', ' '}`.
    pub const EMPTY: Square = Square(b' ', b' ');

    /// Create a square from file and rank characters.
    ///
    /// Out-of-range input on either coordinate yields [`Square::EMPTY`].
    #[inline]
    pub const fn new(file: char, rank: char) -> Square {
        if in_file_range(file as u32) && in_rank_range(rank as u32) {
            Square(file as u8, rank as u8)
        } else {
            Square::EMPTY
        }
    }

    /// Create a square from zero-based file and rank indices, returning `None` if out of range.
    #[inline]
    pub const fn from_indices(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(b'a' + file, b'1' + rank))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        let sq = Square::new(file, rank);
        sq.is_in_grid_range().then_some(sq)
    }

    /// Return `true` iff the file is in 'a'..='h' and the rank in '1'..='8'.
    #[inline]
    pub const fn is_in_grid_range(self) -> bool {
        in_file_range(self.0 as u32) && in_rank_range(self.1 as u32)
    }

    /// Return the file character (' ' for the sentinel).
    #[inline]
    pub const fn file(self) -> char {
        self.0 as char
    }

    /// Return the rank character (' ' for the sentinel).
    #[inline]
    pub const fn rank(self) -> char {
        self.1 as char
    }

    /// Return zero-based `(file, rank)` indices, or `None` for the sentinel.
    #[inline]
    pub const fn indices(self) -> Option<(usize, usize)> {
        if self.is_in_grid_range() {
            Some(((self.0 - b'a') as usize, (self.1 - b'1') as usize))
        } else {
            None
        }
    }

    /// Step `files` files and `ranks` ranks away from this square.
    ///
    /// Returns `None` when the result leaves the board or when `self` is the sentinel.
    #[inline]
    pub const fn offset(self, files: i8, ranks: i8) -> Option<Square> {
        if !self.is_in_grid_range() {
            return None;
        }
        let file = self.0 as i16 + files as i16;
        let rank = self.1 as i16 + ranks as i16;
        if file >= 0 && rank >= 0 && in_file_range(file as u32) && in_rank_range(rank as u32) {
            Some(Square(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares, rank 1 first, files a to h within each rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|rank| (0u8..8).map(move |file| Square(b'a' + file, b'1' + rank)))
    }

    // Named square constants
    pub const A1: Square = Square(b'a', b'1');
    pub const B1: Square = Square(b'b', b'1');
    pub const C1: Square = Square(b'c', b'1');
    pub const D1: Square = Square(b'd', b'1');
    pub const E1: Square = Square(b'e', b'1');
    pub const F1: Square = Square(b'f', b'1');
    pub const G1: Square = Square(b'g', b'1');
    pub const H1: Square = Square(b'h', b'1');
    pub const A2: Square = Square(b'a', b'2');
    pub const B2: Square = Square(b'b', b'2');
    pub const C2: Square = Square(b'c', b'2');
    pub const D2: Square = Square(b'd', b'2');
    pub const E2: Square = Square(b'e', b'2');
    pub const F2: Square = Square(b'f', b'2');
    pub const G2: Square = Square(b'g', b'2');
    pub const H2: Square = Square(b'h', b'2');
    pub const A3: Square = Square(b'a', b'3');
    pub const B3: Square = Square(b'b', b'3');
    pub const C3: Square = Square(b'c', b'3');
    pub const D3: Square = Square(b'd', b'3');
    pub const E3: Square = Square(b'e', b'3');
    pub const F3: Square = Square(b'f', b'3');
    pub const G3: Square = Square(b'g', b'3');
    pub const H3: Square = Square(b'h', b'3');
    pub const A4: Square = Square(b'a', b'4');
    pub const B4: Square = Square(b'b', b'4');
    pub const C4: Square = Square(b'c', b'4');
    pub const D4: Square = Square(b'd', b'4');
    pub const E4: Square = Square(b'e', b'4');
    pub const F4: Square = Square(b'f', b'4');
    pub const G4: Square = Square(b'g', b'4');
    pub const H4: Square = Square(b'h', b'4');
    pub const A5: Square = Square(b'a', b'5');
    pub const B5: Square = Square(b'b', b'5');
    pub const C5: Square = Square(b'c', b'5');
    pub const D5: Square = Square(b'd', b'5');
    pub const E5: Square = Square(b'e', b'5');
    pub const F5: Square = Square(b'f', b'5');
    pub const G5: Square = Square(b'g', b'5');
    pub const H5: Square = Square(b'h', b'5');
    pub const A6: Square = Square(b'a', b'6');
    pub const B6: Square = Square(b'b', b'6');
    pub const C6: Square = Square(b'c', b'6');
    pub const D6: Square = Square(b'd', b'6');
    pub const E6: Square = Square(b'e', b'6');
    pub const F6: Square = Square(b'f', b'6');
    pub const G6: Square = Square(b'g', b'6');
    pub const H6: Square = Square(b'h', b'6');
    pub const A7: Square = Square(b'a', b'7');
    pub const B7: Square = Square(b'b', b'7');
    pub const C7: Square = Square(b'c', b'7');
    pub const D7: Square = Square(b'd', b'7');
    pub const E7: Square = Square(b'e', b'7');
    pub const F7: Square = Square(b'f', b'7');
    pub const G7: Square = Square(b'g', b'7');
    pub const H7: Square = Square(b'h', b'7');
    pub const A8: Square = Square(b'a', b'8');
    pub const B8: Square = Square(b'b', b'8');
    pub const C8: Square = Square(b'c', b'8');
    pub const D8: Square = Square(b'd', b'8');
    pub const E8: Square = Square(b'e', b'8');
    pub const F8: Square = Square(b'f', b'8');
    pub const G8: Square = Square(b'g', b'8');
    pub const H8: Square = Square(b'h', b'8');
}

const fn in_file_range(c: u32) -> bool {
    c >= b'a' as u32 && c <= b'h' as u32
}

const fn in_rank_range(c: u32) -> bool {
    c >= b'1' as u32 && c <= b'8' as u32
}

impl Default for Square {
    fn default() -> Self {
        Square::EMPTY
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_grid_range() {
            write!(f, "{}{}", self.file(), self.rank())
        } else {
            write!(f, "--")
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
