//! Auxiliary game state threaded into move generation: check bits, moved bits, last move.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::color::Color;
use crate::square::Square;

/// Which side of the board a rook starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// "Has moved" bits for both kings and all four rooks.
///
/// Bit 0 = white king, 1 = white a-rook, 2 = white h-rook,
/// bit 3 = black king, 4 = black a-rook, 5 = black h-rook.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MovedFlags(u8);

impl MovedFlags {
    /// Nothing has moved.
    pub const NONE: MovedFlags = MovedFlags(0);
    /// Every king and rook has moved.
    pub const ALL: MovedFlags = MovedFlags(0b11_1111);

    pub const WHITE_KING: MovedFlags = MovedFlags(0b00_0001);
    pub const WHITE_QUEEN_ROOK: MovedFlags = MovedFlags(0b00_0010);
    pub const WHITE_KING_ROOK: MovedFlags = MovedFlags(0b00_0100);
    pub const BLACK_KING: MovedFlags = MovedFlags(0b00_1000);
    pub const BLACK_QUEEN_ROOK: MovedFlags = MovedFlags(0b01_0000);
    pub const BLACK_KING_ROOK: MovedFlags = MovedFlags(0b10_0000);

    /// Create flags from raw bits, masking to the lower 6 bits.
    #[inline]
    pub const fn new(bits: u8) -> MovedFlags {
        MovedFlags(bits & 0b11_1111)
    }

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return `true` if no flag is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: MovedFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new flags with all bits from `other` added.
    #[inline]
    pub const fn insert(self, other: MovedFlags) -> MovedFlags {
        MovedFlags(self.0 | other.0)
    }

    /// Return new flags with all bits from `other` removed.
    #[inline]
    pub const fn remove(self, other: MovedFlags) -> MovedFlags {
        MovedFlags(self.0 & !other.0)
    }

    /// Return the king flag for a playing color.
    #[inline]
    pub const fn king(color: Color) -> MovedFlags {
        match color {
            Color::White => Self::WHITE_KING,
            Color::Black => Self::BLACK_KING,
            Color::None => Self::NONE,
        }
    }

    /// Return the rook flag for a playing color and side.
    #[inline]
    pub const fn rook(color: Color, side: CastleSide) -> MovedFlags {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING_ROOK,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN_ROOK,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING_ROOK,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN_ROOK,
            (Color::None, _) => Self::NONE,
        }
    }

    /// Return the flag tied to a king or rook home square (e1, a1, h1, e8, a8, h8).
    ///
    /// Any piece leaving or being captured on one of these squares sets the flag.
    pub const fn for_home_square(sq: Square) -> MovedFlags {
        match (sq.file(), sq.rank()) {
            ('e', '1') => Self::WHITE_KING,
            ('a', '1') => Self::WHITE_QUEEN_ROOK,
            ('h', '1') => Self::WHITE_KING_ROOK,
            ('e', '8') => Self::BLACK_KING,
            ('a', '8') => Self::BLACK_QUEEN_ROOK,
            ('h', '8') => Self::BLACK_KING_ROOK,
            _ => Self::NONE,
        }
    }
}

impl BitAnd for MovedFlags {
    type Output = MovedFlags;
    #[inline]
    fn bitand(self, rhs: MovedFlags) -> MovedFlags {
        MovedFlags(self.0 & rhs.0)
    }
}

impl BitOr for MovedFlags {
    type Output = MovedFlags;
    #[inline]
    fn bitor(self, rhs: MovedFlags) -> MovedFlags {
        MovedFlags(self.0 | rhs.0)
    }
}

impl Not for MovedFlags {
    type Output = MovedFlags;
    #[inline]
    fn not(self) -> MovedFlags {
        MovedFlags(!self.0 & 0b11_1111)
    }
}

impl fmt::Debug for MovedFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovedFlags({:06b})", self.0)
    }
}

/// Game state beyond raw piece placement that move generation may consult.
///
/// The default value is the start of a game: no checks, nothing moved, no
/// previous move and no pawn move yet. Callers own and update this record;
/// generators only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameProperties {
    /// White king is in check.
    pub white_in_check: bool,
    /// Black king is in check.
    pub black_in_check: bool,
    /// Which kings and rooks have left their home squares.
    pub moved: MovedFlags,
    /// Origin of the most recent move, [`Square::EMPTY`] before the first move.
    pub last_move_start: Square,
    /// Destination of the most recent move, [`Square::EMPTY`] before the first move.
    pub last_move_end: Square,
    /// Plies since a pawn last moved; `None` until a pawn has moved at all.
    pub turns_since_pawn_move: Option<u32>,
}

impl GameProperties {
    /// Return the check flag for `color`. Always `false` for [`Color::None`].
    #[inline]
    pub const fn in_check(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_in_check,
            Color::Black => self.black_in_check,
            Color::None => false,
        }
    }

    /// Return `true` once a move has been recorded.
    #[inline]
    pub const fn has_last_move(&self) -> bool {
        self.last_move_start.is_in_grid_range() && self.last_move_end.is_in_grid_range()
    }

    /// Return `true` when the previous ply was a pawn move, the only ply on which
    /// an en passant reply is possible.
    #[inline]
    pub const fn pawn_just_moved(&self) -> bool {
        matches!(self.turns_since_pawn_move, Some(0)) && self.has_last_move()
    }

    /// Return `true` if neither the king nor the rook on `side` has moved.
    ///
    /// This only reflects the moved bits; path and attack conditions are the caller's concern.
    #[inline]
    pub const fn castling_available(&self, color: Color, side: CastleSide) -> bool {
        if !color.is_playing() {
            return false;
        }
        let needed = MovedFlags::king(color).insert(MovedFlags::rook(color, side));
        (self.moved.bits() & needed.bits()) == 0
    }
}

impl fmt::Display for GameProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut castling = String::with_capacity(4);
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.castling_available(color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        write!(f, "castling {castling}")?;
        write!(
            f,
            " check {}{}",
            if self.white_in_check { "W" } else { "-" },
            if self.black_in_check { "b" } else { "-" }
        )?;
        if self.has_last_move() {
            write!(f, " last {}{}", self.last_move_start, self.last_move_end)?;
        } else {
            write!(f, " last -")?;
        }
        match self.turns_since_pawn_move {
            Some(n) => write!(f, " pawn {n}"),
            None => write!(f, " pawn -"),
        }
    }
}
