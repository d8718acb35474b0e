//! Piece colors.

use std::fmt;
use std::ops::Not;

/// The color of a piece, or `None` where a color slot describes an empty square.
///
/// `None` is never the color of a real board occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    None = 0,
    White = 1,
    Black = 2,
}

impl Color {
    /// Number of playing colors.
    pub const COUNT: usize = 2;

    /// The two playing colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return `true` for White or Black.
    #[inline]
    pub const fn is_playing(self) -> bool {
        !matches!(self, Color::None)
    }

    /// Return the opposite playing color. `None` stays `None`.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    /// Return `true` if `other` is a playing color different from this playing color.
    ///
    /// `None` on either side is neither friend nor foe.
    #[inline]
    pub const fn is_opponent_of(self, other: Color) -> bool {
        matches!(
            (self, other),
            (Color::White, Color::Black) | (Color::Black, Color::White)
        )
    }

    /// Return the tray/array index (0 for White, 1 for Black), `None` for the colorless value.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self {
            Color::White => Some(0),
            Color::Black => Some(1),
            Color::None => None,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
            Color::None => write!(f, "none"),
        }
    }
}
